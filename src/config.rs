// Tunables for the particle field, exposed to JS as a plain value object

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Canvas area in px² per particle.
    pub density_area: f64,
    /// Particles closer than this are joined by a line.
    pub connect_distance: f64,
    /// Particles closer than this to the pointer are joined to it.
    pub pointer_distance: f64,
    /// Distance travelled per frame.
    pub speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub line_width: f64,
    pub pointer_line_width: f64,
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }
}

impl FieldConfig {
    pub const DENSITY_AREA: f64 = 9000.0;
    pub const CONNECT_DISTANCE: f64 = 120.0;
    pub const POINTER_DISTANCE: f64 = 150.0;
    /// Smallest density honoured, so a tiny value from JS can't ask for millions of particles.
    pub const MIN_DENSITY_AREA: f64 = 100.0;
    pub const MIN_RADIUS: f64 = 0.1;

    /// Number of particles for a canvas of the given size, one per `density_area` px².
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        let area = width.max(0.0) * height.max(0.0);
        if self.density_area <= 0.0 || !self.density_area.is_finite() || !area.is_finite() {
            return 0;
        }
        let density_area = self.density_area.max(FieldConfig::MIN_DENSITY_AREA);
        (area / density_area).floor() as usize
    }

    // Radii are drawn with canvas arc(), which rejects negative values
    pub fn radius_range(&self) -> (f64, f64) {
        let defaults = FieldConfig::default();
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };
        let low = finite_or(self.min_radius, defaults.min_radius).max(FieldConfig::MIN_RADIUS);
        let high = finite_or(self.max_radius, defaults.max_radius).max(FieldConfig::MIN_RADIUS);
        if low <= high {
            (low, high)
        } else {
            (high, low)
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            density_area: FieldConfig::DENSITY_AREA,
            connect_distance: FieldConfig::CONNECT_DISTANCE,
            pointer_distance: FieldConfig::POINTER_DISTANCE,
            speed: 0.15,
            min_radius: 1.0,
            max_radius: 3.0,
            line_width: 0.3,
            pointer_line_width: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_floor_of_area_over_density() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(900.0, 900.0), 90);
        assert_eq!(config.particle_count(1920.0, 1080.0), 230);
        assert_eq!(config.particle_count(100.0, 89.0), 0);
        assert_eq!(config.particle_count(0.0, 900.0), 0);
    }

    #[test]
    fn degenerate_density_gives_no_particles() {
        let config = FieldConfig {
            density_area: 0.0,
            ..FieldConfig::default()
        };
        assert_eq!(config.particle_count(900.0, 900.0), 0);

        let config = FieldConfig {
            density_area: f64::NAN,
            ..FieldConfig::default()
        };
        assert_eq!(config.particle_count(900.0, 900.0), 0);
    }

    #[test]
    fn tiny_density_is_clamped() {
        let config = FieldConfig {
            density_area: 1e-9,
            ..FieldConfig::default()
        };
        assert_eq!(config.particle_count(900.0, 900.0), 8100);
    }

    #[test]
    fn radius_range_is_ordered_and_positive() {
        assert_eq!(FieldConfig::default().radius_range(), (1.0, 3.0));

        let reversed = FieldConfig {
            min_radius: 4.0,
            max_radius: 2.0,
            ..FieldConfig::default()
        };
        assert_eq!(reversed.radius_range(), (2.0, 4.0));

        let negative = FieldConfig {
            min_radius: -3.0,
            max_radius: -1.0,
            ..FieldConfig::default()
        };
        assert_eq!(negative.radius_range(), (0.1, 0.1));

        let broken = FieldConfig {
            min_radius: f64::NAN,
            max_radius: f64::INFINITY,
            ..FieldConfig::default()
        };
        assert_eq!(broken.radius_range(), (1.0, 3.0));
    }
}
