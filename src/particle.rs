// Simple particle struct to keep track of individual position, velocity, radius and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use std::f64::consts::PI;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(id: u64, pos: [f64; 2], vel: [f64; 2], radius: f64, color: Color) -> Particle {
        Particle {
            id,
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Random position inside the canvas, random heading at `config.speed`,
    /// random radius from `config.radius_range()`.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        id: u64,
        width: f64,
        height: f64,
        config: &FieldConfig,
        color: Color,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let heading = rng.gen::<f64>() * 2.0 * PI;
        let vel_x = heading.cos() * config.speed;
        let vel_y = heading.sin() * config.speed;
        let (min_radius, max_radius) = config.radius_range();
        let radius = rng.gen::<f64>() * (max_radius - min_radius) + min_radius;

        Particle::new(id, [pos_x, pos_y], [vel_x, vel_y], radius, color)
    }

    // Position is not clamped, a particle that crossed an edge is turned around
    // and walks back in on the next step
    pub fn update(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];

        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    pub fn distance_to(&self, point: [f64; 2]) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, point))
    }

    pub fn is_inside(&self, width: f64, height: f64) -> bool {
        self.pos[0] >= 0.0 && self.pos[0] <= width && self.pos[1] >= 0.0 && self.pos[1] <= height
    }
}
