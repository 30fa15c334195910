// Last known cursor position relative to the canvas

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    pub pos: Option<[f64; 2]>,
    pub max_distance: f64,
}

impl Pointer {
    pub fn new(max_distance: f64) -> Self {
        Pointer {
            pos: None,
            max_distance,
        }
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }

    pub fn clear(&mut self) {
        self.pos = None;
    }

    /// Whether a point at `distance` from the pointer should be linked to it.
    /// Always false while the pointer is outside the canvas.
    pub fn reaches(&self, distance: f64) -> bool {
        self.pos.is_some() && distance < self.max_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear() {
        let mut pointer = Pointer::new(150.0);
        assert!(!pointer.reaches(0.0));

        pointer.set(10.0, 20.0);
        assert_eq!(pointer.pos, Some([10.0, 20.0]));
        assert!(pointer.reaches(149.9));
        assert!(!pointer.reaches(150.0));

        pointer.clear();
        assert_eq!(pointer.pos, None);
        assert!(!pointer.reaches(0.0));
    }
}
