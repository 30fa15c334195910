// The particle field: a batch of drifting particles sized to the canvas area,
// joined by lines when close to each other or to the pointer.
//
// Nothing in here touches the DOM, the browser side lives in `network`.

use crate::color::ThemeColors;
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::surface::Surface;
use rand::rngs::ThreadRng;
use rand::Rng;

pub struct ParticleField<R: Rng = ThreadRng> {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Pointer,
    colors: ThemeColors,
    config: FieldConfig,
    rng: R,
    next_id: u64,
}

impl ParticleField<ThreadRng> {
    pub fn with_thread_rng(
        width: f64,
        height: f64,
        colors: ThemeColors,
        config: FieldConfig,
    ) -> Self {
        ParticleField::new(width, height, colors, config, rand::thread_rng())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn new(width: f64, height: f64, colors: ThemeColors, config: FieldConfig, rng: R) -> Self {
        let mut field = ParticleField {
            width,
            height,
            particles: Vec::new(),
            pointer: Pointer::new(config.pointer_distance),
            colors,
            config,
            rng,
            next_id: 0,
        };
        field.populate();
        field
    }

    /// Throws away every particle and creates a fresh batch for the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Particles take their colour when created, so a new theme means a new batch.
    pub fn set_colors(&mut self, colors: ThemeColors) {
        self.colors = colors;
        self.populate();
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.set(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    fn populate(&mut self) {
        let count = self.config.particle_count(self.width, self.height);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(
                &mut self.rng,
                self.next_id,
                self.width,
                self.height,
                &self.config,
                self.colors.particle,
            ));
            self.next_id += 1;
        }
        self.particles = particles;
    }

    /// Clears the surface, moves every particle one step and draws it.
    pub fn update<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (width, height) = (self.width, self.height);
        surface.clear(width, height);
        for particle in &mut self.particles {
            particle.update(width, height);
            surface.fill_circle(particle.pos, particle.radius, particle.color);
        }
    }

    /// Index pairs `(i, j)` with `i < j` closer than the connect distance.
    pub fn links(&self) -> Vec<(usize, usize)> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                if a.distance_to(b.pos) < self.config.connect_distance {
                    links.push((i, j));
                }
            }
        }
        links
    }

    /// Indices of particles close enough to the pointer to be joined to it.
    pub fn pointer_links(&self) -> Vec<usize> {
        let pointer_pos = match self.pointer.pos {
            Some(pos) => pos,
            None => return Vec::new(),
        };
        self.particles
            .iter()
            .enumerate()
            .filter(|(_, p)| self.pointer.reaches(p.distance_to(pointer_pos)))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn connect<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (i, j) in self.links() {
            surface.stroke_line(
                self.particles[i].pos,
                self.particles[j].pos,
                self.config.line_width,
                self.colors.line,
            );
        }

        if let Some(pointer_pos) = self.pointer.pos {
            for i in self.pointer_links() {
                surface.stroke_line(
                    self.particles[i].pos,
                    pointer_pos,
                    self.config.pointer_line_width,
                    self.colors.pointer_line,
                );
            }
        }
    }

    /// One animation frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.update(surface);
        self.connect(surface);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
