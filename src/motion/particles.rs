use fastrand::Rng;

pub const PARTICLE_COUNT: usize = 40;
/// Alpha of the fill that fades the previous frame into a trail.
pub const TRAIL_FADE: f64 = 0.05;

/// One drifting dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
}

impl Particle {
    fn random(rng: &mut Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            radius: rng.f64() * 2.0 + 0.5,
            vx: rng.f64() * 0.5 - 0.25,
            vy: rng.f64() * 0.5 - 0.25,
            opacity: rng.f64() * 0.5 + 0.2,
        }
    }

    /// Move one frame and wrap to the opposite edge when leaving the canvas.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x > width {
            self.x = 0.0;
        } else if self.x < 0.0 {
            self.x = width;
        }
        if self.y > height {
            self.y = 0.0;
        } else if self.y < 0.0 {
            self.y = height;
        }
    }
}

/// The background particle field of the hero section.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(rng: &mut Rng, count: usize, width: f64, height: f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        self.particles.iter_mut().for_each(|p| p.advance(w, h));
    }

    /// Adopt a new surface size. Existing positions are kept as they are;
    /// anything now off-canvas wraps on its next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            radius: 1.0,
            vx,
            vy,
            opacity: 0.5,
        }
    }

    #[test]
    fn spawns_inside_canvas_with_small_drift() {
        let mut rng = Rng::with_seed(7);
        let field = ParticleField::new(&mut rng, PARTICLE_COUNT, 800.0, 600.0);
        assert_eq!(field.particles().len(), 40);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
            assert!((0.2..=0.7).contains(&p.opacity));
            assert!((0.5..=2.5).contains(&p.radius));
        }
    }

    #[test]
    fn wraps_past_right_edge() {
        let mut field =
            ParticleField::from_particles(vec![still(799.9, 100.0, 0.2, 0.0)], 800.0, 600.0);
        field.step();
        let p = field.particles()[0];
        assert!(p.x.abs() < 1e-9);
        assert_eq!(p.y, 100.0);
        assert_eq!(field.particles().len(), 1);
    }

    #[test]
    fn wraps_on_every_edge() {
        let mut field = ParticleField::from_particles(
            vec![
                still(0.1, 10.0, -0.2, 0.0),
                still(10.0, 0.1, 0.0, -0.2),
                still(10.0, 599.9, 0.0, 0.2),
            ],
            800.0,
            600.0,
        );
        field.step();
        let ps = field.particles();
        assert_eq!(ps[0].x, 800.0);
        assert_eq!(ps[1].y, 600.0);
        assert_eq!(ps[2].y, 0.0);
    }

    #[test]
    fn resize_keeps_positions() {
        let mut rng = Rng::with_seed(3);
        let mut field = ParticleField::new(&mut rng, 10, 800.0, 600.0);
        let before = field.particles().to_vec();
        field.resize(1200.0, 900.0);
        assert_eq!(field.particles(), &before[..]);
        assert_eq!(field.size(), (1200.0, 900.0));
    }
}
