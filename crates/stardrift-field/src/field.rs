//! The particle ensemble.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Bounds, FieldParams, Particle, Sprite};

/// Owns every particle and the random source used to respawn them.
#[derive(Debug)]
pub struct ParticleField<R = StdRng> {
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<StdRng> {
    /// Field with a deterministic random source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Field seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ParticleField<R> {
    /// Empty field drawing randomness from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Grow by spawning fresh particles, or shrink by dropping the tail.
    pub fn set_particle_count(&mut self, count: usize, bounds: Bounds, params: &FieldParams) {
        let current = self.particles.len();
        if count == current {
            return;
        }
        if count > current {
            self.particles.reserve(count - current);
            for _ in current..count {
                let particle = Particle::spawn(&mut self.rng, bounds, params);
                self.particles.push(particle);
            }
        } else {
            self.particles.truncate(count);
        }
        log::debug!("particle count {current} -> {count}");
    }

    /// Advance every particle by one step.
    pub fn tick(&mut self, reference: Vec2, bounds: Bounds, elapsed_ms: u64, params: &FieldParams) {
        for particle in &mut self.particles {
            particle.update(&mut self.rng, reference, bounds, elapsed_ms, params);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Render data for every particle, in storage order.
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.particles.iter().map(Particle::sprite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FadeState, MAX_OPACITY};

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    fn filled(seed: u64, count: usize) -> ParticleField {
        let mut field = ParticleField::seeded(seed);
        field.set_particle_count(count, bounds(), &FieldParams::default());
        field
    }

    /// Any particle not sitting on the origin placeholder with real fade rates.
    fn is_respawned(p: &Particle) -> bool {
        p.fade_in_rate > 0.0
            && p.active_duration > 0.0
            && bounds().contains(p.position.x, p.position.y)
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = ParticleField::seeded(0);
        assert!(field.is_empty());
        assert_eq!(field.sprites().count(), 0);
    }

    #[test]
    fn test_shrink_truncates() {
        let mut field = filled(1, 200);
        let head: Vec<Particle> = field.particles()[..50].to_vec();
        field.set_particle_count(50, bounds(), &FieldParams::default());
        assert_eq!(field.len(), 50);
        assert_eq!(field.particles(), head.as_slice());
        assert!(field.particles().iter().all(is_respawned));
    }

    #[test]
    fn test_grow_preserves_existing() {
        let params = FieldParams::default();
        let mut field = filled(2, 50);
        for ms in 0..30 {
            field.tick(Vec2::new(400.0, 300.0), bounds(), ms * 16, &params);
        }
        let before: Vec<Particle> = field.particles().to_vec();
        field.set_particle_count(200, bounds(), &params);
        assert_eq!(field.len(), 200);
        assert_eq!(&field.particles()[..50], before.as_slice());
        for p in &field.particles()[50..] {
            assert_eq!(p.state(), FadeState::FadingIn);
            assert_eq!(p.opacity(), 0.0);
            assert!(is_respawned(p));
        }
    }

    #[test]
    fn test_invariants_hold_over_many_ticks() {
        let mut params = FieldParams::default();
        params.fade_duration = 1.0;
        params.tick_rate = 30.0;
        params.pulse_amplitude_scale = 2.0;
        let mut field = ParticleField::seeded(3);
        field.set_particle_count(100, bounds(), &params);

        let mut reference = Vec2::new(400.0, 300.0);
        for tick in 0..3_000u64 {
            // Sweep the reference point so both forces get exercised.
            reference.x = (tick as f32 * 3.7) % bounds().width;
            field.tick(reference, bounds(), tick * 33, &params);
            for p in field.particles() {
                assert!((0.0..=MAX_OPACITY).contains(&p.opacity()));
                assert!(p.size() >= 1.0);
                assert!(p.position().is_finite());
                assert!(bounds().contains(p.position().x, p.position().y));
                if p.state() == FadeState::FadingOut {
                    assert!(p.opacity() > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_lifecycle_order() {
        let mut params = FieldParams::default();
        params.fade_duration = 1.0;
        params.tick_rate = 30.0;
        let mut field = ParticleField::seeded(4);
        field.set_particle_count(20, bounds(), &params);

        let mut previous: Vec<FadeState> =
            field.particles().iter().map(Particle::state).collect();
        let mut respawns = 0;
        for tick in 0..2_000u64 {
            field.tick(Vec2::new(400.0, 300.0), bounds(), tick * 33, &params);
            for (p, prev) in field.particles().iter().zip(previous.iter_mut()) {
                let next = p.state();
                match (*prev, next) {
                    (a, b) if a == b => {}
                    (FadeState::FadingIn, FadeState::Active) => {
                        assert_eq!(p.opacity(), MAX_OPACITY)
                    }
                    (FadeState::Active, FadeState::FadingOut) => {}
                    (FadeState::FadingOut, FadeState::FadingIn) => {
                        assert_eq!(p.opacity(), 0.0);
                        respawns += 1;
                    }
                    (a, b) => panic!("illegal transition {a:?} -> {b:?}"),
                }
                *prev = next;
            }
        }
        assert!(respawns > 0);
    }

    #[test]
    fn test_seeded_fields_are_deterministic() {
        let params = FieldParams::default();
        let mut a = filled(42, 10);
        let mut b = filled(42, 10);
        for tick in 0..100u64 {
            a.tick(Vec2::new(10.0, 10.0), bounds(), tick * 16, &params);
            b.tick(Vec2::new(10.0, 10.0), bounds(), tick * 16, &params);
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_sprites_follow_particles() {
        let field = filled(5, 25);
        let sprites: Vec<Sprite> = field.sprites().collect();
        assert_eq!(sprites.len(), 25);
        for (sprite, p) in sprites.iter().zip(field.particles()) {
            assert_eq!(sprite.x, p.position().x);
            assert_eq!(sprite.opacity, p.opacity());
        }
    }
}
