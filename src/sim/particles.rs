//! Flap trail particles
//!
//! Purely cosmetic, but advanced on the same tick factor as everything else
//! so trails look identical at any frame rate.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Maximum live particles
pub const MAX_PARTICLES: usize = 256;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    /// Own motion in px/tick, on top of the world scroll
    pub vel: Vec2,
    pub life: f32, // 1.0 at spawn, removed at <= 0
    pub size: f32,
}

/// Live particles, oldest first
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    next_id: u32,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a puff at `origin`, drifting down and trailing behind it
    pub fn spawn_burst(&mut self, origin: Vec2, tuning: &Tuning, rng: &mut impl Rng) {
        for _ in 0..tuning.burst_count {
            let vx = (rng.random::<f32>() - 0.8) * 2.0; // mostly backwards
            let vy = rng.random::<f32>() * 2.0 + 1.0;
            let size = rng.random::<f32>() * 6.0 + 4.0;

            self.next_id = self.next_id.wrapping_add(1);
            self.particles.push(Particle {
                id: self.next_id,
                pos: origin,
                vel: Vec2::new(vx, vy),
                life: 1.0,
                size,
            });
        }

        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(..excess);
        }
    }

    /// Fade and move every particle, then drop the dead ones.
    ///
    /// Particles are carried backwards with the world scroll so they read
    /// as a trail left in the air rather than marks fixed to the screen.
    pub fn advance(&mut self, tuning: &Tuning, dt: f32) {
        let scroll = Vec2::new(-tuning.scroll_speed, 0.0);
        for particle in &mut self.particles {
            particle.life -= tuning.particle_decay * dt;
            particle.pos += (scroll + particle.vel) * dt;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_shape() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut system = ParticleSystem::new();
        system.spawn_burst(Vec2::new(52.0, 300.0), &tuning, &mut rng);

        assert_eq!(system.len(), 4);
        for p in system.iter() {
            assert_eq!(p.life, 1.0);
            assert!(p.vel.x >= -1.6 && p.vel.x < 0.4);
            assert!(p.vel.y >= 1.0 && p.vel.y < 3.0);
            assert!(p.size >= 4.0 && p.size < 10.0);
        }

        // Ids are unique
        let mut ids: Vec<u32> = system.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_particles_drift_with_world_and_expire() {
        let tuning = Tuning::default();
        let mut system = ParticleSystem::new();
        system.particles.push(Particle {
            id: 1,
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(0.0, 1.0),
            life: 1.0,
            size: 5.0,
        });

        system.advance(&tuning, 1.0);
        let p = system.iter().next().unwrap();
        assert!((p.pos.x - (100.0 - tuning.scroll_speed)).abs() < 1e-4);
        assert!((p.pos.y - 101.0).abs() < 1e-4);
        assert!((p.life - 0.96).abs() < 1e-6);

        // 1.0 / 0.04 = 25 ticks of life in total
        for _ in 0..25 {
            system.advance(&tuning, 1.0);
        }
        assert!(system.is_empty());
    }

    #[test]
    fn test_removal_keeps_survivor_order() {
        let tuning = Tuning::default();
        let mut system = ParticleSystem::new();
        for (id, life) in [(1, 1.0), (2, 0.01), (3, 1.0), (4, 0.02), (5, 1.0)] {
            system.particles.push(Particle {
                id,
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                life,
                size: 4.0,
            });
        }
        system.advance(&tuning, 1.0);
        let ids: Vec<u32> = system.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_capacity_cap() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut system = ParticleSystem::new();
        for _ in 0..100 {
            system.spawn_burst(Vec2::ZERO, &tuning, &mut rng);
        }
        assert_eq!(system.len(), MAX_PARTICLES);
    }
}
