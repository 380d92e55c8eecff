//! Time-bounded confetti celebration effect.
//!
//! Purely presentational: the effect owns its particle arena and never reads
//! or writes puzzle state. The driving loop calls `tick` on each redraw; once
//! the deadline passes (or `stop` is called) the arena empties and the effect
//! reports itself finished. A degenerate drawing surface degrades silently
//! rather than aborting gameplay.

use rand::Rng;
use std::time::Duration;

/// Number of particles in the arena.
pub const PARTICLE_COUNT: usize = 100;

/// Constant downward drift added to every particle's cosine oscillation.
const BASE_FALL_RATE: f32 = 3.0;

/// Amplitude of the sine-based horizontal tilt.
const TILT_AMPLITUDE: f32 = 15.0;

/// Vertical respawn offset above the top edge.
const RESPAWN_HEIGHT: f32 = -10.0;

/// Fixed confetti palette as RGB triples.
pub const PALETTE: [(u8, u8, u8); 6] = [
    (0xf9, 0xdf, 0x6d),
    (0xa0, 0xc3, 0x5a),
    (0xb0, 0xc4, 0xef),
    (0xba, 0x81, 0xc5),
    (0xff, 0x6b, 0x9d),
    (0xff, 0xff, 0xff),
];

/// A single confetti particle.
///
/// Particles live in a fixed-capacity arena and are updated in place;
/// respawning resets fields on the existing record rather than allocating a
/// replacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in surface coordinates.
    pub x: f32,
    /// Vertical position in surface coordinates.
    pub y: f32,
    /// Radius; larger particles fall faster.
    pub radius: f32,
    /// Per-particle oscillation phase for the fall rate.
    pub phase: f32,
    /// Current horizontal tilt offset.
    pub tilt: f32,
    /// Index into [`PALETTE`].
    pub color: usize,
    tilt_angle: f32,
    tilt_angle_step: f32,
}

/// A running, time-bounded celebration effect over a drawing surface.
#[derive(Debug, Clone)]
pub struct ConfettiEffect {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    deadline: Duration,
    stopped: bool,
}

impl ConfettiEffect {
    /// Starts an effect sized to the drawing surface, running until
    /// `now + duration`.
    pub fn play<R: Rng>(
        rng: &mut R,
        now: Duration,
        duration: Duration,
        width: f32,
        height: f32,
    ) -> Self {
        // A zero-sized surface still produces a well-formed (invisible) effect.
        let width = width.max(1.0);
        let height = height.max(1.0);

        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(-height..0.0),
                radius: rng.gen_range(2.0..8.0),
                phase: rng.gen_range(0.0..PARTICLE_COUNT as f32),
                tilt: rng.gen_range(-10.0..0.0),
                color: rng.gen_range(0..PALETTE.len()),
                tilt_angle: 0.0,
                tilt_angle_step: rng.gen_range(0.05..0.12),
            })
            .collect();

        Self {
            particles,
            width,
            height,
            deadline: now + duration,
            stopped: false,
        }
    }

    /// Advances the simulation one frame.
    ///
    /// Each particle falls by a cosine-oscillated rate plus constant drift and
    /// tilts on a sine wave; particles past the bottom edge respawn just above
    /// the top at a random horizontal position. Returns `false` once the
    /// deadline has passed, clearing the arena.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, now: Duration) -> bool {
        if self.stopped {
            return false;
        }
        if now >= self.deadline {
            self.stop();
            return false;
        }

        for index in 0..self.particles.len() {
            let particle = &mut self.particles[index];
            particle.tilt_angle += particle.tilt_angle_step;
            particle.y += (particle.phase.cos() + BASE_FALL_RATE + particle.radius / 2.0) / 2.0;
            particle.tilt = (particle.tilt_angle - index as f32 / 3.0).sin() * TILT_AMPLITUDE;

            if particle.y > self.height {
                particle.x = rng.gen_range(0.0..self.width);
                particle.y = RESPAWN_HEIGHT;
            }
        }

        true
    }

    /// Halts the effect immediately and clears the arena.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.particles.clear();
    }

    /// Whether the effect has run its course (or was stopped).
    pub fn is_finished(&self) -> bool {
        self.stopped
    }

    /// Live particles for the renderer.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Resizes the drawing surface, e.g. on a terminal resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_arena_holds_fixed_population_while_running() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut effect = ConfettiEffect::play(&mut rng, ms(0), ms(3000), 80.0, 24.0);

        assert_eq!(effect.particles().len(), PARTICLE_COUNT);
        assert!(effect.tick(&mut rng, ms(16)));
        assert_eq!(effect.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_particles_fall_downward_on_average() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut effect = ConfettiEffect::play(&mut rng, ms(0), ms(3000), 80.0, 1000.0);

        let before: f32 = effect.particles().iter().map(|p| p.y).sum();
        effect.tick(&mut rng, ms(16));
        let after: f32 = effect.particles().iter().map(|p| p.y).sum();

        assert!(after > before);
    }

    #[test]
    fn test_particles_never_escape_past_the_bottom_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut effect = ConfettiEffect::play(&mut rng, ms(0), ms(60_000), 80.0, 4.0);

        // A short surface forces every particle past the bottom quickly;
        // each must respawn above the top instead of drifting away.
        for frame in 1..200 {
            effect.tick(&mut rng, ms(frame));
            for particle in effect.particles() {
                assert!(particle.y <= 4.0, "particle escaped: y = {}", particle.y);
                assert!(particle.y >= RESPAWN_HEIGHT);
            }
        }
    }

    #[test]
    fn test_effect_finishes_at_its_deadline() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut effect = ConfettiEffect::play(&mut rng, ms(0), ms(3000), 80.0, 24.0);

        assert!(effect.tick(&mut rng, ms(2999)));
        assert!(!effect.tick(&mut rng, ms(3000)));
        assert!(effect.is_finished());
        assert!(effect.particles().is_empty());
    }

    #[test]
    fn test_stop_clears_immediately() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut effect = ConfettiEffect::play(&mut rng, ms(0), ms(3000), 80.0, 24.0);

        effect.stop();
        assert!(effect.is_finished());
        assert!(effect.particles().is_empty());
        assert!(!effect.tick(&mut rng, ms(1)));
    }

    #[test]
    fn test_zero_sized_surface_degrades_silently() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut effect = ConfettiEffect::play(&mut rng, ms(0), ms(3000), 0.0, 0.0);

        assert_eq!(effect.particles().len(), PARTICLE_COUNT);
        assert!(effect.tick(&mut rng, ms(16)));
    }
}
