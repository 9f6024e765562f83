use crate::signal::RandomWalk;
use rand::Rng;

/// The per-frame model state: the scrolling sample buffer and the phase
/// counter feeding the color shader. The phase grows without bound; it only
/// ever feeds periodic functions, so it never needs to wrap.
pub struct Scope {
    samples: Vec<f32>,
    phase: f32,
    walk: RandomWalk,
    phase_step: f32,
}

impl Scope {
    pub fn new(num_samples: usize, walk: RandomWalk, phase_step: f32) -> Self {
        Self {
            samples: vec![0.0; num_samples],
            phase: 0.0,
            walk,
            phase_step,
        }
    }

    /// Advance one frame: bump the phase and rebuild the sample buffer.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        self.phase += self.phase_step;
        self.walk.advance(rng, &mut self.samples);
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn scope() -> Scope {
        Scope::new(
            320,
            RandomWalk {
                reseed_span: 0.25,
                step_span: 0.08,
            },
            0.1,
        )
    }

    #[test]
    fn sample_count_is_fixed_for_the_lifetime_of_the_scope() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut scope = scope();
        for _ in 0..1000 {
            scope.advance(&mut rng);
        }
        assert_eq!(scope.samples().len(), 320);
    }

    #[test]
    fn phase_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut scope = scope();
        let mut prev = scope.phase();
        for _ in 0..100 {
            scope.advance(&mut rng);
            assert!(scope.phase() > prev);
            prev = scope.phase();
        }
    }
}
