/// How a continuous coordinate is snapped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapPolicy {
    /// Truncate `value / grid` toward zero.
    Floor,
    /// Round `value / grid` to the nearest grid line.
    Round,
}

/// A coarse pixel grid that coordinates are snapped to for a blocky retro
/// look. The grid size must be positive; it may be fractional.
#[derive(Debug, Clone, Copy)]
pub struct Snap {
    pub grid: f32,
    pub policy: SnapPolicy,
}

impl Snap {
    pub fn apply(&self, value: f32) -> f32 {
        match self.policy {
            SnapPolicy::Floor => (value / self.grid).trunc() * self.grid,
            SnapPolicy::Round => (value / self.grid).round() * self.grid,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const VALUES: &[f32] = &[-123.4, -5.0, -0.3, 0.0, 0.4, 3.9, 57.5, 639.9];

    fn snaps() -> impl Iterator<Item = Snap> {
        [1.0, 2.5, 4.0].into_iter().flat_map(|grid| {
            [SnapPolicy::Floor, SnapPolicy::Round]
                .into_iter()
                .map(move |policy| Snap { grid, policy })
        })
    }

    #[test]
    fn snapping_is_idempotent() {
        for snap in snaps() {
            for &value in VALUES {
                let snapped = snap.apply(value);
                assert_eq!(snap.apply(snapped), snapped);
            }
        }
    }

    #[test]
    fn snapped_values_sit_on_the_grid() {
        for snap in snaps() {
            for &value in VALUES {
                let cells = snap.apply(value) / snap.grid;
                assert!((cells - cells.round()).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn floor_truncates_toward_zero() {
        let snap = Snap {
            grid: 4.0,
            policy: SnapPolicy::Floor,
        };
        assert_eq!(snap.apply(7.9), 4.0);
        assert_eq!(snap.apply(-7.9), -4.0);
    }

    #[test]
    fn round_snaps_to_nearest_line() {
        let snap = Snap {
            grid: 2.5,
            policy: SnapPolicy::Round,
        };
        assert_eq!(snap.apply(3.7), 2.5);
        assert_eq!(snap.apply(3.8), 5.0);
    }
}
