use rgb_int::Rgba32;

/// Maps a sample index and the global phase to a warm yellow-amber color.
///
/// Brightness follows `base + amplitude * sin(t)` where
/// `t = index * position_freq + phase * phase_freq`, optionally held above a
/// floor, so the shimmer is correlated with both horizontal position and
/// time.
#[derive(Debug, Clone, Copy)]
pub struct Shader {
    pub position_freq: f32,
    pub phase_freq: f32,
    pub base: f32,
    pub amplitude: f32,
    /// Lower bound on the brightness oscillation, if any.
    pub floor: Option<f32>,
}

impl Shader {
    /// The unclamped 0.6 +/- 0.4 brightness oscillation.
    pub fn amber() -> Self {
        Self {
            position_freq: 0.02,
            phase_freq: 0.5,
            base: 0.6,
            amplitude: 0.4,
            floor: None,
        }
    }

    /// Wider oscillation whose brightness never drops below half intensity.
    pub fn amber_floored() -> Self {
        Self {
            position_freq: 0.02,
            phase_freq: 0.5,
            base: 0.5,
            amplitude: 0.55,
            floor: Some(0.5),
        }
    }

    pub fn shade(&self, index: usize, phase: f32) -> Rgba32 {
        let t = index as f32 * self.position_freq + phase * self.phase_freq;
        let mut brightness = self.base + self.amplitude * t.sin();
        if let Some(floor) = self.floor {
            brightness = brightness.max(floor);
        }
        let r = (255.0 * brightness).clamp(0.0, 255.0) as u8;
        let g = ((200.0 + 55.0 * (0.7 * t).cos()) * brightness).clamp(0.0, 255.0) as u8;
        Rgba32::new(r, g, 0, 255)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blue_is_zero_and_alpha_opaque_everywhere() {
        for shader in [Shader::amber(), Shader::amber_floored()] {
            for index in 0..320 {
                for step in 0..100 {
                    let color = shader.shade(index, step as f32 * 0.1);
                    assert_eq!(color.b, 0);
                    assert_eq!(color.a, 255);
                }
            }
        }
    }

    #[test]
    fn floored_shader_at_origin_is_half_bright() {
        // sin(0) contributes nothing, leaving brightness exactly at the
        // floor, so red is 255 * 0.5 truncated.
        let color = Shader::amber_floored().shade(0, 0.0);
        assert_eq!(color.r, 127);
    }

    #[test]
    fn amber_shader_at_origin() {
        // brightness 0.6, green term 200 + 55 = 255.
        let color = Shader::amber().shade(0, 0.0);
        assert_eq!(color.r, 153);
        assert_eq!(color.g, 153);
    }

    #[test]
    fn floor_holds_through_the_trough_of_the_oscillation() {
        let shader = Shader::amber_floored();
        // sin(t) = -1 at t = 3*pi/2; with phase_freq 0.5 that is phase 3*pi.
        let color = shader.shade(0, 3.0 * std::f32::consts::PI);
        assert_eq!(color.r, 127);
    }
}
