use rand::Rng;

/// Per-frame random walk over a sample buffer.
///
/// Each call reseeds the first sample and then accumulates an independent
/// uniform step per remaining sample, so within a single frame the buffer is
/// a cumulative-sum perturbation of its seed sample. Nothing carries over
/// from the previous frame, which is what makes the trace scroll into a new
/// shape every tick instead of evolving smoothly.
#[derive(Debug, Clone, Copy)]
pub struct RandomWalk {
    /// Span of the uniform distribution, centred on zero, that the first
    /// sample is drawn from.
    pub reseed_span: f32,
    /// Span of the uniform distribution, centred on zero, added to each
    /// subsequent sample.
    pub step_span: f32,
}

impl RandomWalk {
    /// Overwrite `samples` in place with the next frame's values. The
    /// buffer length never changes; a single-element buffer degenerates to
    /// reseeding that element.
    pub fn advance<R: Rng>(&self, rng: &mut R, samples: &mut [f32]) {
        if let Some((first, rest)) = samples.split_first_mut() {
            *first = (rng.random::<f32>() - 0.5) * self.reseed_span;
            let mut prev = *first;
            for sample in rest {
                *sample = prev + (rng.random::<f32>() - 0.5) * self.step_span;
                prev = *sample;
            }
        }
    }
}
