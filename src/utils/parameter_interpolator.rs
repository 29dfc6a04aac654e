//! Linear interpolation of control values across a render buffer.

/// Ramps a stored value toward a new target in equal steps.
///
/// The value read for sample `k` of an `n`-sample buffer is `start + k * (target - start) / n`.
/// Once all `n` steps are taken, the target itself is written back to the state on drop.
#[derive(Debug)]
pub struct ParameterInterpolator<'a> {
    state: &'a mut f32,
    start: f32,
    target: f32,
    increment: f32,
    step: usize,
    size: usize,
}

impl<'a> ParameterInterpolator<'a> {
    /// Starts a ramp from the current `state` to `new_value` over `size` samples.
    ///
    /// With `size == 0` no step is ever taken, the state is left untouched.
    pub fn new(state: &'a mut f32, new_value: f32, size: usize) -> Self {
        let start = *state;
        let increment = if size == 0 {
            0.0
        } else {
            (new_value - start) / (size as f32)
        };

        Self {
            state,
            start,
            target: new_value,
            increment,
            step: 0,
            size,
        }
    }

    /// Current value of the ramp.
    #[inline]
    pub fn value(&self) -> f32 {
        if self.size > 0 && self.step >= self.size {
            self.target
        } else {
            self.start + self.step as f32 * self.increment
        }
    }

    #[inline]
    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Returns the current value and advances by one step.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f32 {
        let v = self.value();
        self.step += 1;
        v
    }
}

impl Drop for ParameterInterpolator<'_> {
    fn drop(&mut self) {
        *self.state = self.value();
    }
}
