/// Source of uniform random integers for schedule decisions.
///
/// Owned by the caller and passed into the schedule builder so runs can be
/// replayed from a seed and tests can script the draws.
pub trait RandomSource {
    /// Uniform integer in `[0, upper)`. `upper` must be non-zero.
    fn below(&mut self, upper: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, upper: u32) -> u32 {
        (**self).below(upper)
    }
}
