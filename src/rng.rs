use rand::{Rng, RngCore};

/// Capability contract for the simulation's random stream.
///
/// One shared sequential stream, seeded once at startup and injected into
/// whatever consumes it. The consumption order is part of the observable
/// contract: a fixed seed must reproduce a run exactly.
pub trait UniformSource {
    /// Uniform random integer in `[0, max_inclusive]`.
    fn next_int(&mut self, max_inclusive: u64) -> u64;
}

/// Adapter exposing any `rand` generator as a [`UniformSource`].
pub struct RngSource<R: RngCore>(pub R);

impl<R: RngCore> UniformSource for RngSource<R> {
    fn next_int(&mut self, max_inclusive: u64) -> u64 {
        self.0.random_range(0..=max_inclusive)
    }
}
