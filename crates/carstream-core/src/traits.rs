//! Core traits for single-pass reductions
//!
//! An [`Accumulator`] is the supplier/accumulate/combine/finish shape of a
//! reduction. `Default` is the supplier, so any accumulator can drive a plain
//! sequential fold as well as a chunked one where independently built partial
//! states are merged afterwards.

/// A mergeable single-pass reduction over `Self::Input`
///
/// `merge` must be associative and commutative, and merging with a freshly
/// supplied (`Default`) state must leave the result unchanged. Those laws are
/// what make chunked evaluation agree with a sequential fold.
pub trait Accumulator: Default {
    /// Element type consumed by the reduction
    type Input;

    /// Immutable result produced when the reduction finishes
    type Output;

    /// Fold one element into the state
    fn accumulate(&mut self, item: &Self::Input);

    /// Absorb another partial state built over a disjoint set of elements
    fn merge(&mut self, other: Self);

    /// Produce the finished result without consuming the state
    fn finish(&self) -> Self::Output;

    /// Sequential fold over `items`
    fn collect<'a, I>(items: I) -> Self::Output
    where
        I: IntoIterator<Item = &'a Self::Input>,
        Self::Input: 'a,
    {
        let mut state = Self::default();
        for item in items {
            state.accumulate(item);
        }
        state.finish()
    }

    /// Merge already-built partial states into one
    fn reduce_partials<I>(partials: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        partials.into_iter().fold(Self::default(), |mut acc, part| {
            acc.merge(part);
            acc
        })
    }
}
