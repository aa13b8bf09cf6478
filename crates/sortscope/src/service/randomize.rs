//! Randomizers for refilling a sequence.
//!
//! ## Purpose
//!
//! This module provides [`ItemRandomizer`], which overwrites every element
//! of a slice with a fresh random value, along with implementations for
//! numbers drawn from a uniform range and for words drawn from a fixed list.
//!
//! ## Design notes
//!
//! * **Generator injected**: each randomizer owns its `rand::Rng`, so tests
//!   pass a seeded `StdRng` and get reproducible sequences.
//! * **Per-element hook**: implementors write `randomize_item`; the default
//!   `randomize` walks the slice in order.

// External dependencies
use num_traits::Float;
use rand::Rng;
use rand::distr::uniform::SampleUniform;

/// Words drawn by [`WordRandomizer`].
pub const WORDS: [&str; 31] = [
    "big", "alpha", "beta", "dinosaur", "elephant", "fox", "giraffe", "horse", "dog", "cat",
    "house", "car", "plane", "train", "boat", "ship", "truck", "ticket", "Earth", "Mars",
    "Saturn", "Jupiter", "Uranus", "Neptune", "bitcoin", "ethereum", "youtube", "facebook",
    "instagram", "twitter", "tiktok",
];

/// Overwrites elements with random values.
pub trait ItemRandomizer<T> {
    /// Replace the element at position `index`.
    fn randomize_item(&mut self, item: &mut T, index: usize);

    /// Replace every element of `items`.
    fn randomize(&mut self, items: &mut [T]) {
        for (index, item) in items.iter_mut().enumerate() {
            self.randomize_item(item, index);
        }
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Draws numbers uniformly from `[low, high)`.
///
/// A degenerate range (`low >= high`) fills every element with `low`.
#[derive(Debug, Clone)]
pub struct UniformRandomizer<N, R> {
    rng: R,
    low: N,
    high: N,
}

impl<N, R> UniformRandomizer<N, R>
where
    N: SampleUniform + PartialOrd + Copy,
    R: Rng,
{
    /// Randomizer over `[low, high)`.
    pub fn new(rng: R, low: N, high: N) -> Self {
        Self { rng, low, high }
    }

    /// Draw one value.
    pub fn sample(&mut self) -> N {
        if self.low < self.high {
            self.rng.random_range(self.low..self.high)
        } else {
            self.low
        }
    }
}

impl<R: Rng> UniformRandomizer<i32, R> {
    /// Non-negative `i32` values.
    pub fn non_negative(rng: R) -> Self {
        Self::new(rng, 0, i32::MAX)
    }
}

impl<N, R> UniformRandomizer<N, R>
where
    N: Float + SampleUniform,
    R: Rng,
{
    /// Floats in `[0, 1)`.
    pub fn unit(rng: R) -> Self {
        Self::new(rng, N::zero(), N::one())
    }
}

impl<N, R> ItemRandomizer<N> for UniformRandomizer<N, R>
where
    N: SampleUniform + PartialOrd + Copy,
    R: Rng,
{
    fn randomize_item(&mut self, item: &mut N, _index: usize) {
        *item = self.sample();
    }
}

// ============================================================================
// Words
// ============================================================================

/// Draws words from [`WORDS`].
#[derive(Debug, Clone)]
pub struct WordRandomizer<R> {
    rng: R,
}

impl<R: Rng> WordRandomizer<R> {
    /// Randomizer backed by `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one word.
    pub fn sample(&mut self) -> &'static str {
        WORDS[self.rng.random_range(0..WORDS.len())]
    }
}

impl<R: Rng> ItemRandomizer<String> for WordRandomizer<R> {
    fn randomize_item(&mut self, item: &mut String, _index: usize) {
        let word = self.sample();
        item.clear();
        item.push_str(word);
    }
}

impl<R: Rng> ItemRandomizer<&'static str> for WordRandomizer<R> {
    fn randomize_item(&mut self, item: &mut &'static str, _index: usize) {
        *item = self.sample();
    }
}
