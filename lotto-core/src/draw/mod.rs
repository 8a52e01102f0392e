//! Draw generation for the hidden winning combination.
//!
//! Regular numbers are sampled with rejection of duplicates, so every
//! combination of `count` distinct values is equally likely. The strong
//! number is drawn independently.

pub mod source;

pub use source::{RngSource, ScriptedSource};

use crate::error::{LottoError, Result};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value in `min..=max`. Callers guarantee `min <= max`.
    fn next_in_range(&mut self, min: u32, max: u32) -> u32;
}

/// Draw `count` pairwise-distinct numbers from `min..=max`, in draw order.
pub fn draw<S: RandomSource + ?Sized>(
    source: &mut S,
    count: usize,
    min: u32,
    max: u32,
) -> Result<Vec<u32>> {
    if min > max || count > (max - min) as usize + 1 {
        return Err(LottoError::DrawRange { count, min, max });
    }

    let mut numbers = Vec::with_capacity(count);
    while numbers.len() < count {
        let n = source.next_in_range(min, max);
        if !numbers.contains(&n) {
            numbers.push(n);
        }
    }

    Ok(numbers)
}

/// Draw a single number from `min..=max`.
pub fn draw_strong<S: RandomSource + ?Sized>(source: &mut S, min: u32, max: u32) -> Result<u32> {
    if min > max {
        return Err(LottoError::DrawRange { count: 1, min, max });
    }
    Ok(source.next_in_range(min, max))
}
