//! Fixed-length sequences of independent uniform draws.

use num_traits::FromPrimitive;
use rand::Rng;
use tracing::trace;

use crate::error::RangeError;
use crate::range::NumericRange;
use crate::sample::UniformValue;

/// Bounds and length for sequence generation.
///
/// The default spec is ten values drawn from the decimal digits `[0, 9]`.
///
/// # Examples
/// ```
/// use randseq::{NumericRange, SequenceSpec};
///
/// let spec = SequenceSpec::new(NumericRange::new(1i32, 6)?, 4);
/// let rolls = spec.generate();
/// assert_eq!(rolls.len(), 4);
/// # Ok::<(), randseq::RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceSpec<T> {
    range: NumericRange<T>,
    length: usize,
}

impl<T: UniformValue> SequenceSpec<T> {
    /// Pairs a validated range with a target length.
    pub fn new(range: NumericRange<T>, length: usize) -> Self {
        Self { range, length }
    }

    /// The bounds each element is drawn from.
    #[inline]
    pub fn range(&self) -> NumericRange<T> {
        self.range
    }

    /// Number of elements [`generate`](Self::generate) produces.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Draws `length` independent values through the calling thread's
    /// generator.
    ///
    /// Elements are plain independent draws: no uniqueness, no ordering. A
    /// zero length yields an empty vector.
    pub fn generate(&self) -> Vec<T> {
        self.generate_with(&mut rand::thread_rng())
    }

    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T> {
        trace!(length = self.length, "generating uniform sequence");
        let mut values = Vec::with_capacity(self.length);
        for _ in 0..self.length {
            values.push(T::draw_from(rng, self.range));
        }
        values
    }
}

impl<T: UniformValue + FromPrimitive> Default for SequenceSpec<T> {
    fn default() -> Self {
        // 0 and 9 are representable in every primitive numeric type, so
        // neither conversion can fail and the bounds cannot be inverted.
        let low = T::from_u8(0).expect("0 is representable in every numeric type");
        let high = T::from_u8(9).expect("9 is representable in every numeric type");
        let range = NumericRange::new(low, high).expect("0 <= 9");
        Self::new(range, 10)
    }
}

/// Draws `length` independent uniformly distributed values.
///
/// Integer types draw from `[low, high]`, floating-point types from
/// `[low, high)`. Capacity for all `length` elements is reserved before the
/// first draw.
///
/// # Errors
/// Returns [`RangeError::Inverted`] when `low > high`.
///
/// # Examples
/// ```
/// let digits = randseq::random_sequence(0u8, 9, 10)?;
/// assert_eq!(digits.len(), 10);
/// assert!(digits.iter().all(|d| *d <= 9));
/// # Ok::<(), randseq::RangeError>(())
/// ```
pub fn random_sequence<T: UniformValue>(
    low: T,
    high: T,
    length: usize,
) -> Result<Vec<T>, RangeError> {
    let range = NumericRange::new(low, high)?;
    Ok(SequenceSpec::new(range, length).generate())
}
