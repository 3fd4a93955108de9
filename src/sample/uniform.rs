//! The `UniformValue` trait and its impls for the primitive numeric types.

use std::fmt;

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::error::RangeError;
use crate::range::NumericRange;

/// A primitive numeric type that supports uniform draws from a
/// [`NumericRange`].
///
/// Each impl fixes the interval convention for its type:
///
/// - integer impls draw from the closed interval `[low, high]`, with both
///   endpoints reachable and every value equally likely;
/// - floating-point impls draw from the half-open interval `[low, high)`,
///   collapsing a degenerate range (`low == high`) to the single point `low`.
///
/// Because the convention is chosen by impl resolution, the choice costs
/// nothing at runtime and the integer draw path is never instantiated for a
/// float type (or vice versa).
pub trait UniformValue: Sized + Copy + PartialOrd + fmt::Display + SampleUniform {
    /// Draws one value from `range` using the supplied generator.
    fn draw_from<R: Rng + ?Sized>(rng: &mut R, range: NumericRange<Self>) -> Self;
}

macro_rules! impl_uniform_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl UniformValue for $t {
                #[inline]
                fn draw_from<R: Rng + ?Sized>(rng: &mut R, range: NumericRange<Self>) -> Self {
                    rng.gen_range(range.low()..=range.high())
                }
            }
        )*
    };
}

macro_rules! impl_uniform_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl UniformValue for $t {
                #[inline]
                fn draw_from<R: Rng + ?Sized>(rng: &mut R, range: NumericRange<Self>) -> Self {
                    let (low, high) = (range.low(), range.high());
                    // gen_range rejects an empty float interval
                    if low == high {
                        return low;
                    }
                    rng.gen_range(low..high)
                }
            }
        )*
    };
}

impl_uniform_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_uniform_float!(f32, f64);

/// Draws a single uniformly distributed value.
///
/// Integer types draw from `[low, high]`, floating-point types from
/// `[low, high)`. The draw advances the calling thread's generator and has
/// no other observable effect.
///
/// # Errors
/// Returns [`RangeError::Inverted`] when `low > high`.
///
/// # Examples
/// ```
/// let roll: i32 = randseq::random_number(1, 6)?;
/// assert!((1..=6).contains(&roll));
///
/// let weight: f64 = randseq::random_number(0.0, 1.0)?;
/// assert!(weight >= 0.0 && weight < 1.0);
/// # Ok::<(), randseq::RangeError>(())
/// ```
pub fn random_number<T: UniformValue>(low: T, high: T) -> Result<T, RangeError> {
    let range = NumericRange::new(low, high)?;
    Ok(T::draw_from(&mut rand::thread_rng(), range))
}
