//! Scalar uniform draws over validated ranges.
//!
//! The entry point is [`random_number`], which draws from the calling
//! thread's generator. The generator is created from OS entropy the first
//! time a thread draws and is reused for the thread's lifetime; it is never
//! reseeded between calls and never shared with another thread, so no
//! locking is involved anywhere on the draw path.
//!
//! Integral and floating-point behaviour differ deliberately: integers
//! sample the closed interval `[low, high]`, floats the half-open
//! `[low, high)`. The split lives in the per-type [`UniformValue`] impls,
//! which fixes it at compile time.

mod uniform;

pub use uniform::{random_number, UniformValue};

#[cfg(test)]
mod tests;
