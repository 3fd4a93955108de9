//! # randseq: Uniform Random Sequence Generation
//!
//! Small building blocks for drawing uniformly distributed random values,
//! assembling them into fixed-length sequences, and rendering those sequences
//! as delimited text.
//!
//! ## Modules
//!
//! - [`sample`]: scalar draws over a validated range ([`random_number`])
//! - [`sequence`]: fixed-length sequences of independent draws ([`random_sequence`])
//! - [`format`]: delimited rendering of a sequence ([`print_sequence`])
//! - [`range`]: the validated bounds pair shared by both generators
//! - [`error`]: structured errors for range validation
//!
//! ## Generator State
//!
//! All draws go through the calling thread's generator, initialised from OS
//! entropy on the thread's first draw and reused for every draw afterwards.
//! No generator instance is ever shared between threads, so draws require no
//! synchronisation, and successive draws on one thread are statistically
//! independent rather than restarting from a fresh seed each call.
//!
//! ## Integral vs. Floating-Point Draws
//!
//! Integer types sample the closed interval `[low, high]`; floating-point
//! types sample the half-open interval `[low, high)`. The selection is made
//! per type through the [`UniformValue`] impls, so no runtime branch on the
//! type's category exists and neither behaviour is compiled into the other's
//! code path.
//!
//! ## Usage
//!
//! ```rust
//! use randseq::{random_sequence, print_sequence, SequenceFormat};
//!
//! // Ten independent draws from [1, 6].
//! let rolls = random_sequence(1i32, 6, 10)?;
//! assert_eq!(rolls.len(), 10);
//!
//! // Prints e.g. "[4, 1, 6, 3, 2, 5, 5, 1, 3, 6]" followed by a newline.
//! print_sequence(&rolls, &SequenceFormat::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialisation for [`NumericRange`], [`SequenceSpec`],
//!   and [`SequenceFormat`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod format;
pub mod range;
pub mod sample;
pub mod sequence;

pub use error::{RangeError, Result};
pub use format::{print_sequence, write_sequence, SequenceFormat};
pub use range::NumericRange;
pub use sample::{random_number, UniformValue};
pub use sequence::{random_sequence, SequenceSpec};
