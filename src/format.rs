//! Delimited rendering of sequences.
//!
//! [`write_sequence`] is generic over the output writer so rendered bytes can
//! be asserted on exactly; [`print_sequence`] is the stdout convenience on
//! top of it. Neither touches generator state.

use std::fmt;
use std::io::{self, Write};

/// Delimiter, prefix, and suffix applied around a rendered sequence.
///
/// # Examples
/// ```
/// use randseq::SequenceFormat;
///
/// let format = SequenceFormat::default();
/// assert_eq!(format.delimiter, ", ");
/// assert_eq!(format.prefix, "[");
/// assert_eq!(format.suffix, "]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceFormat {
    /// Written between adjacent elements, never after the last one.
    pub delimiter: String,
    /// Written before the first element.
    pub prefix: String,
    /// Written after the last element, before the trailing newline.
    pub suffix: String,
}

impl SequenceFormat {
    /// Builds a format from its three parts.
    pub fn new(
        delimiter: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            delimiter: delimiter.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl Default for SequenceFormat {
    /// The bracketed comma form: `[a, b, c]`.
    fn default() -> Self {
        Self::new(", ", "[", "]")
    }
}

/// Writes `values` to `out` as prefix, delimiter-joined elements, suffix,
/// and a trailing newline.
///
/// An empty slice writes just the prefix, suffix, and newline. The sequence
/// itself is not modified.
///
/// # Errors
/// Propagates any error reported by `out`.
///
/// # Examples
/// ```
/// use randseq::{write_sequence, SequenceFormat};
///
/// let mut rendered: Vec<u8> = Vec::new();
/// write_sequence(&mut rendered, &[3, 1, 4], &SequenceFormat::default())?;
/// assert_eq!(rendered, b"[3, 1, 4]\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_sequence<T, W>(out: &mut W, values: &[T], format: &SequenceFormat) -> io::Result<()>
where
    T: fmt::Display,
    W: Write,
{
    write!(out, "{}", format.prefix)?;
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            write!(out, "{}", format.delimiter)?;
        }
        write!(out, "{}", value)?;
    }
    writeln!(out, "{}", format.suffix)
}

/// Renders `values` to standard output.
///
/// Stdout is locked for the duration of the write so concurrent printers
/// cannot interleave inside one sequence.
///
/// # Errors
/// Propagates any error reported by stdout.
pub fn print_sequence<T: fmt::Display>(values: &[T], format: &SequenceFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_sequence(&mut handle, values, format)
}
