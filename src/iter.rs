//! Lazy enumeration of consecutive labels.
//!
//! The iterator behaves like an odometer: the rightmost column cycles
//! through the alphabet, a wraparound carries into the column to its left,
//! and when every column wraps the label grows by one column which
//! receives the carry ("Z" is followed by "BA", "ZZ" by "BAA").

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::alphabet::Alphabet;
use crate::codec;
use crate::error::LabelError;

/// Iterates over labels in increasing order: A, B, …, Z, BA, BB, …
///
/// The first call to `next` yields the start label itself, regardless of
/// the configured stride. An optional end label bounds the sequence
/// exclusively: it is never yielded, and matching is exact string
/// equality, so the end must be spelled the way the iterator spells its
/// labels (same alphabet, same case, same width).
///
/// ```
/// use letterseq::{Alphabet, LetterIterator};
///
/// let labels: Vec<String> = LetterIterator::new("Y", Alphabet::latin_upper())
///     .unwrap()
///     .take(4)
///     .collect();
/// assert_eq!(labels, ["Y", "Z", "BA", "BB"]);
/// ```
#[derive(Debug, Clone)]
pub struct LetterIterator {
    alphabet: Alphabet,
    // Cursor and bound are digit values, most significant first. Membership
    // was proven at construction, so stepping can never fail.
    digits: Vec<usize>,
    end: Option<Vec<usize>>,
    stride: usize,
    started: bool,
    done: bool,
}

impl LetterIterator {
    /// Starts a sequence at `start`, validating it against `alphabet`.
    pub fn new(start: &str, alphabet: Alphabet) -> Result<Self, LabelError> {
        let digits = alphabet.digits_of(start)?;
        Ok(Self {
            alphabet,
            digits,
            end: None,
            stride: 1,
            started: false,
            done: false,
        })
    }

    /// Bounds the sequence: iteration stops before yielding `end`.
    pub fn with_end(mut self, end: &str) -> Result<Self, LabelError> {
        self.end = Some(self.alphabet.digits_of(end)?);
        Ok(self)
    }

    /// Advances `stride` single steps per iteration instead of one.
    pub fn with_stride(mut self, stride: usize) -> Result<Self, LabelError> {
        if stride == 0 {
            return Err(LabelError::ZeroStride);
        }
        self.stride = stride;
        Ok(self)
    }

    /// The label the cursor currently points at.
    #[must_use]
    pub fn current(&self) -> String {
        self.alphabet.render(&self.digits)
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Orders this cursor against another by label value.
    ///
    /// Both iterators must have been built over the same alphabet;
    /// anything else is reported as `AlphabetMismatch` rather than
    /// answered wrongly.
    pub fn cmp_position(&self, other: &LetterIterator) -> Result<Ordering, LabelError> {
        if self.alphabet != other.alphabet {
            return Err(self.alphabet.mismatch(&other.alphabet));
        }
        Ok(codec::compare_digits(&self.digits, &other.digits))
    }

    fn at_end(&self) -> bool {
        self.end.as_deref() == Some(self.digits.as_slice())
    }

    /// One column-step: cycle the last column, carry leftward on
    /// wraparound, grow by exactly one column when every column wrapped.
    fn step(&mut self) {
        let radix = self.alphabet.radix();
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < radix {
                return;
            }
            *digit = 0;
        }
        // The new leading column receives the carry. With a one-symbol
        // alphabet there is nothing to carry into, so it stays at zero.
        self.digits.insert(0, 1.min(radix - 1));
    }
}

impl Iterator for LetterIterator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if self.at_end() {
            self.done = true;
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        for _ in 0..self.stride {
            self.step();
            // Checked after every single step so a stride can neither
            // yield the bound nor jump over it.
            if self.at_end() {
                self.done = true;
                return None;
            }
        }
        Some(self.current())
    }
}

impl FusedIterator for LetterIterator {}
