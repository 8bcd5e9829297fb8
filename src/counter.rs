//! A label held in canonical form, with arithmetic derived from integer
//! round-trips.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::codec;
use crate::error::LabelError;

/// A non-negative value spelled as a label over an [`Alphabet`].
///
/// The stored label is always canonical: validated against the alphabet
/// and stripped of leading zero-symbols at construction, so "AAB" and "B"
/// build the same counter and structural equality coincides with value
/// equality. Arithmetic is not symbolic; every operation converts to an
/// integer, applies checked native arithmetic, and converts back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCounter", into = "RawCounter"))]
pub struct LetterCounter {
    label: String,
    alphabet: Alphabet,
}

impl LetterCounter {
    /// Builds a counter from `label`, storing the normalized form.
    pub fn new(label: &str, alphabet: Alphabet) -> Result<Self, LabelError> {
        alphabet.digits_of(label)?;
        Ok(Self {
            label: codec::normalize(label, &alphabet),
            alphabet,
        })
    }

    /// Parses a label over the default A–Z alphabet, uppercasing first,
    /// so "aab" and "AAB" both come out as the counter "B".
    pub fn parse(label: &str) -> Result<Self, LabelError> {
        let upper: String = label.chars().map(|c| c.to_ascii_uppercase()).collect();
        Self::new(&upper, Alphabet::latin_upper())
    }

    /// Encodes `value` at the minimal width.
    ///
    /// Only a one-symbol alphabet can fail here: it spells nothing but
    /// zero.
    pub fn from_value(value: u64, alphabet: Alphabet) -> Result<Self, LabelError> {
        let radix = alphabet.radix() as u64;
        if radix == 1 {
            return if value == 0 {
                Ok(Self {
                    label: alphabet.zero().to_string(),
                    alphabet,
                })
            } else {
                Err(LabelError::OutOfRange { value, max: 0 })
            };
        }
        let mut digits: Vec<usize> = Vec::new();
        let mut rest = value;
        loop {
            digits.push((rest % radix) as usize);
            rest /= radix;
            if rest == 0 {
                break;
            }
        }
        digits.reverse();
        Ok(Self {
            label: alphabet.render(&digits),
            alphabet,
        })
    }

    /// The canonical integer this counter represents.
    pub fn value(&self) -> Result<u64, LabelError> {
        codec::to_integer(&self.label, &self.alphabet)
    }

    /// True when every symbol is the zero-symbol (canonically: the label
    /// is a single zero-symbol).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.label.chars().all(|c| c == self.alphabet.zero())
    }

    /// The canonical (unpadded) label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The label left-padded with the zero-symbol to `width` characters.
    #[must_use]
    pub fn padded(&self, width: usize) -> String {
        codec::pad(&self.label, width, &self.alphabet)
    }

    /// Orders two counters by value. Counters over different alphabets do
    /// not compare; that is an `AlphabetMismatch`, not an ordering.
    pub fn compare(&self, other: &Self) -> Result<Ordering, LabelError> {
        if self.alphabet != other.alphabet {
            return Err(self.alphabet.mismatch(&other.alphabet));
        }
        codec::compare(&self.label, &other.label, &self.alphabet)
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, LabelError> {
        let (a, b) = self.operands(other)?;
        let sum = a.checked_add(b).ok_or(LabelError::Overflow)?;
        Self::from_value(sum, self.alphabet.clone())
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, LabelError> {
        let (a, b) = self.operands(other)?;
        let diff = a.checked_sub(b).ok_or(LabelError::Negative)?;
        Self::from_value(diff, self.alphabet.clone())
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self, LabelError> {
        let (a, b) = self.operands(other)?;
        let product = a.checked_mul(b).ok_or(LabelError::Overflow)?;
        Self::from_value(product, self.alphabet.clone())
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, LabelError> {
        let (a, b) = self.operands(other)?;
        let quotient = a.checked_div(b).ok_or(LabelError::DivisionByZero)?;
        Self::from_value(quotient, self.alphabet.clone())
    }

    pub fn checked_rem(&self, other: &Self) -> Result<Self, LabelError> {
        let (a, b) = self.operands(other)?;
        let remainder = a.checked_rem(b).ok_or(LabelError::DivisionByZero)?;
        Self::from_value(remainder, self.alphabet.clone())
    }

    pub fn checked_pow(&self, exponent: &Self) -> Result<Self, LabelError> {
        let (base, exp) = self.operands(exponent)?;
        let exp = u32::try_from(exp).map_err(|_| LabelError::Overflow)?;
        let power = base.checked_pow(exp).ok_or(LabelError::Overflow)?;
        Self::from_value(power, self.alphabet.clone())
    }

    fn operands(&self, other: &Self) -> Result<(u64, u64), LabelError> {
        if self.alphabet != other.alphabet {
            return Err(self.alphabet.mismatch(&other.alphabet));
        }
        Ok((self.value()?, other.value()?))
    }
}

impl fmt::Display for LetterCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Serialized shape; deserialization routes through `new` so a stored
/// counter cannot smuggle in an unvalidated or unnormalized label.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawCounter {
    label: String,
    alphabet: Alphabet,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCounter> for LetterCounter {
    type Error = LabelError;

    fn try_from(raw: RawCounter) -> Result<Self, Self::Error> {
        Self::new(&raw.label, raw.alphabet)
    }
}

#[cfg(feature = "serde")]
impl From<LetterCounter> for RawCounter {
    fn from(counter: LetterCounter) -> Self {
        Self {
            label: counter.label,
            alphabet: counter.alphabet,
        }
    }
}
