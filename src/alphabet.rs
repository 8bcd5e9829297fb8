use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// An ordered set of distinct characters used as the digit alphabet.
///
/// The position of a character is its digit value, so the first symbol
/// plays the role of zero and the number of symbols is the radix. The set
/// is immutable after construction; every label handled by this crate is
/// interpreted against one `Alphabet`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from a symbol string, in order.
    ///
    /// Rejects the empty string and duplicate symbols.
    pub fn new(symbols: &str) -> Result<Self, LabelError> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.is_empty() {
            return Err(LabelError::InvalidAlphabet(
                "must contain at least one symbol".to_string(),
            ));
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(LabelError::InvalidAlphabet(format!(
                    "duplicate symbol {c:?}"
                )));
            }
        }
        Ok(Self { symbols: chars })
    }

    /// The 26 ASCII uppercase letters, `A` playing the role of zero.
    #[must_use]
    pub fn latin_upper() -> Self {
        Self {
            symbols: ('A'..='Z').collect(),
        }
    }

    /// Number of symbols, i.e. the radix of the positional system.
    #[must_use]
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// The first symbol, used for padding and leading positions.
    #[must_use]
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Digit value of `c`, if it is a member.
    #[must_use]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == c)
    }

    /// Symbol for digit value `index`, if in range.
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The symbol string this alphabet was built from.
    #[must_use]
    pub fn symbols(&self) -> String {
        self.symbols.iter().collect()
    }

    /// Decodes a label into digit values, most significant first.
    pub(crate) fn digits_of(&self, label: &str) -> Result<Vec<usize>, LabelError> {
        if label.is_empty() {
            return Err(LabelError::EmptyLabel);
        }
        label
            .chars()
            .map(|c| self.index_of(c).ok_or(LabelError::InvalidSymbol(c)))
            .collect()
    }

    /// Renders digit values back into a label.
    pub(crate) fn render(&self, digits: &[usize]) -> String {
        digits.iter().map(|&d| self.symbols[d]).collect()
    }

    pub(crate) fn mismatch(&self, other: &Self) -> LabelError {
        LabelError::AlphabetMismatch {
            left: self.symbols(),
            right: other.symbols(),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin_upper()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = LabelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols()
    }
}
