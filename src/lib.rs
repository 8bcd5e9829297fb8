//! Spreadsheet-style alphabetic labels.
//!
//! Labels are read as numerals over an ordered alphabet whose first
//! symbol acts as zero (with the default A–Z alphabet: A=0, B=1, …, Z=25,
//! "BA"=26). The crate converts between labels and integers, compares
//! labels by value, and enumerates consecutive labels odometer-style.
//!
//! ```
//! use letterseq::{codec, Alphabet, LetterIterator};
//!
//! let alphabet = Alphabet::latin_upper();
//! assert_eq!(codec::to_integer("BA", &alphabet).unwrap(), 26);
//!
//! let columns: Vec<String> = LetterIterator::new("A", alphabet)
//!     .unwrap()
//!     .with_end("D")
//!     .unwrap()
//!     .collect();
//! assert_eq!(columns, ["A", "B", "C"]);
//! ```

pub mod alphabet;
pub mod codec;
pub mod counter;
pub mod error;
pub mod iter;

pub use alphabet::Alphabet;
pub use codec::DEFAULT_MAX_WIDTH;
pub use counter::LetterCounter;
pub use error::LabelError;
pub use iter::LetterIterator;
