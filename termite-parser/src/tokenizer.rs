//! Field tokenizer
//!
//! Splits a completed line into fields in place. A field starts wherever a
//! numeric or alphabetic byte follows a delimiter (or the start of the line)
//! and runs until the next delimiter. That delimiter is overwritten with a
//! null so each field reads as its own null-terminated string.
//!
//! Once the field table is full the scan keeps walking through alphanumeric
//! bytes (they stay part of the last field) and stops at the next delimiter.
//! Anything after that is left exactly as typed.

use crate::record::{CommandRecord, Field, FieldType};

/// Byte classification used by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharClass {
    /// `0-9`
    Numeric,
    /// `a-z` (input is already folded to lowercase by the editor)
    Alphabetic,
    /// Everything else, including null
    Delimiter,
}

impl CharClass {
    /// Classify a single byte
    pub fn of(byte: u8) -> Self {
        match byte {
            b'0'..=b'9' => CharClass::Numeric,
            b'a'..=b'z' => CharClass::Alphabetic,
            _ => CharClass::Delimiter,
        }
    }

    /// True for numeric or alphabetic bytes
    pub fn is_field(self) -> bool {
        self != CharClass::Delimiter
    }
}

impl<const SIZE: usize, const FIELDS: usize> CommandRecord<SIZE, FIELDS> {
    /// Rebuild the field table and null out field separators
    ///
    /// Scans the edited line (`0..len`). Null bytes inside the line count as
    /// delimiters, so running this again on an already tokenized record
    /// produces the same table.
    ///
    /// Any borrow previously taken from the accessors is invalidated; the
    /// borrow checker enforces this since tokenizing needs `&mut self`.
    pub fn tokenize(&mut self) {
        self.fields.clear();

        let end = self.len.min(SIZE);
        let mut prev = CharClass::Delimiter;
        let mut i = 0;

        while i < end {
            let class = CharClass::of(self.buffer[i]);

            if self.fields.is_full() {
                // Overflow: fold trailing alphanumerics into the last field
                if !class.is_field() {
                    break;
                }
                i += 1;
                continue;
            }

            match (prev, class) {
                (CharClass::Delimiter, CharClass::Numeric) => {
                    self.push_field(i, FieldType::Numeric);
                    prev = class;
                }
                (CharClass::Delimiter, CharClass::Alphabetic) => {
                    self.push_field(i, FieldType::Alphabetic);
                    prev = class;
                }
                (CharClass::Numeric | CharClass::Alphabetic, CharClass::Delimiter) => {
                    self.buffer[i] = 0;
                    prev = class;
                }
                // Run continues
                _ => {}
            }

            i += 1;
        }

        // Close the last field
        if i < SIZE {
            self.buffer[i] = 0;
        }
    }

    fn push_field(&mut self, position: usize, kind: FieldType) {
        // Cannot fail: the caller checks is_full() first
        let _ = self.fields.push(Field { position, kind });
    }
}
