//! Field accessors
//!
//! Read-only views over a tokenized [`CommandRecord`]. Field numbers are
//! 1-based. Strings are borrowed from the record buffer, so they live only
//! as long as the record is not edited or tokenized again.

use crate::record::{CommandRecord, Field, FieldType};

/// Errors returned by the field accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// Field number is 0 or larger than the field count
    NoSuchField { index: usize, count: usize },
    /// Field bytes are not ASCII (never produced for tokenized lines)
    NotAscii { index: usize },
}

impl<const SIZE: usize, const FIELDS: usize> CommandRecord<SIZE, FIELDS> {
    /// Number of fields found by the last [`CommandRecord::tokenize`]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field table entry for field `n`
    pub fn field(&self, n: usize) -> Result<Field, FieldError> {
        if n < 1 || n > self.fields.len() {
            return Err(FieldError::NoSuchField {
                index: n,
                count: self.fields.len(),
            });
        }
        Ok(self.fields[n - 1])
    }

    /// Type of field `n`
    pub fn field_type(&self, n: usize) -> Result<FieldType, FieldError> {
        self.field(n).map(|field| field.kind)
    }

    /// Buffer offset of field `n`
    pub fn field_position(&self, n: usize) -> Result<usize, FieldError> {
        self.field(n).map(|field| field.position)
    }

    /// Raw bytes of field `n`, without the terminator
    pub fn field_bytes(&self, n: usize) -> Result<&[u8], FieldError> {
        let field = self.field(n)?;
        Ok(until_null(&self.buffer[field.position..]))
    }

    /// Field `n` as a string
    pub fn field_str(&self, n: usize) -> Result<&str, FieldError> {
        let bytes = self.field_bytes(n)?;
        core::str::from_utf8(bytes).map_err(|_| FieldError::NotAscii { index: n })
    }

    /// Field `n` parsed as a signed decimal integer
    ///
    /// See [`parse_integer`] for what happens with non-digit bytes.
    pub fn field_integer(&self, n: usize) -> Result<i32, FieldError> {
        self.field_bytes(n).map(parse_integer)
    }

    /// Iterate over `(type, text)` for every field
    pub fn fields(&self) -> impl Iterator<Item = (FieldType, &str)> + '_ {
        (1..=self.field_count())
            .filter_map(move |n| Some((self.field_type(n).ok()?, self.field_str(n).ok()?)))
    }

    /// True if the first field is `name` and exactly `arguments` fields follow it
    ///
    /// The count must match exactly; extra arguments fail the match just
    /// like missing ones.
    pub fn is_command(&self, name: &str, arguments: usize) -> bool {
        match self.field_bytes(1) {
            Ok(first) => {
                strings_equal(first, name.as_bytes()) && self.field_count() - 1 == arguments
            }
            Err(_) => false,
        }
    }
}

/// Compare two null-terminated byte strings
///
/// The end of a slice counts as its terminator. Equal only if both strings
/// end at the same position with every byte before it matching.
pub fn strings_equal(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    loop {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return false;
        }
        if x == 0 {
            return true;
        }
        i += 1;
    }
}

/// Parse a signed base-10 integer
///
/// An optional leading `-` negates the result. Every following byte up to
/// the terminator is treated as a digit without checking, so non-digit bytes
/// give a meaningless value rather than an error. Arithmetic wraps on
/// overflow.
pub fn parse_integer(bytes: &[u8]) -> i32 {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };

    let value = until_null(digits).iter().fold(0i32, |acc, &b| {
        acc.wrapping_mul(10)
            .wrapping_add(i32::from(b).wrapping_sub(i32::from(b'0')))
    });

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

fn until_null(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}
