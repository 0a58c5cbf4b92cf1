//! Command record: one input line plus its field table
//!
//! The record owns a fixed `SIZE`-byte buffer (`MAX_CHARS + 1`, so a
//! terminator always fits) and a bounded table of up to `FIELDS` fields.
//! A new record is created for every line and dropped after dispatch.

use heapless::Vec;

/// Default line capacity in characters
pub const MAX_CHARS: usize = 80;

/// Default number of fields recognized per line
pub const MAX_FIELDS: usize = 5;

/// Buffer size for the default line capacity (room for the terminator)
pub const LINE_BUFFER_SIZE: usize = MAX_CHARS + 1;

/// Record with the default line and field capacity
pub type DefaultRecord = CommandRecord<LINE_BUFFER_SIZE, MAX_FIELDS>;

/// Field classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldType {
    /// Field starts with `0-9`
    Numeric,
    /// Field starts with `a-z`
    Alphabetic,
}

impl FieldType {
    /// One-letter tag used by the console field dump (`n` / `a`)
    pub fn tag(self) -> u8 {
        match self {
            FieldType::Numeric => b'n',
            FieldType::Alphabetic => b'a',
        }
    }
}

/// Entry in the field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Offset of the first byte of the field within the buffer
    pub position: usize,
    /// Class of the first byte
    pub kind: FieldType,
}

/// How the line editor finished a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Termination {
    /// CR or LF received
    Terminator,
    /// Buffer filled up before a terminator arrived
    ///
    /// The editor writes a raw `\n` at `buffer[MAX_CHARS]` in this case. The
    /// line itself is still null-terminated at [`CommandRecord::len`].
    Overflow,
}

/// One line of console input and the fields found in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord<const SIZE: usize, const FIELDS: usize> {
    pub(crate) buffer: [u8; SIZE],
    pub(crate) len: usize,
    pub(crate) fields: Vec<Field, FIELDS>,
    pub(crate) termination: Termination,
}

impl<const SIZE: usize, const FIELDS: usize> Default for CommandRecord<SIZE, FIELDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize, const FIELDS: usize> CommandRecord<SIZE, FIELDS> {
    /// Maximum line length in characters (buffer size minus the terminator)
    pub const MAX_CHARS: usize = SIZE - 1;

    /// Maximum number of fields
    pub const MAX_FIELDS: usize = FIELDS;

    /// Create an empty, zeroed record
    pub const fn new() -> Self {
        Self {
            buffer: [0; SIZE],
            len: 0,
            fields: Vec::new(),
            termination: Termination::Terminator,
        }
    }

    /// Build a record from a raw line, as if it had been typed
    ///
    /// Copies bytes up to the first null. No case folding or backspace
    /// handling is applied. A line that does not fit is cut the same way the
    /// editor cuts it (at `MAX_CHARS - 1` bytes) and reports
    /// [`Termination::Overflow`].
    pub fn from_bytes(line: &[u8]) -> Self {
        let mut record = Self::new();
        let line = match line.iter().position(|&b| b == 0) {
            Some(end) => &line[..end],
            None => line,
        };
        let limit = Self::MAX_CHARS.saturating_sub(1);

        if line.len() > limit {
            record.buffer[..limit].copy_from_slice(&line[..limit]);
            record.force_complete(limit);
        } else {
            record.buffer[..line.len()].copy_from_slice(line);
            record.terminate(line.len());
        }
        record
    }

    /// Close the line with a null at `count`
    pub(crate) fn terminate(&mut self, count: usize) {
        self.buffer[count] = 0;
        self.len = count;
        self.termination = Termination::Terminator;
    }

    /// Close the line because the buffer is full
    ///
    /// Writes the `\n` sentinel into the last buffer slot. The slot at
    /// `count` (== `MAX_CHARS - 1`) is never written by the editor, so it
    /// still holds the null from [`CommandRecord::new`].
    pub(crate) fn force_complete(&mut self, count: usize) {
        self.buffer[SIZE - 1] = b'\n';
        self.len = count;
        self.termination = Termination::Overflow;
    }

    /// Reset to an empty line with no fields
    pub fn clear(&mut self) {
        self.buffer = [0; SIZE];
        self.len = 0;
        self.fields.clear();
        self.termination = Termination::Terminator;
    }

    /// Raw buffer, including terminators and anything past the line
    pub fn buffer(&self) -> &[u8; SIZE] {
        &self.buffer
    }

    /// Bytes of the line as edited
    ///
    /// After [`CommandRecord::tokenize`] the delimiters between fields read
    /// back as nulls.
    pub fn line(&self) -> &[u8] {
        &self.buffer[..self.len.min(SIZE)]
    }

    /// Line length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing was typed
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How the line was completed
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// True if the line was cut at capacity
    pub fn is_overflow(&self) -> bool {
        self.termination == Termination::Overflow
    }
}

#[cfg(feature = "defmt")]
impl<const SIZE: usize, const FIELDS: usize> defmt::Format for CommandRecord<SIZE, FIELDS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "CommandRecord {{ line: {=[u8]:a}, fields: {}, termination: {} }}",
            self.line(),
            self.fields.len(),
            self.termination
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = DefaultRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert_eq!(record.termination(), Termination::Terminator);
        assert!(record.buffer().iter().all(|&b| b == 0));
        assert_eq!(DefaultRecord::MAX_CHARS, 80);
        assert_eq!(DefaultRecord::MAX_FIELDS, 5);
    }

    #[test]
    fn test_from_bytes_copies_line() {
        let record = DefaultRecord::from_bytes(b"set 4 10");
        assert_eq!(record.line(), b"set 4 10");
        assert_eq!(record.len(), 8);
        assert_eq!(record.buffer()[8], 0);
        assert!(!record.is_overflow());
    }

    #[test]
    fn test_from_bytes_stops_at_null() {
        let record = DefaultRecord::from_bytes(b"on\0off");
        assert_eq!(record.line(), b"on");
    }

    #[test]
    fn test_from_bytes_truncates_long_line() {
        let record = CommandRecord::<9, 3>::from_bytes(b"abcdefghijkl");
        // MAX_CHARS is 8, so 7 bytes fit before forced completion
        assert_eq!(record.line(), b"abcdefg");
        assert!(record.is_overflow());
        assert_eq!(record.buffer()[7], 0);
        assert_eq!(record.buffer()[8], b'\n');
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut record = CommandRecord::<9, 3>::from_bytes(b"abcdefghijkl");
        record.clear();
        assert!(record.is_empty());
        assert!(!record.is_overflow());
        assert_eq!(record.buffer(), &[0u8; 9]);
    }

    #[test]
    fn test_field_type_tags() {
        assert_eq!(FieldType::Numeric.tag(), b'n');
        assert_eq!(FieldType::Alphabetic.tag(), b'a');
    }
}
