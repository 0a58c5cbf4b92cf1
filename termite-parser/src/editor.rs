//! Line editor
//!
//! Accepts raw bytes one at a time and assembles them into a
//! [`CommandRecord`]. Supports destructive backspace, folds `A-Z` to
//! `a-z` and forces completion when the buffer fills up.
//!
//! The editor is a plain state machine: [`LineEditor::feed`] never blocks,
//! so it can sit behind an async UART task as easily as behind the blocking
//! [`LineEditor::read_line`] loop.

use termite_hal::UartRx;

use crate::record::{CommandRecord, LINE_BUFFER_SIZE, MAX_FIELDS};

/// ASCII backspace
pub const BACKSPACE: u8 = 0x08;

/// ASCII delete (sent by most terminals for the backspace key)
pub const DELETE: u8 = 0x7F;

/// Carriage return
pub const CR: u8 = b'\r';

/// Line feed
pub const LF: u8 = b'\n';

/// Editor with the default line and field capacity
pub type DefaultEditor = LineEditor<LINE_BUFFER_SIZE, MAX_FIELDS>;

/// Assembles input bytes into command records
#[derive(Debug, Clone)]
pub struct LineEditor<const SIZE: usize, const FIELDS: usize> {
    record: CommandRecord<SIZE, FIELDS>,
    count: usize,
}

impl<const SIZE: usize, const FIELDS: usize> Default for LineEditor<SIZE, FIELDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize, const FIELDS: usize> LineEditor<SIZE, FIELDS> {
    /// Create an editor with an empty line
    pub const fn new() -> Self {
        Self {
            record: CommandRecord::new(),
            count: 0,
        }
    }

    /// Discard the line in progress
    pub fn reset(&mut self) {
        self.record.clear();
        self.count = 0;
    }

    /// Number of bytes in the line so far
    pub fn cursor(&self) -> usize {
        self.count
    }

    /// Bytes typed so far
    pub fn pending(&self) -> &[u8] {
        &self.record.buffer[..self.count]
    }

    /// Feed a single byte to the editor
    ///
    /// Returns `Some(record)` when the line is complete (CR/LF, or the buffer
    /// filled up), `None` while more bytes are needed. The editor starts a
    /// fresh line after handing out a record.
    pub fn feed(&mut self, byte: u8) -> Option<CommandRecord<SIZE, FIELDS>> {
        match byte {
            BACKSPACE | DELETE if self.count != 0 => {
                // Only the cursor moves; the next byte overwrites the old one
                self.count -= 1;
                None
            }
            CR | LF => {
                self.record.terminate(self.count);
                Some(self.finish())
            }
            b' '..=u8::MAX => {
                if self.count == CommandRecord::<SIZE, FIELDS>::MAX_CHARS - 1 {
                    // Triggering byte is dropped
                    self.record.force_complete(self.count);
                    return Some(self.finish());
                }
                self.record.buffer[self.count] = byte.to_ascii_lowercase();
                self.count += 1;
                None
            }
            // Other control bytes are ignored
            _ => None,
        }
    }

    /// Feed multiple bytes to the editor
    ///
    /// Returns the first completed line, if any.
    /// Remaining bytes after a completed line are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Option<CommandRecord<SIZE, FIELDS>> {
        bytes.iter().find_map(|&byte| self.feed(byte))
    }

    /// Block on `rx` until a full line has been read
    pub fn read_line<R: UartRx>(
        &mut self,
        rx: &mut R,
    ) -> Result<CommandRecord<SIZE, FIELDS>, R::Error> {
        loop {
            let byte = rx.read_byte()?;
            if let Some(record) = self.feed(byte) {
                return Ok(record);
            }
        }
    }

    fn finish(&mut self) -> CommandRecord<SIZE, FIELDS> {
        self.count = 0;
        core::mem::take(&mut self.record)
    }
}
