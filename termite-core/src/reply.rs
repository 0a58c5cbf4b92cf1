//! In-memory reply sink
//!
//! Collects console output so an async task can send it in one write.

use heapless::Vec;
use termite_hal::UartTx;

/// Reply did not fit in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReplyOverflow;

/// Fixed-capacity output buffer that acts as a UART transmitter
#[derive(Debug, Clone, Default)]
pub struct ReplyBuffer<const N: usize> {
    bytes: Vec<u8, N>,
}

impl<const N: usize> ReplyBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Collected output
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Drop collected output
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl<const N: usize> UartTx for ReplyBuffer<N> {
    type Error = ReplyOverflow;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), ReplyOverflow> {
        self.bytes.extend_from_slice(data).map_err(|_| ReplyOverflow)
    }

    fn flush(&mut self) -> Result<(), ReplyOverflow> {
        Ok(())
    }
}
