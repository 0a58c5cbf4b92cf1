//! Blocking console driver
//!
//! Runs a [`Session`] over a pair of blocking UART halves: prompt, read one
//! line, echo and dump it, answer bad input, hand back the command. The
//! only place this blocks is the byte read.

use termite_hal::{UartRx, UartTx};
use termite_parser::{LINE_BUFFER_SIZE, MAX_FIELDS};

use crate::command::Command;
use crate::config::ConsoleConfig;
use crate::session::Session;

/// Transport failure while running the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError<RxError, TxError> {
    /// Receive side failed
    Read(RxError),
    /// Transmit side failed
    Write(TxError),
}

/// Serial console over blocking UART halves
pub struct Console<R, W, const SIZE: usize = LINE_BUFFER_SIZE, const FIELDS: usize = MAX_FIELDS>
where
    R: UartRx,
    W: UartTx,
{
    rx: R,
    tx: W,
    session: Session<SIZE, FIELDS>,
}

impl<R, W, const SIZE: usize, const FIELDS: usize> Console<R, W, SIZE, FIELDS>
where
    R: UartRx,
    W: UartTx,
{
    /// Create a console on the given UART halves
    pub fn new(rx: R, tx: W, config: ConsoleConfig) -> Self {
        Self {
            rx,
            tx,
            session: Session::new(config),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ConsoleConfig {
        self.session.config()
    }

    /// Transmitter, for command handlers that answer directly
    pub fn writer(&mut self) -> &mut W {
        &mut self.tx
    }

    /// Give back the UART halves
    pub fn into_parts(self) -> (R, W) {
        (self.rx, self.tx)
    }

    /// Write a reply line
    pub fn respond(&mut self, text: &str) -> Result<(), W::Error> {
        self.tx.write_str(text)?;
        self.tx.write_byte(b'\n')?;
        self.tx.flush()
    }

    /// Read and handle one line
    ///
    /// Returns `Ok(None)` for empty lines and lines that were answered with
    /// `invalid command`.
    pub fn poll(&mut self) -> Result<Option<Command>, ConsoleError<R::Error, W::Error>> {
        self.session
            .prompt(&mut self.tx)
            .and_then(|()| self.tx.flush())
            .map_err(ConsoleError::Write)?;

        let record = self
            .session
            .editor_mut()
            .read_line(&mut self.rx)
            .map_err(ConsoleError::Read)?;

        let command = self
            .session
            .handle_line(record, &mut self.tx)
            .map_err(ConsoleError::Write)?;
        self.tx.flush().map_err(ConsoleError::Write)?;

        Ok(command)
    }
}
