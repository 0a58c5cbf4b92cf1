//! Console configuration
//!
//! Line and field capacity are compile-time parameters (see
//! [`termite_parser::MAX_CHARS`] and [`termite_parser::MAX_FIELDS`]).
//! Everything here can change per board.

use heapless::String;
use termite_hal::UartConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum prompt length
pub const MAX_PROMPT_LEN: usize = 8;

/// Default console baud rate
pub const DEFAULT_BAUDRATE: u32 = 115200;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Prompt does not fit in [`MAX_PROMPT_LEN`] bytes
    PromptTooLong,
    /// Baud rate of zero
    InvalidBaudrate,
}

/// Console behavior
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ConsoleConfig {
    /// Serial baud rate
    pub baudrate: u32,
    /// Write each completed line back to the terminal
    pub echo: bool,
    /// Write one `<type>\t<field>` line per parsed field
    pub dump_fields: bool,
    /// Written before each line is read (empty for none)
    pub prompt: String<MAX_PROMPT_LEN>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
            echo: true,
            dump_fields: true,
            prompt: String::new(),
        }
    }
}

impl ConsoleConfig {
    /// Replace the prompt
    pub fn with_prompt(mut self, prompt: &str) -> Result<Self, ConfigError> {
        self.prompt.clear();
        self.prompt
            .push_str(prompt)
            .map_err(|_| ConfigError::PromptTooLong)?;
        Ok(self)
    }

    /// Check values that the type system does not
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baudrate == 0 {
            return Err(ConfigError::InvalidBaudrate);
        }
        Ok(())
    }

    /// UART settings for this console (8N1)
    pub fn uart_config(&self) -> UartConfig {
        UartConfig::with_baudrate(self.baudrate)
    }
}
