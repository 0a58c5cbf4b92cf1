//! Board-agnostic console logic
//!
//! This crate sits between the serial transport and whatever the board does
//! with a command:
//!
//! - Console configuration (echo, field dump, prompt, baud rate)
//! - Typed command matching on top of the field accessors
//! - A session that echoes lines, dumps fields and answers bad input
//! - A blocking console driver over the `termite-hal` UART traits
//!
//! Async firmware drives [`session::Session`] directly and collects replies
//! in a [`reply::ReplyBuffer`]; blocking targets can use
//! [`console::Console`].

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod console;
pub mod reply;
pub mod session;

pub use command::{Command, CommandError, CommandSpec, COMMANDS};
pub use config::{ConfigError, ConsoleConfig};
pub use console::{Console, ConsoleError};
pub use reply::{ReplyBuffer, ReplyOverflow};
pub use session::Session;
