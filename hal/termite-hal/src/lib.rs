//! Termite Hardware Abstraction Layer
//!
//! The console core only needs two capabilities from the board: read the
//! next byte from the serial line, and write bytes back. This crate defines
//! those as traits so the parser and console can be exercised on the host
//! with in-memory transports and run on any chip with a UART.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  termite-core (console session)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  termite-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  chip UART    │       │  host mock /  │
//! │  driver       │       │  test harness │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

pub use uart::{Uart, UartConfig, UartRx, UartTx};
