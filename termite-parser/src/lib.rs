//! Termite line parser
//!
//! Turns raw serial bytes into typed command fields without touching the
//! heap. A line goes through three stages:
//!
//! ```text
//! raw bytes ──▶ LineEditor ──▶ CommandRecord ──▶ tokenize() ──▶ field accessors
//!               (backspace,    (fixed buffer)    (field table,   (string, integer,
//!                case fold,                       delimiters      command match)
//!                overflow)                        nulled)
//! ```
//!
//! Fields are maximal runs of `0-9` / `a-z` bytes. Everything else is a
//! delimiter. After tokenizing, every field is its own null-terminated string
//! inside the record buffer, so accessors hand out borrows instead of copies.
//!
//! # Example
//!
//! ```
//! use termite_parser::{DefaultRecord, FieldType};
//!
//! let mut record = DefaultRecord::from_bytes(b"set 4 10");
//! record.tokenize();
//!
//! assert_eq!(record.field_count(), 3);
//! assert_eq!(record.field_str(1), Ok("set"));
//! assert_eq!(record.field_type(2), Ok(FieldType::Numeric));
//! assert_eq!(record.field_integer(3), Ok(10));
//! assert!(record.is_command("set", 2));
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod editor;
pub mod fields;
pub mod record;
pub mod tokenizer;

pub use editor::{DefaultEditor, LineEditor};
pub use fields::{parse_integer, strings_equal, FieldError};
pub use record::{
    CommandRecord, DefaultRecord, Field, FieldType, Termination, LINE_BUFFER_SIZE, MAX_CHARS,
    MAX_FIELDS,
};
pub use tokenizer::CharClass;
