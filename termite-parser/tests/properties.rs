//! Property tests for the editor → tokenizer pipeline

use proptest::prelude::*;
use termite_parser::editor::{DefaultEditor, BACKSPACE, CR, DELETE, LF};
use termite_parser::{CharClass, DefaultRecord, FieldType, Termination, MAX_CHARS, MAX_FIELDS};

/// Printable bytes, biased towards things that form fields and delimiters
fn line_byte() -> impl Strategy<Value = u8> {
    prop_oneof![
        4 => prop::sample::select(b"abcdefghijklmnopqrstuvwxyz0123456789".to_vec()),
        2 => prop::sample::select(b" ,.-=:".to_vec()),
        1 => 0x20u8..0x7F,
    ]
}

/// Printable bytes, backspaces and stray control bytes
fn typed_byte() -> impl Strategy<Value = u8> {
    prop_oneof![
        8 => line_byte(),
        2 => Just(BACKSPACE),
        1 => Just(DELETE),
        1 => prop::sample::select(vec![0x01u8, 0x09, 0x1B]),
    ]
}

/// What the editor should produce for bytes without a terminator
fn model_edit(bytes: &[u8]) -> Vec<u8> {
    let mut line = Vec::new();
    for &b in bytes {
        match b {
            BACKSPACE | DELETE if !line.is_empty() => {
                line.pop();
            }
            0x20..=0xFF => line.push(b.to_ascii_lowercase()),
            _ => {}
        }
    }
    line
}

proptest! {
    #[test]
    fn prop_terminated_line_matches_model(
        bytes in prop::collection::vec(typed_byte(), 0..60),
        terminator in prop::sample::select(vec![CR, LF]),
    ) {
        let mut editor = DefaultEditor::new();
        prop_assert!(editor.feed_bytes(&bytes).is_none());

        let record = editor.feed(terminator).unwrap();
        let expected = model_edit(&bytes);

        prop_assert_eq!(record.line(), expected.as_slice());
        prop_assert_eq!(record.buffer()[expected.len()], 0);
        prop_assert_eq!(record.termination(), Termination::Terminator);
    }

    #[test]
    fn prop_backspaces_never_underflow(count in 0usize..20, tail in "[a-z]{0,10}") {
        let mut editor = DefaultEditor::new();
        for _ in 0..count {
            prop_assert!(editor.feed(BACKSPACE).is_none());
        }
        prop_assert_eq!(editor.cursor(), 0);

        prop_assert!(editor.feed_bytes(tail.as_bytes()).is_none());
        let record = editor.feed(CR).unwrap();
        prop_assert_eq!(record.line(), tail.as_bytes());
    }

    #[test]
    fn prop_forced_completion_at_capacity(
        bytes in prop::collection::vec(line_byte(), MAX_CHARS - 1),
        extra in line_byte(),
    ) {
        let mut editor = DefaultEditor::new();
        prop_assert!(editor.feed_bytes(&bytes).is_none());

        let record = editor.feed(extra).unwrap();
        prop_assert_eq!(record.termination(), Termination::Overflow);
        prop_assert_eq!(record.len(), MAX_CHARS - 1);
        prop_assert_eq!(record.buffer()[MAX_CHARS - 1], 0);
        prop_assert_eq!(record.buffer()[MAX_CHARS], b'\n');
    }

    #[test]
    fn prop_field_count_bounded(line in prop::collection::vec(line_byte(), 0..MAX_CHARS)) {
        let mut record = DefaultRecord::from_bytes(&line);
        record.tokenize();
        prop_assert!(record.field_count() <= MAX_FIELDS);
    }

    #[test]
    fn prop_tokenize_idempotent(line in prop::collection::vec(line_byte(), 0..MAX_CHARS)) {
        let mut record = DefaultRecord::from_bytes(&line);
        record.tokenize();
        let once = record.clone();

        record.tokenize();
        prop_assert_eq!(record, once);
    }

    #[test]
    fn prop_fields_are_well_formed(line in prop::collection::vec(line_byte(), 0..MAX_CHARS)) {
        let mut record = DefaultRecord::from_bytes(&line);
        record.tokenize();

        let mut last_position = None;
        for n in 1..=record.field_count() {
            let position = record.field_position(n).unwrap();
            if let Some(last) = last_position {
                prop_assert!(position > last);
            }
            last_position = Some(position);

            // Field starts right after a delimiter (or at offset 0)
            if position > 0 {
                prop_assert_eq!(CharClass::of(record.buffer()[position - 1]), CharClass::Delimiter);
            }

            let text = record.field_str(n).unwrap();
            prop_assert!(!text.is_empty());
            prop_assert!(text.bytes().all(|b| CharClass::of(b).is_field()));

            let expected = if text.as_bytes()[0].is_ascii_digit() {
                FieldType::Numeric
            } else {
                FieldType::Alphabetic
            };
            prop_assert_eq!(record.field_type(n).unwrap(), expected);
        }
    }

    #[test]
    fn prop_numeric_fields_parse(value in 0i32..=i32::MAX) {
        let text = value.to_string();
        let mut record = DefaultRecord::from_bytes(format!("set {text}").as_bytes());
        record.tokenize();

        prop_assert_eq!(record.field_integer(2).unwrap(), value);
        prop_assert_eq!(termite_parser::parse_integer(format!("-{text}").as_bytes()), -value);
    }
}
