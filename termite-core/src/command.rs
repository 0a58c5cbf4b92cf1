//! Console commands
//!
//! Matching is done with [`CommandRecord::is_command`], so every command
//! takes an exact number of arguments. Arguments are checked for type
//! before they are read.

use termite_parser::{CommandRecord, FieldType};

/// Name, argument count and usage line for one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandSpec {
    pub name: &'static str,
    pub arguments: usize,
    pub usage: &'static str,
}

/// Every command the console understands
pub const COMMANDS: [CommandSpec; 4] = [
    CommandSpec {
        name: "set",
        arguments: 2,
        usage: "set <target> <value>",
    },
    CommandSpec {
        name: "alert",
        arguments: 1,
        usage: "alert on|off",
    },
    CommandSpec {
        name: "status",
        arguments: 0,
        usage: "status",
    },
    CommandSpec {
        name: "help",
        arguments: 0,
        usage: "help",
    },
];

/// A validated command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set a numbered target to a value
    Set { target: i32, value: i32 },
    /// Turn the alert indicator on or off
    Alert { enabled: bool },
    /// Report current state
    Status,
    /// List commands
    Help,
}

/// Why a line did not produce a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line had no fields
    Empty,
    /// No command matches the name and argument count
    Unknown,
    /// Argument `index` (1-based field number) has the wrong type or value
    BadArgument { index: usize },
}

impl Command {
    /// Match a tokenized record against [`COMMANDS`]
    pub fn parse<const SIZE: usize, const FIELDS: usize>(
        record: &CommandRecord<SIZE, FIELDS>,
    ) -> Result<Self, CommandError> {
        if record.field_count() == 0 {
            return Err(CommandError::Empty);
        }

        let spec = COMMANDS
            .iter()
            .find(|spec| record.is_command(spec.name, spec.arguments))
            .ok_or(CommandError::Unknown)?;

        match spec.name {
            "set" => Ok(Command::Set {
                target: numeric_argument(record, 2)?,
                value: numeric_argument(record, 3)?,
            }),
            "alert" => match record.field_str(2) {
                Ok("on") => Ok(Command::Alert { enabled: true }),
                Ok("off") => Ok(Command::Alert { enabled: false }),
                _ => Err(CommandError::BadArgument { index: 2 }),
            },
            "status" => Ok(Command::Status),
            "help" => Ok(Command::Help),
            _ => Err(CommandError::Unknown),
        }
    }

    /// Command name as typed
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "set",
            Command::Alert { .. } => "alert",
            Command::Status => "status",
            Command::Help => "help",
        }
    }
}

fn numeric_argument<const SIZE: usize, const FIELDS: usize>(
    record: &CommandRecord<SIZE, FIELDS>,
    index: usize,
) -> Result<i32, CommandError> {
    match record.field_type(index) {
        Ok(FieldType::Numeric) => record
            .field_integer(index)
            .map_err(|_| CommandError::BadArgument { index }),
        _ => Err(CommandError::BadArgument { index }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termite_parser::DefaultRecord;

    fn parse(line: &[u8]) -> Result<Command, CommandError> {
        let mut record = DefaultRecord::from_bytes(line);
        record.tokenize();
        Command::parse(&record)
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(
            parse(b"set 4 10"),
            Ok(Command::Set {
                target: 4,
                value: 10
            })
        );
    }

    #[test]
    fn test_set_wrong_argument_count() {
        assert_eq!(parse(b"set 4"), Err(CommandError::Unknown));
        assert_eq!(parse(b"set 4 10 12"), Err(CommandError::Unknown));
    }

    #[test]
    fn test_set_needs_numbers() {
        assert_eq!(
            parse(b"set red 1"),
            Err(CommandError::BadArgument { index: 2 })
        );
        assert_eq!(
            parse(b"set 1 on"),
            Err(CommandError::BadArgument { index: 3 })
        );
    }

    #[test]
    fn test_parse_alert() {
        assert_eq!(parse(b"alert on"), Ok(Command::Alert { enabled: true }));
        assert_eq!(parse(b"  alert   off  "), Ok(Command::Alert { enabled: false }));
        assert_eq!(
            parse(b"alert maybe"),
            Err(CommandError::BadArgument { index: 2 })
        );
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse(b"status"), Ok(Command::Status));
        assert_eq!(parse(b"help"), Ok(Command::Help));
        assert_eq!(parse(b"help me"), Err(CommandError::Unknown));
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(parse(b""), Err(CommandError::Empty));
        assert_eq!(parse(b" ,. "), Err(CommandError::Empty));
        assert_eq!(parse(b"reboot"), Err(CommandError::Unknown));
    }

    #[test]
    fn test_names_match_table() {
        let commands = [
            Command::Set {
                target: 0,
                value: 0,
            },
            Command::Alert { enabled: true },
            Command::Status,
            Command::Help,
        ];
        for (command, spec) in commands.iter().zip(COMMANDS.iter()) {
            assert_eq!(command.name(), spec.name);
        }
    }
}
