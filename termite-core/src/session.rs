//! Console session
//!
//! Owns the line editor and decides what gets written back for each line:
//! the echo, the field dump, help text and the `invalid command` reply.
//! The session never reads from the transport itself; bytes are pushed in
//! with [`Session::feed`] and output goes to any [`UartTx`].

use termite_hal::UartTx;
use termite_parser::{CommandRecord, LineEditor, LINE_BUFFER_SIZE, MAX_FIELDS};

use crate::command::{Command, CommandError, COMMANDS};
use crate::config::ConsoleConfig;

/// Reply sent for any line that is not a valid command
pub const INVALID_COMMAND: &str = "invalid command";

/// Line editing and reply logic for one console
#[derive(Debug, Clone)]
pub struct Session<const SIZE: usize = LINE_BUFFER_SIZE, const FIELDS: usize = MAX_FIELDS> {
    editor: LineEditor<SIZE, FIELDS>,
    config: ConsoleConfig,
}

impl<const SIZE: usize, const FIELDS: usize> Session<SIZE, FIELDS> {
    /// Create a session with an empty line
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            editor: LineEditor::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Line editor, for blocking reads
    pub fn editor_mut(&mut self) -> &mut LineEditor<SIZE, FIELDS> {
        &mut self.editor
    }

    /// Feed one received byte; returns the line once it is complete
    pub fn feed(&mut self, byte: u8) -> Option<CommandRecord<SIZE, FIELDS>> {
        self.editor.feed(byte)
    }

    /// Write the prompt, if one is configured
    pub fn prompt<W: UartTx>(&self, out: &mut W) -> Result<(), W::Error> {
        if !self.config.prompt.is_empty() {
            out.write_str(&self.config.prompt)?;
        }
        Ok(())
    }

    /// Echo, tokenize and dump a completed line
    pub fn prepare<W: UartTx>(
        &self,
        record: &mut CommandRecord<SIZE, FIELDS>,
        out: &mut W,
    ) -> Result<(), W::Error> {
        if self.config.echo {
            out.write_blocking(record.line())?;
            out.write_byte(b'\n')?;
        }

        record.tokenize();

        if self.config.dump_fields {
            for (kind, text) in record.fields() {
                out.write_byte(kind.tag())?;
                out.write_byte(b'\t')?;
                out.write_str(text)?;
                out.write_byte(b'\n')?;
            }
        }
        Ok(())
    }

    /// Match a tokenized line and answer anything that is not a command
    ///
    /// Empty lines are ignored silently. `help` is answered here and still
    /// returned so the caller can see it.
    pub fn dispatch<W: UartTx>(
        &self,
        record: &CommandRecord<SIZE, FIELDS>,
        out: &mut W,
    ) -> Result<Option<Command>, W::Error> {
        match Command::parse(record) {
            Ok(Command::Help) => {
                write_help(out)?;
                Ok(Some(Command::Help))
            }
            Ok(command) => Ok(Some(command)),
            Err(CommandError::Empty) => Ok(None),
            Err(_) => {
                out.write_str(INVALID_COMMAND)?;
                out.write_byte(b'\n')?;
                Ok(None)
            }
        }
    }

    /// [`Session::prepare`] followed by [`Session::dispatch`]
    pub fn handle_line<W: UartTx>(
        &self,
        mut record: CommandRecord<SIZE, FIELDS>,
        out: &mut W,
    ) -> Result<Option<Command>, W::Error> {
        self.prepare(&mut record, out)?;
        self.dispatch(&record, out)
    }
}

/// Write one usage line per command
pub fn write_help<W: UartTx>(out: &mut W) -> Result<(), W::Error> {
    for spec in COMMANDS.iter() {
        out.write_str(spec.usage)?;
        out.write_byte(b'\n')?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::ReplyBuffer;

    type Reply = ReplyBuffer<256>;

    fn run(session: &mut Session, input: &[u8]) -> (Option<Command>, Reply) {
        let mut out = Reply::new();
        let record = session.editor_mut().feed_bytes(input).unwrap();
        let command = session.handle_line(record, &mut out).unwrap();
        (command, out)
    }

    fn quiet() -> ConsoleConfig {
        ConsoleConfig {
            echo: false,
            dump_fields: false,
            ..ConsoleConfig::default()
        }
    }

    #[test]
    fn test_echo_and_field_dump() {
        let mut session = Session::new(ConsoleConfig::default());
        let (command, out) = run(&mut session, b"Set 4 10\r");

        assert_eq!(
            command,
            Some(Command::Set {
                target: 4,
                value: 10
            })
        );
        assert_eq!(out.as_bytes(), b"set 4 10\na\tset\nn\t4\nn\t10\n");
    }

    #[test]
    fn test_quiet_session_writes_nothing_for_valid_command() {
        let mut session = Session::new(quiet());
        let (command, out) = run(&mut session, b"alert on\r");
        assert_eq!(command, Some(Command::Alert { enabled: true }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_command_reply() {
        let mut session = Session::new(quiet());
        let (command, out) = run(&mut session, b"set 1\r");
        assert_eq!(command, None);
        assert_eq!(out.as_bytes(), b"invalid command\n");
    }

    #[test]
    fn test_empty_line_ignored() {
        let mut session = Session::new(quiet());
        let (command, out) = run(&mut session, b"   \r");
        assert_eq!(command, None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_help_lists_commands() {
        let mut session = Session::new(quiet());
        let (command, out) = run(&mut session, b"help\r");
        assert_eq!(command, Some(Command::Help));
        assert_eq!(
            out.as_bytes(),
            b"set <target> <value>\nalert on|off\nstatus\nhelp\n"
        );
    }

    #[test]
    fn test_prompt() {
        let session: Session = Session::new(ConsoleConfig::default().with_prompt("> ").unwrap());
        let mut out = Reply::new();
        session.prompt(&mut out).unwrap();
        assert_eq!(out.as_bytes(), b"> ");

        let session: Session = Session::new(ConsoleConfig::default());
        let mut out = Reply::new();
        session.prompt(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_feed_completes_line() {
        let mut session: Session = Session::new(quiet());
        assert!(session.feed(b'o').is_none());
        assert!(session.feed(b'k').is_none());
        let record = session.feed(b'\n').unwrap();
        assert_eq!(record.line(), b"ok");
    }

    #[test]
    fn test_reply_overflow_propagates() {
        let session: Session = Session::new(ConsoleConfig::default());
        let mut out = ReplyBuffer::<4>::new();
        let record = termite_parser::DefaultRecord::from_bytes(b"status");
        assert!(session.handle_line(record, &mut out).is_err());
    }
}
