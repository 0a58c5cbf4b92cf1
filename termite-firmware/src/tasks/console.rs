//! Console task
//!
//! Feeds received bytes to the line editor, answers each completed line and
//! carries out the commands.

use core::fmt::Write as _;

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};
use heapless::String;

use termite_core::session::INVALID_COMMAND;
use termite_core::{Command, ConsoleConfig, ReplyBuffer, Session};
use termite_hal::UartTx;

use crate::channels::ALERT;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Reply buffer size (echo + field dump + command reply for one line)
const REPLY_BUF_SIZE: usize = 512;

type Reply = ReplyBuffer<REPLY_BUF_SIZE>;

/// LEDs addressable with `set <target> <value>`
pub struct Leds {
    /// Target 1
    pub red: Output<'static>,
    /// Target 2
    pub green: Output<'static>,
}

impl Leds {
    fn get(&mut self, target: i32) -> Option<&mut Output<'static>> {
        match target {
            1 => Some(&mut self.red),
            2 => Some(&mut self.green),
            _ => None,
        }
    }
}

/// Console task - line editing, replies and command execution
#[embassy_executor::task]
pub async fn console_task(
    mut rx: BufferedUartRx,
    mut tx: BufferedUartTx,
    config: ConsoleConfig,
    mut leds: Leds,
) {
    info!("Console task started");

    let mut session: Session = Session::new(config);
    let mut alert = false;
    let mut buf = [0u8; RX_BUF_SIZE];
    let mut reply = Reply::new();

    if session.prompt(&mut reply).is_ok() {
        send(&mut tx, &mut reply).await;
    }

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("UART read error: {:?}", e);
                continue;
            }
        };
        trace!("RX: {} bytes", n);

        for &byte in &buf[..n] {
            let Some(record) = session.feed(byte) else {
                continue;
            };
            debug!("Line: {}", record);
            if record.is_overflow() {
                warn!("Line cut at {} chars", record.len());
            }

            match session.handle_line(record, &mut reply) {
                Ok(Some(command)) => {
                    info!("Command: {:?}", command);
                    if let Err(e) = execute(command, &mut leds, &mut alert, &mut reply) {
                        warn!("Reply dropped: {:?}", e);
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("Reply truncated: {:?}", e),
            }

            if let Err(e) = session.prompt(&mut reply) {
                warn!("Prompt dropped: {:?}", e);
            }
            send(&mut tx, &mut reply).await;
        }
    }
}

/// Carry out a validated command
fn execute(
    command: Command,
    leds: &mut Leds,
    alert: &mut bool,
    reply: &mut Reply,
) -> Result<(), termite_core::ReplyOverflow> {
    match command {
        Command::Set { target, value } => match leds.get(target) {
            Some(led) => {
                if value != 0 {
                    led.set_high();
                } else {
                    led.set_low();
                }
                Ok(())
            }
            None => {
                reply.write_str(INVALID_COMMAND)?;
                reply.write_byte(b'\n')
            }
        },
        Command::Alert { enabled } => {
            *alert = enabled;
            ALERT.signal(enabled);
            Ok(())
        }
        Command::Status => {
            let mut line: String<48> = String::new();
            let _ = write!(
                line,
                "red={} green={} alert={}",
                u8::from(leds.red.is_set_high()),
                u8::from(leds.green.is_set_high()),
                if *alert { "on" } else { "off" },
            );
            reply.write_str(&line)?;
            reply.write_byte(b'\n')
        }
        // Help text is written by the session
        Command::Help => Ok(()),
    }
}

/// Send and clear the collected reply
async fn send(tx: &mut BufferedUartTx, reply: &mut Reply) {
    if reply.is_empty() {
        return;
    }
    if let Err(e) = tx.write_all(reply.as_bytes()).await {
        warn!("UART write error: {:?}", e);
    }
    reply.clear();
}
