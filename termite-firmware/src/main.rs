//! Termite - Serial Command Console Firmware
//!
//! Reads command lines from UART0, splits them into fields and drives a
//! pair of LEDs plus a blinking alert indicator.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Termite firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let console_config = config::console_config();
    let uart_settings = console_config.uart_config();

    // Console UART on GPIO0 (TX) / GPIO1 (RX)
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = uart_settings.baudrate;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", uart_settings.baudrate);

    // Target 1 = red (GPIO15), target 2 = green (GPIO14), alert = onboard LED (GPIO25)
    let leds = tasks::Leds {
        red: Output::new(p.PIN_15, Level::Low),
        green: Output::new(p.PIN_14, Level::Low),
    };
    let alert_led = Output::new(p.PIN_25, Level::Low);

    spawner
        .spawn(tasks::console_task(rx, tx, console_config, leds))
        .unwrap();
    spawner.spawn(tasks::alert_task(alert_led)).unwrap();

    info!("All tasks spawned");
}
