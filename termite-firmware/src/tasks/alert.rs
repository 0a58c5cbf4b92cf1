//! Alert indicator task
//!
//! Blinks the onboard LED while the alert is on.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use crate::channels::ALERT;

/// Blink half-period in milliseconds
const BLINK_INTERVAL_MS: u64 = 250;

/// Alert task - follows the ALERT signal
#[embassy_executor::task]
pub async fn alert_task(mut led: Output<'static>) {
    info!("Alert task started");

    let mut ticker = Ticker::every(Duration::from_millis(BLINK_INTERVAL_MS));
    let mut enabled = false;

    loop {
        if let Some(on) = ALERT.try_take() {
            debug!("Alert {}", if on { "on" } else { "off" });
            enabled = on;
            if !enabled {
                led.set_low();
            }
        }

        if enabled {
            led.toggle();
        }

        ticker.next().await;
    }
}
