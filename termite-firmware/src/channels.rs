//! Inter-task communication channels

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Alert indicator state requested by the console (true = blinking)
pub static ALERT: Signal<CriticalSectionRawMutex, bool> = Signal::new();
