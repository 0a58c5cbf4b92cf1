//! Embassy tasks

mod alert;
mod console;

pub use alert::alert_task;
pub use console::{console_task, Leds};
