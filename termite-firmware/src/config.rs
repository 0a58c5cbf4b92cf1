//! Console configuration
//!
//! Values come from console.toml, validated and turned into constants by
//! build.rs.

use defmt::*;

use termite_core::ConsoleConfig;

include!(concat!(env!("OUT_DIR"), "/console_config.rs"));

/// Build the runtime config from the generated constants
pub fn console_config() -> ConsoleConfig {
    let config = ConsoleConfig {
        baudrate: BAUDRATE,
        echo: ECHO,
        dump_fields: DUMP_FIELDS,
        ..ConsoleConfig::default()
    };

    match config.clone().with_prompt(PROMPT) {
        Ok(config) => config,
        Err(e) => {
            warn!("Prompt rejected ({:?}), running without one", e);
            config
        }
    }
}
