//! Build script for termite-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates console.toml and compiles it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use termite_core::ConsoleConfig;

/// Layout of console.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsoleFile {
    console: ConsoleConfig,
}

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate console.toml and write it out as Rust constants
fn generate_config() {
    println!("cargo:rerun-if-changed=console.toml");

    let config_path = Path::new("console.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!(
            "\n\
            ERROR: cannot read console.toml: {e}\n\
            The firmware requires a console.toml next to Cargo.toml.\n"
        ),
    };

    let file: ConsoleFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => panic!("\nERROR: invalid console.toml:\n{e}\n"),
    };
    let config = file.console;

    if let Err(e) = config.validate() {
        panic!("\nERROR: console.toml rejected: {e:?}\n");
    }

    let generated = format!(
        "/// Serial baud rate\n\
         pub const BAUDRATE: u32 = {};\n\
         /// Echo completed lines\n\
         pub const ECHO: bool = {};\n\
         /// Dump parsed fields\n\
         pub const DUMP_FIELDS: bool = {};\n\
         /// Prompt written before each line\n\
         pub const PROMPT: &str = {:?};\n",
        config.baudrate,
        config.echo,
        config.dump_fields,
        config.prompt.as_str(),
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("console_config.rs"), generated).unwrap();
}
