//! Build script for wingfold-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates controller.toml at compile time
//! - Generates the configuration constant included by the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use wingfold_core::config::ControllerConfig;

/// Layout of controller.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    controller: ControllerConfig,
}

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
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

/// Read, parse and validate controller.toml
fn load_config() -> ControllerConfig {
    println!("cargo:rerun-if-changed=controller.toml");

    let config_path = Path::new("controller.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: controller.toml not found!                               ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a controller.toml configuration file.     ║\n\
            ║  Please create one in the wingfold-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read controller.toml                           ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let file: ConfigFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid controller.toml                                  ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let config = file.controller;
    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid controller configuration                         ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  • {:<62} ║\n\
            ║  • {:<62} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format!("{:?}", e),
            describe(&config)
        );
    }

    println!("cargo:warning=controller.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of the timing values
fn describe(config: &ControllerConfig) -> String {
    format!(
        "timeout={}ms run={}ms poll={}ms settle={}us",
        config.power_timeout_ms,
        config.mirror_run_ms,
        config.poll_interval_ms,
        config.switch_settle_us
    )
}

/// Write the validated configuration as Rust source into OUT_DIR
fn generate_config(config: &ControllerConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = format!(
        "/// Configuration baked in from controller.toml\n\
         pub const CONTROLLER_CONFIG: ControllerConfig = ControllerConfig {{\n\
         \x20   power_timeout_ms: {},\n\
         \x20   mirror_run_ms: {},\n\
         \x20   chime_on_acc: {},\n\
         \x20   chime_output: OutputId::{:?},\n\
         \x20   invert_switch: {},\n\
         \x20   poll_interval_ms: {},\n\
         \x20   switch_settle_us: {},\n\
         }};\n",
        config.power_timeout_ms,
        config.mirror_run_ms,
        config.chime_on_acc,
        config.chime_output,
        config.invert_switch,
        config.poll_interval_ms,
        config.switch_settle_us,
    );

    fs::write(out_dir.join("controller_config.rs"), source).unwrap();
}
