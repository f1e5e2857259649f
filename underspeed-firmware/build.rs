//! Build script for underspeed-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates relay.toml at compile time and bakes it in as a constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use underspeed_core::config::RelayConfig;

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

/// Validate relay.toml and emit `relay_config.rs` into OUT_DIR
fn generate_config() {
    // Re-run if relay.toml changes
    println!("cargo:rerun-if-changed=relay.toml");

    let config_path = Path::new("relay.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: relay.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a relay.toml configuration file.          ║\n\
            ║  Please create one in the underspeed-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read relay.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax and field types; missing fields take factory defaults
    let config: RelayConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid relay.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // Same checks the curves rely on at runtime
    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in relay.toml                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("relay_config.rs")).unwrap();
    f.write_all(render_config(&config).as_bytes()).unwrap();

    println!(
        "cargo:warning=relay.toml validated: delay {}..{} ticks, timeout {}/{}/{} ticks",
        config.calibration.min_delay_ticks,
        config.calibration.max_delay_ticks,
        config.calibration.min_target_ticks,
        config.calibration.mid_target_ticks,
        config.calibration.max_target_ticks,
    );
}

/// Render the validated configuration as a Rust constant
fn render_config(config: &RelayConfig) -> String {
    let cal = &config.calibration;
    format!(
        "/// Relay configuration generated from relay.toml\n\
         pub const RELAY_CONFIG: RelayConfig = RelayConfig {{\n\
         \x20   tick_period_us: {},\n\
         \x20   calibration: CalibrationBounds {{\n\
         \x20       min_delay_ticks: {},\n\
         \x20       max_delay_ticks: {},\n\
         \x20       min_target_ticks: {},\n\
         \x20       mid_target_ticks: {},\n\
         \x20       max_target_ticks: {},\n\
         \x20   }},\n\
         \x20   pulse: PulseThresholds {{\n\
         \x20       low_level: {:#04x},\n\
         \x20       high_level: {:#04x},\n\
         \x20   }},\n\
         }};\n",
        config.tick_period_us,
        cal.min_delay_ticks,
        cal.max_delay_ticks,
        cal.min_target_ticks,
        cal.mid_target_ticks,
        cal.max_target_ticks,
        config.pulse.low_level,
        config.pulse.high_level,
    )
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
