//! Build-time configuration
//!
//! `build.rs` validates controller.toml and generates the constant below.

use defmt::*;
use wingfold_core::config::ControllerConfig;
use wingfold_core::tone::OutputId;

include!(concat!(env!("OUT_DIR"), "/controller_config.rs"));

/// Configuration to run with
///
/// Falls back to the defaults if the baked-in values do not validate.
pub fn load() -> ControllerConfig {
    match CONTROLLER_CONFIG.validate() {
        Ok(()) => CONTROLLER_CONFIG,
        Err(e) => {
            error!("Invalid configuration ({:?}), using defaults", e);
            ControllerConfig::default()
        }
    }
}
