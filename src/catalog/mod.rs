//! Built-in control definitions.
//!
//! Controls here are pure data over the engine: metadata plus checks wired
//! to the host paths from the settings. The registry they load into is the
//! init boundary; dropping it discards every control.

mod dns_resolution;

pub use dns_resolution::dns_resolution_control;

use crate::config::Settings;
use crate::control::ControlRegistry;
use crate::error::Result;

/// Load every built-in control into a fresh registry.
///
/// # Errors
/// Returns registration errors, e.g. a duplicate control id.
pub fn builtin_registry(settings: &Settings) -> Result<ControlRegistry> {
    let mut registry = ControlRegistry::new();
    registry.register(dns_resolution_control(settings))?;
    Ok(registry)
}
