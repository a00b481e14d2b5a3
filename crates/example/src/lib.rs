//! Example crate demonstrating `#[copyable]`.
//!
//! `SettingsProtocol` expands into `Settings` and `MutableSettings`.

use zonecopy::{Object, copyable, foreign};

/// Display settings shared between the immutable and mutable variants.
#[copyable]
#[foreign]
pub trait SettingsProtocol: Object {
    fn count(&self) -> i64;
    fn label(&self) -> String;
    fn enabled(&self) -> bool;
}

/// One line per property, read through the shared interface.
pub fn describe(settings: &dyn SettingsProtocol) -> String {
    format!(
        "count={} label={} enabled={}",
        settings.count(),
        settings.label(),
        settings.enabled()
    )
}
