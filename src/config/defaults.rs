// SPDX-License-Identifier: MPL-2.0
//! Centralized names and fixed values shared across the crate.

// ==========================================================================
// Settings
// ==========================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "LangSwitch";

/// Settings file name inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LANGSWITCH_CONFIG_DIR";

// ==========================================================================
// Resource Layout
// ==========================================================================

/// Directory holding the per-language welcome messages.
pub const MESSAGES_DIR: &str = "messages";

/// Directory holding the per-language Fluent catalogs.
pub const TRANSLATIONS_DIR: &str = "translations";

/// Extension of catalog files.
pub const CATALOG_EXTENSION: &str = "ftl";

// ==========================================================================
// Fallback Text
// ==========================================================================

/// Message id used to localize [`WELCOME_FALLBACK_TEXT`].
pub const WELCOME_FALLBACK_KEY: &str = "welcome-load-failed";

/// Shown when the welcome message for the current language cannot be read.
pub const WELCOME_FALLBACK_TEXT: &str = "Failed to load welcome text :(";

/// Returns the resource path of the welcome message for a two-letter code.
pub fn welcome_resource_path(code: &str) -> String {
    format!("{MESSAGES_DIR}/Welcome_{code}.txt")
}

/// Returns the resource path of a catalog by name.
pub fn catalog_resource_path(catalog_name: &str) -> String {
    format!("{TRANSLATIONS_DIR}/{catalog_name}.{CATALOG_EXTENSION}")
}
