// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module selects the display language and switches it at runtime using
//! Fluent catalogs.
//!
//! # Features
//!
//! - Automatic language detection from CLI, config, or system settings
//! - Catalogs and welcome messages embedded in the binary or read from disk
//! - Runtime language switching with change notifications
//! - Fallback to English for unknown locales and indices

pub mod catalog;
pub mod language;
pub mod locale;
pub mod resources;
pub mod selector;
pub mod translator;

pub use catalog::Catalog;
pub use language::{Language, LANGUAGES};
pub use locale::{FixedLocale, LocaleSource, SystemLocale};
pub use resources::{DirectoryResources, EmbeddedResources, MemoryResources, ResourceStore};
pub use selector::{
    detect_language, resolve_initial_language, LanguageChanged, LanguageSelector, SubscriptionId,
};
pub use translator::{Translator, TranslatorRegistry};

/// Message ids every bundled catalog defines.
pub const MESSAGE_IDS: &[&str] = &[
    "welcome-load-failed",
    "language-label",
    "language-changed",
    "language-list-header",
    "catalog-load-failed",
];
