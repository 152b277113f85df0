// SPDX-License-Identifier: MPL-2.0
//! Host locale queries.

/// Source of the host's configured UI locale.
pub trait LocaleSource {
    /// Returns the raw locale string (`"es-ES"`, `"en_US.UTF-8"`, ...), if any.
    fn locale(&self) -> Option<String>;
}

/// Reads the operating system locale through `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A locale fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocale {
    fn locale(&self) -> Option<String> {
        self.0.clone()
    }
}
