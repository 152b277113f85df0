// SPDX-License-Identifier: MPL-2.0
//! The application's active translation catalog.

use super::catalog::Catalog;
use fluent_bundle::FluentArgs;

/// Holder of the active catalog that UI text is translated through.
///
/// Switching languages always removes the active catalog before installing
/// the next one, so an implementation never holds two catalogs at once.
pub trait TranslatorRegistry {
    /// Uninstalls and returns the active catalog, if any.
    fn remove_catalog(&mut self) -> Option<Catalog>;

    fn install_catalog(&mut self, catalog: Catalog);

    /// Translates `key` through the active catalog.
    fn translate(&self, key: &str, args: Option<&FluentArgs>) -> Option<String>;
}

/// Default registry holding at most one catalog.
#[derive(Debug, Default)]
pub struct Translator {
    active: Option<Catalog>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&Catalog> {
        self.active.as_ref()
    }
}

impl TranslatorRegistry for Translator {
    fn remove_catalog(&mut self) -> Option<Catalog> {
        self.active.take()
    }

    fn install_catalog(&mut self, catalog: Catalog) {
        self.active = Some(catalog);
    }

    fn translate(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        self.active.as_ref()?.format(key, args)
    }
}
