// SPDX-License-Identifier: MPL-2.0
//! Selection and runtime switching of the display language.
//!
//! A [`LanguageSelector`] owns the current language index, the resource store
//! catalogs and welcome messages are read from, and the translator registry
//! the UI translates through. Changing the language swaps the registry's
//! catalog and notifies every subscriber so visible strings can be refreshed
//! without restarting.
//!
//! Construction only detects the initial language: it neither installs a
//! catalog nor notifies anyone. Call [`LanguageSelector::set_language`] with
//! [`LanguageSelector::current_language`] once the UI is ready.

use super::catalog::Catalog;
use super::language::{self, Language, DEFAULT_LANGUAGE};
use super::locale::LocaleSource;
use super::resources::ResourceStore;
use super::translator::{Translator, TranslatorRegistry};
use crate::config::{welcome_resource_path, Config, WELCOME_FALLBACK_KEY, WELCOME_FALLBACK_TEXT};
use crate::error::Result;
use fluent_bundle::FluentArgs;
use unic_langid::LanguageIdentifier;

/// Delivered to subscribers after every language switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChanged {
    pub index: usize,
    pub locale: LanguageIdentifier,
    /// Value of [`LanguageSelector::generation`] after the switch.
    pub generation: u64,
}

/// Handle returned by [`LanguageSelector::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&LanguageChanged)>;

pub struct LanguageSelector<T: TranslatorRegistry = Translator> {
    language: usize,
    locale: LanguageIdentifier,
    generation: u64,
    resources: Box<dyn ResourceStore>,
    translator: T,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl LanguageSelector<Translator> {
    /// Creates a selector whose initial language follows the host locale.
    pub fn new(locale_source: &dyn LocaleSource, resources: impl ResourceStore + 'static) -> Self {
        Self::with_translator(Translator::new(), locale_source, resources)
    }
}

impl<T: TranslatorRegistry> LanguageSelector<T> {
    /// Like [`LanguageSelector::new`] with a caller supplied registry.
    pub fn with_translator(
        translator: T,
        locale_source: &dyn LocaleSource,
        resources: impl ResourceStore + 'static,
    ) -> Self {
        let index = detect_language(locale_source);
        Self::with_initial_language(index, translator, resources)
    }

    /// Creates a selector starting at `index`, skipping locale detection.
    ///
    /// Out-of-range indices start at English.
    pub fn with_initial_language(
        index: usize,
        translator: T,
        resources: impl ResourceStore + 'static,
    ) -> Self {
        let language = language::normalize_index(index);
        Self {
            language,
            locale: Language::by_index(language).locale_id(),
            generation: 0,
            resources: Box::new(resources),
            translator,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Index of the current language within [`Self::available_languages`].
    pub fn current_language(&self) -> usize {
        self.language
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Number of language switches so far. Cached translations older than
    /// this value are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn available_languages(&self) -> Vec<&'static str> {
        language::display_names()
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Returns the welcome message for the current language, or a localized
    /// fallback when it cannot be read.
    pub fn welcome_text(&self) -> String {
        let code = Language::by_index(self.language).welcome_code;
        match self.resources.read(&welcome_resource_path(code)) {
            Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            None => self
                .translator
                .translate(WELCOME_FALLBACK_KEY, None)
                .unwrap_or_else(|| WELCOME_FALLBACK_TEXT.to_string()),
        }
    }

    /// Translates `key`, returning the key itself when no translation exists.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with_args(key, None)
    }

    pub fn translate_with_args(&self, key: &str, args: Option<&FluentArgs>) -> String {
        self.translator
            .translate(key, args)
            .unwrap_or_else(|| key.to_string())
    }

    /// Switches to the language at `index`. Unknown indices select English.
    ///
    /// The index is updated and subscribers are notified even if the catalog
    /// fails to load; the error is returned so the caller can report it.
    pub fn set_language(&mut self, index: usize) -> Result<()> {
        self.language = language::normalize_index(index);
        if self.language != index {
            log::debug!(
                "Unknown language index {}, using {}",
                index,
                Language::by_index(DEFAULT_LANGUAGE).display_name
            );
        }
        let language = Language::by_index(self.language);
        self.set_language_with(language.locale_id(), language.catalog)
    }

    /// Replaces the active catalog with `translations/<catalog_name>.ftl` and
    /// notifies subscribers. Does not change [`Self::current_language`].
    pub fn set_language_with(
        &mut self,
        locale: LanguageIdentifier,
        catalog_name: &str,
    ) -> Result<()> {
        if let Some(previous) = self.translator.remove_catalog() {
            log::debug!("Removed catalog {}", previous.name());
        }

        let result = match Catalog::load(self.resources.as_ref(), locale.clone(), catalog_name) {
            Ok(catalog) => {
                log::info!(
                    "Switched language to {} ({}, {} messages)",
                    locale,
                    catalog_name,
                    catalog.message_ids().len()
                );
                self.translator.install_catalog(catalog);
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to load catalog {}: {}", catalog_name, err);
                Err(err)
            }
        };

        self.locale = locale;
        self.generation += 1;
        self.notify();
        result
    }

    /// Registers `listener` to run after every language switch.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&LanguageChanged) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let event = LanguageChanged {
            index: self.language,
            locale: self.locale.clone(),
            generation: self.generation,
        };
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

/// Maps the host locale to a language index. Unknown or missing locales
/// select English.
pub fn detect_language(locale_source: &dyn LocaleSource) -> usize {
    let raw = locale_source.locale();
    let index = raw
        .as_deref()
        .and_then(language::parse_locale)
        .and_then(|locale| language::index_for_locale(&locale))
        .unwrap_or(DEFAULT_LANGUAGE);
    log::debug!("Host locale {:?} maps to language {}", raw, index);
    index
}

/// Picks the starting language: CLI value, then the config file, then the
/// host locale. Values that name no supported language are skipped.
pub fn resolve_initial_language(
    cli_lang: Option<&str>,
    config: &Config,
    locale_source: &dyn LocaleSource,
) -> usize {
    // 1. Check CLI args
    if let Some(index) = cli_lang.and_then(language::index_for_value) {
        return index;
    }

    // 2. Check config file
    if let Some(index) = config
        .general
        .language
        .as_deref()
        .and_then(language::index_for_value)
    {
        return index;
    }

    // 3. Check OS locale
    detect_language(locale_source)
}
