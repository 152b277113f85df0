// SPDX-License-Identifier: MPL-2.0
//! The fixed table of supported languages.
//!
//! Both OS locale detection and explicit selection go through [`LANGUAGES`],
//! so adding a language means adding one row here plus its resources.

use unic_langid::LanguageIdentifier;

/// One supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Name shown in language pickers, written in the language itself.
    pub display_name: &'static str,
    /// Locale tag applied when the language is selected.
    pub locale: &'static str,
    /// Catalog file stem under `translations/`.
    pub catalog: &'static str,
    /// Two-letter code used in the welcome message file name.
    pub welcome_code: &'static str,
}

/// Index of the language every unknown value falls back to.
pub const DEFAULT_LANGUAGE: usize = 0;

pub const LANGUAGES: &[Language] = &[
    Language {
        display_name: "English",
        locale: "en",
        catalog: "en",
        welcome_code: "EN",
    },
    Language {
        display_name: "Español",
        locale: "es",
        catalog: "es",
        welcome_code: "ES",
    },
];

impl Language {
    /// Looks up a language by index, coercing out-of-range values to English.
    pub fn by_index(index: usize) -> &'static Language {
        &LANGUAGES[normalize_index(index)]
    }

    pub fn locale_id(&self) -> LanguageIdentifier {
        // Table entries are plain language subtags and always parse.
        self.locale.parse().unwrap_or_default()
    }
}

/// Returns `index` if it names a supported language, otherwise [`DEFAULT_LANGUAGE`].
pub fn normalize_index(index: usize) -> usize {
    if index < LANGUAGES.len() {
        index
    } else {
        DEFAULT_LANGUAGE
    }
}

/// Display names of all supported languages, in index order.
pub fn display_names() -> Vec<&'static str> {
    LANGUAGES.iter().map(|language| language.display_name).collect()
}

/// Finds the language whose primary subtag matches `locale`.
pub fn index_for_locale(locale: &LanguageIdentifier) -> Option<usize> {
    LANGUAGES
        .iter()
        .position(|language| language.locale_id().language == locale.language)
}

/// Parses an OS or user supplied locale string.
///
/// Accepts BCP 47 tags (`es-MX`) as well as POSIX forms (`es_MX.UTF-8`,
/// `es_ES@euro`).
pub fn parse_locale(raw: &str) -> Option<LanguageIdentifier> {
    let tag = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('_', "-");
    if tag.is_empty() {
        return None;
    }
    tag.parse().ok()
}

/// Resolves a user supplied language value: either an index or a locale tag.
///
/// Returns `None` when the value names no supported language.
pub fn index_for_value(value: &str) -> Option<usize> {
    let value = value.trim();
    if let Ok(index) = value.parse::<usize>() {
        return (index < LANGUAGES.len()).then_some(index);
    }
    parse_locale(value).and_then(|locale| index_for_locale(&locale))
}
