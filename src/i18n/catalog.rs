// SPDX-License-Identifier: MPL-2.0
//! Fluent translation catalogs.

use super::resources::ResourceStore;
use crate::config::catalog_resource_path;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use fluent_syntax::{ast, parser};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A parsed catalog for one locale.
pub struct Catalog {
    name: String,
    message_ids: Vec<String>,
    bundle: FluentBundle<FluentResource>,
}

impl Catalog {
    /// Parses Fluent source text into a catalog named `name`.
    pub fn parse(locale: LanguageIdentifier, name: &str, source: String) -> Result<Self> {
        let message_ids = message_ids(&source);
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            Error::Catalog(format!(
                "{}: {} syntax error(s), first: {:?}",
                name,
                errors.len(),
                errors.first()
            ))
        })?;

        let mut bundle = FluentBundle::new(vec![locale]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            Error::Catalog(format!("{}: duplicate message(s): {:?}", name, errors))
        })?;

        Ok(Self {
            name: name.to_string(),
            message_ids,
            bundle,
        })
    }

    /// Loads `translations/<name>.ftl` from `resources`.
    pub fn load(
        resources: &dyn ResourceStore,
        locale: LanguageIdentifier,
        name: &str,
    ) -> Result<Self> {
        let path = catalog_resource_path(name);
        let bytes = resources
            .read(&path)
            .ok_or_else(|| Error::CatalogNotFound(path.clone()))?;
        let source = String::from_utf8(bytes.into_owned())
            .map_err(|err| Error::Catalog(format!("{}: {}", path, err)))?;
        Self::parse(locale, name, source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        // Bundles are always built with exactly one locale.
        &self.bundle.locales[0]
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    /// Ids of every message in the catalog, in source order. Terms are not included.
    pub fn message_ids(&self) -> &[String] {
        &self.message_ids
    }

    /// Formats a message without arguments.
    pub fn message(&self, key: &str) -> Option<String> {
        self.format(key, None)
    }

    /// Formats a message, returning `None` if it is missing or fails to resolve.
    pub fn format(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let message = self.bundle.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            log::debug!("Message {} in catalog {} has errors: {:?}", key, self.name, errors);
            None
        }
    }
}

fn message_ids(source: &str) -> Vec<String> {
    // Syntax errors are reported by `FluentResource::try_new`; the entries
    // that did parse are still listed here.
    let resource = match parser::parse(source) {
        Ok(resource) | Err((resource, _)) => resource,
    };
    resource
        .body
        .iter()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("name", &self.name)
            .field("locale", &self.locale().to_string())
            .field("messages", &self.message_ids.len())
            .finish()
    }
}
