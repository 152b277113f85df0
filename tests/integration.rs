// SPDX-License-Identifier: MPL-2.0
use langswitch::config::{self, Config, GeneralConfig, ResourcesConfig, WELCOME_FALLBACK_TEXT};
use langswitch::i18n::{
    resolve_initial_language, Catalog, DirectoryResources, EmbeddedResources, FixedLocale,
    LanguageChanged, LanguageSelector, Translator, TranslatorRegistry,
};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let spanish_config = Config {
        general: GeneralConfig {
            language: Some("es".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&spanish_config, &temp_config_file_path)
        .expect("Failed to write config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load config from path");
    let host = FixedLocale::new("en-US");
    let initial = resolve_initial_language(None, &loaded, &host);
    let mut selector =
        LanguageSelector::with_initial_language(initial, Translator::new(), EmbeddedResources);
    selector
        .set_language(selector.current_language())
        .expect("embedded catalog loads");

    assert_eq!(selector.current_language(), 1);
    assert_eq!(selector.translate("language-label"), "Idioma");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_saved_language_is_resolved_on_next_start() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let host = FixedLocale::new("en-US");

    let mut config = Config::default();
    assert_eq!(config.set_language("es-AR"), Ok(1));
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(resolve_initial_language(None, &loaded, &host), 1);

    // Unsupported values are refused instead of being written and ignored later.
    let mut rejected = loaded.clone();
    assert!(rejected.set_language("fr").is_err());
    assert_eq!(rejected, loaded);
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("language = \"es\""));
    assert!(!content.contains("[resources]"));
}

#[test]
fn test_embedded_welcome_texts() {
    let mut selector = LanguageSelector::new(&FixedLocale::new("en"), EmbeddedResources);
    let english = selector.welcome_text();
    assert!(english.starts_with("Welcome!"));

    selector.set_language(1).expect("embedded catalog loads");
    let spanish = selector.welcome_text();
    assert!(spanish.starts_with("¡Bienvenido!"));
    assert_ne!(english, spanish);
}

#[test]
fn test_directory_resources_override_embedded_set() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::create_dir_all(dir.path().join("messages")).unwrap();
    fs::create_dir_all(dir.path().join("translations")).unwrap();
    fs::write(dir.path().join("messages/Welcome_EN.txt"), "Custom welcome").unwrap();
    fs::write(
        dir.path().join("translations/en.ftl"),
        "language-label = Display language\n",
    )
    .unwrap();

    let config = Config {
        resources: ResourcesConfig {
            directory: Some(dir.path().to_path_buf()),
        },
        ..Config::default()
    };
    let root = config.resources.directory.clone().unwrap();
    let mut selector =
        LanguageSelector::new(&FixedLocale::new("en-GB"), DirectoryResources::new(root));

    assert_eq!(selector.welcome_text(), "Custom welcome");
    selector.set_language(0).expect("catalog on disk loads");
    assert_eq!(selector.translate("language-label"), "Display language");

    // Spanish exists in neither place on disk.
    assert!(selector.set_language(1).is_err());
    assert_eq!(selector.welcome_text(), WELCOME_FALLBACK_TEXT);
}

/// Registry standing in for a GUI toolkit: it counts installs and keeps the
/// catalog so translated text can be checked.
#[derive(Default)]
struct ToolkitRegistry {
    installs: Rc<RefCell<Vec<String>>>,
    active: Option<Catalog>,
}

impl TranslatorRegistry for ToolkitRegistry {
    fn remove_catalog(&mut self) -> Option<Catalog> {
        self.active.take()
    }

    fn install_catalog(&mut self, catalog: Catalog) {
        assert!(self.active.is_none(), "two catalogs installed at once");
        self.installs.borrow_mut().push(catalog.locale().to_string());
        self.active = Some(catalog);
    }

    fn translate(&self, key: &str, args: Option<&fluent_bundle::FluentArgs>) -> Option<String> {
        self.active.as_ref()?.format(key, args)
    }
}

#[test]
fn test_ui_refreshes_through_notifications() {
    let installs = Rc::new(RefCell::new(Vec::new()));
    let registry = ToolkitRegistry {
        installs: Rc::clone(&installs),
        active: None,
    };
    let mut selector =
        LanguageSelector::with_translator(registry, &FixedLocale::new("fr-FR"), EmbeddedResources);
    assert_eq!(selector.current_language(), 0);

    let events: Rc<RefCell<Vec<LanguageChanged>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    selector.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    assert!(events.borrow().is_empty());

    for index in [1, 0, 3] {
        selector.set_language(index).expect("embedded catalog loads");
    }

    let indices: Vec<usize> = events.borrow().iter().map(|event| event.index).collect();
    assert_eq!(indices, vec![1, 0, 0]);
    assert_eq!(*installs.borrow(), vec!["es", "en", "en"]);
    assert_eq!(selector.generation(), 3);
}
