// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::FluentArgs;
use langswitch::config::{self, paths, Config, CONFIG_FILE};
use langswitch::i18n::{
    language, resolve_initial_language, DirectoryResources, EmbeddedResources, LanguageSelector,
    ResourceStore, SystemLocale, Translator,
};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Usage: langswitch [OPTIONS]

Options:
  --lang <INDEX|TAG>    Language to use (e.g. 1, es, es-MX)
  --list                Print the available languages and exit
  --resources <DIR>     Read messages and catalogs from DIR
  --config-dir <DIR>    Settings directory
  --save                Store --lang in the settings file
  -h, --help            Print this help
";

struct Flags {
    lang: Option<String>,
    list: bool,
    resources: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    save: bool,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        list: args.contains("--list"),
        resources: args.opt_value_from_str("--resources")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        save: args.contains("--save"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {:?}", remaining);
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let config_path = paths::get_app_config_dir_with_override(flags.config_dir.clone())
        .map(|dir| dir.join(CONFIG_FILE));
    let mut config = match &config_path {
        Some(path) if path.exists() => match config::load_from_path(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                Config::default()
            }
        },
        _ => Config::default(),
    };

    let resources: Box<dyn ResourceStore> = match flags
        .resources
        .clone()
        .or_else(|| config.resources.directory.clone())
    {
        Some(dir) => Box::new(DirectoryResources::new(dir)),
        None => Box::new(EmbeddedResources),
    };

    if let Some(lang) = flags.lang.as_deref() {
        if language::index_for_value(lang).is_none() {
            eprintln!("Unsupported language \"{lang}\", ignoring --lang");
        }
    }

    let initial = resolve_initial_language(flags.lang.as_deref(), &config, &SystemLocale);
    let mut selector =
        LanguageSelector::with_initial_language(initial, Translator::new(), resources);
    let mut status = ExitCode::SUCCESS;
    if let Err(err) = selector.set_language(selector.current_language()) {
        let mut args = FluentArgs::new();
        args.set("error", err.to_string());
        eprintln!("{}", selector.translate_with_args("catalog-load-failed", Some(&args)));
        status = ExitCode::FAILURE;
    }

    if flags.list {
        println!("{}", selector.translate("language-list-header"));
        for (index, name) in selector.available_languages().iter().enumerate() {
            let marker = if index == selector.current_language() { "*" } else { " " };
            println!("{marker} {index}: {name}");
        }
        return status;
    }

    let name = selector.available_languages()[selector.current_language()];
    println!("{}: {}", selector.translate("language-label"), name);
    println!();
    println!("{}", selector.welcome_text());

    if flags.save {
        match (&flags.lang, &config_path) {
            (Some(lang), Some(path)) => match config.set_language(lang) {
                Ok(index) => match config::save_to_path(&config, path) {
                    Ok(()) => {
                        let mut args = FluentArgs::new();
                        args.set("language", selector.available_languages()[index]);
                        println!();
                        println!(
                            "{}",
                            selector.translate_with_args("language-changed", Some(&args))
                        );
                    }
                    Err(err) => {
                        eprintln!("{err}");
                        status = ExitCode::FAILURE;
                    }
                },
                Err(err) => {
                    log::warn!("Not saving --lang: {}", err);
                    eprintln!("{err}");
                    status = ExitCode::FAILURE;
                }
            },
            (None, _) => eprintln!("--save requires --lang"),
            (_, None) => eprintln!("No settings directory available"),
        }
    }

    status
}
