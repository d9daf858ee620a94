//! Layout configuration for fetchfmt.
//! A layout file lists modules in the order they are printed, each with a
//! key, a format string and the typed arguments the format refers to.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::args::{as_format_args, from_entries, ArgEntry, ArgValue};
use crate::constants::{CONFIG_FILES, DEFAULT_SEPARATOR};
use crate::error::{Error, Result};
use crate::format;
use crate::help::format_help;

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    modules: IndexMap<String, RawModule>,
    separator: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawModule {
    key: Option<String>,
    format: Option<String>,
    #[serde(default)]
    args: Vec<ArgEntry>,
    #[serde(default)]
    help: Vec<String>,
}

/// One entry of a layout file.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Label printed before the output, defaults to the module name
    pub key: Option<String>,
    /// Format string, see [`Module::format`] for the default
    pub format: Option<String>,
    pub args: Vec<ArgValue>,
    /// Descriptions of `{1}`, `{2}`, … for format help
    pub help: Vec<String>,
}

impl Module {
    /// The format string to render. Without an explicit one, every argument
    /// is printed in order, separated by spaces.
    pub fn format(&self) -> Cow<'_, str> {
        match &self.format {
            Some(format) => Cow::Borrowed(format),
            None => Cow::Owned(vec!["{}"; self.args.len().max(1)].join(" ")),
        }
    }

    pub fn key<'a>(&'a self, name: &'a str) -> &'a str {
        self.key.as_deref().unwrap_or(name)
    }

    /// Renders the module's format string against its arguments.
    pub fn render(&self) -> String {
        let args = as_format_args(&self.args);
        format::render(&self.format(), &args)
    }
}

/// A parsed layout file.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub modules: IndexMap<String, Module>,
    pub separator: String,
}

impl Config {
    /// Renders every module as `key + separator + output`, one per line.
    pub fn render(&self) -> String {
        self.modules
            .iter()
            .map(|(name, module)| {
                debug!("Rendering module '{}'", name);
                format!("{}{}{}", module.key(name), self.separator, module.render())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format help for every module, in declaration order. Like
    /// [`Config::render`], the result has no trailing newline.
    pub fn format_help(&self) -> String {
        let help = self
            .modules
            .iter()
            .map(|(name, module)| format_help(module.key(name), &module.format(), &module.help))
            .collect::<String>();
        help.trim_end_matches('\n').to_string()
    }
}

/// Finds the first supported configuration file inside `dir`.
pub fn find_config<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|file| dir.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Reads configuration content from a file, or from the first supported
/// configuration file when `path` is a directory.
///
/// # Errors
/// * `Error::ConfigError` if a directory holds no configuration file
/// * `Error::IoError` if the file cannot be read
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let config_path = if path.is_dir() {
        find_config(path).ok_or_else(|| {
            Error::ConfigError(format!(
                "No configuration file found in '{}' (tried: {})",
                path.display(),
                CONFIG_FILES.join(", ")
            ))
        })?
    } else {
        path.to_path_buf()
    };

    debug!("Loading configuration from {}", config_path.display());
    Ok(std::fs::read_to_string(&config_path)?)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content matches neither format or the schema
/// * `Error::ArgumentError` if a module argument does not fit its type
pub fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = match serde_json::from_str(content) {
        Ok(raw) => raw,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e)))?,
    };

    let mut modules = IndexMap::with_capacity(raw.modules.len());
    for (name, module) in raw.modules {
        let args = from_entries(module.args).map_err(|e| match e {
            Error::ArgumentError(message) => {
                Error::ArgumentError(format!("module '{}': {}", name, message))
            }
            other => other,
        })?;
        modules.insert(
            name,
            Module {
                key: module.key,
                format: module.format,
                args,
                help: module.help,
            },
        );
    }

    Ok(Config {
        modules,
        separator: raw
            .separator
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
    })
}

/// Loads and parses the configuration at `path`.
pub fn get_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = load_config(path)?;
    parse_config(&content)
}
