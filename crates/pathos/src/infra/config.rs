//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".pathos/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub export: Export,
    #[serde(default)]
    pub store: Store,
    #[serde(default)]
    pub keybindings: Keybindings,
}

/// Where the initial path list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum SeedSource {
    /// Split the store variable (normally `PATH`) on `:`.
    #[default]
    Env,
    /// Read the store file, creating it from the environment on first use.
    File,
}

impl SeedSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedSource::Env => "env",
            SeedSource::File => "file",
        }
    }
}

impl FromStr for SeedSource {
    type Err = SeedSourceParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "env" | "environment" => Ok(SeedSource::Env),
            "file" | "yaml" | "json" => Ok(SeedSource::File),
            other => Err(SeedSourceParseError::UnknownSource(other.to_string())),
        }
    }
}

/// Error returned when parsing a [`SeedSource`] fails.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SeedSourceParseError {
    #[error("unknown seed source '{0}'")]
    UnknownSource(String),
}

/// Session defaults. Unset fields fall back to built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Defaults {
    #[serde(default)]
    seed: Option<SeedSource>,
    #[serde(default)]
    page_size: Option<usize>,
    #[serde(default)]
    autosave: Option<bool>,
}

impl Defaults {
    fn default_page_size() -> usize {
        14
    }

    pub fn seed(&self) -> SeedSource {
        self.seed.unwrap_or_default()
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or_else(Self::default_page_size)
    }

    pub fn autosave(&self) -> bool {
        self.autosave.unwrap_or(false)
    }

    pub fn set_seed(&mut self, seed: SeedSource) {
        self.seed = Some(seed);
    }

    pub fn set_autosave(&mut self, autosave: bool) {
        self.autosave = Some(autosave);
    }
}

/// Unset fields fall back to built-in values, so an absent section never masks a lower layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Export {
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    variable: Option<String>,
}

impl Export {
    fn default_file() -> &'static str {
        "pathos.sh"
    }

    fn default_variable() -> &'static str {
        "PATH"
    }

    pub fn file(&self) -> String {
        self.file
            .clone()
            .unwrap_or_else(|| Self::default_file().to_owned())
    }

    pub fn variable(&self) -> String {
        self.variable
            .clone()
            .unwrap_or_else(|| Self::default_variable().to_owned())
    }

    pub fn set_file(&mut self, file: impl Into<String>) {
        self.file = Some(file.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Store {
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    variable: Option<String>,
}

impl Store {
    fn default_file() -> &'static str {
        "pathos.yaml"
    }

    fn default_variable() -> &'static str {
        "PATH"
    }

    pub fn file(&self) -> String {
        self.file
            .clone()
            .unwrap_or_else(|| Self::default_file().to_owned())
    }

    pub fn variable(&self) -> String {
        self.variable
            .clone()
            .unwrap_or_else(|| Self::default_variable().to_owned())
    }

    pub fn set_file(&mut self, file: impl Into<String>) {
        self.file = Some(file.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybindings {
    #[serde(default = "Keybindings::default_new")]
    pub new: String,
    #[serde(default = "Keybindings::default_delete")]
    pub delete: String,
    #[serde(default = "Keybindings::default_save")]
    pub save: String,
    #[serde(default = "Keybindings::default_export")]
    pub export: String,
    #[serde(default = "Keybindings::default_help")]
    pub help: String,
    #[serde(default = "Keybindings::default_quit")]
    pub quit: String,
}

impl Keybindings {
    fn default_new() -> String {
        "N".into()
    }

    fn default_delete() -> String {
        "D".into()
    }

    fn default_save() -> String {
        "S".into()
    }

    fn default_export() -> String {
        "E".into()
    }

    fn default_help() -> String {
        "?".into()
    }

    fn default_quit() -> String {
        "q".into()
    }
}

impl Default for Keybindings {
    fn default() -> Self {
        Self {
            new: Self::default_new(),
            delete: Self::default_delete(),
            save: Self::default_save(),
            export: Self::default_export(),
            help: Self::default_help(),
            quit: Self::default_quit(),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    export_file: Option<String>,
    store_file: Option<String>,
    seed: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            export_file: env::var("PATHOS_EXPORT_FILE").ok(),
            store_file: env::var("PATHOS_STORE_FILE").ok(),
            seed: env::var("PATHOS_SEED").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(export_file: &str, seed: &str) -> Self {
        Self {
            export_file: Some(export_file.to_owned()),
            store_file: None,
            seed: Some(seed.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            debug!(path = %global_path.display(), "loading global config");
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            debug!(path = %workspace_path.display(), "loading workspace config");
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        apply_env_overrides(merged, env_overrides)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            defaults: merge_defaults(self.defaults, other.defaults),
            export: merge_export(self.export, other.export),
            store: merge_store(self.store, other.store),
            keybindings: merge_keybindings(self.keybindings, other.keybindings),
        }
    }
}

fn merge_defaults(base: Defaults, overlay: Defaults) -> Defaults {
    Defaults {
        seed: overlay.seed.or(base.seed),
        page_size: overlay.page_size.or(base.page_size),
        autosave: overlay.autosave.or(base.autosave),
    }
}

fn merge_export(mut base: Export, overlay: Export) -> Export {
    if let Some(value) = overlay.file {
        base.file = Some(value);
    }
    if let Some(value) = overlay.variable {
        base.variable = Some(value);
    }
    base
}

fn merge_store(mut base: Store, overlay: Store) -> Store {
    if let Some(value) = overlay.file {
        base.file = Some(value);
    }
    if let Some(value) = overlay.variable {
        base.variable = Some(value);
    }
    base
}

fn merge_keybindings(base: Keybindings, overlay: Keybindings) -> Keybindings {
    Keybindings {
        new: choose_keybinding(base.new, overlay.new, Keybindings::default_new),
        delete: choose_keybinding(base.delete, overlay.delete, Keybindings::default_delete),
        save: choose_keybinding(base.save, overlay.save, Keybindings::default_save),
        export: choose_keybinding(base.export, overlay.export, Keybindings::default_export),
        help: choose_keybinding(base.help, overlay.help, Keybindings::default_help),
        quit: choose_keybinding(base.quit, overlay.quit, Keybindings::default_quit),
    }
}

fn choose_keybinding(base: String, overlay: String, default_fn: fn() -> String) -> String {
    if overlay != default_fn() {
        overlay
    } else {
        base
    }
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("pathos/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir().context("unable to determine working directory")?;
    Ok(Some(cwd.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Result<Config> {
    if let Some(file) = env.export_file {
        config.export.file = Some(file);
    }
    if let Some(file) = env.store_file {
        config.store.file = Some(file);
    }
    if let Some(seed) = env.seed {
        config.defaults.seed = Some(
            seed.parse()
                .with_context(|| "invalid PATHOS_SEED value".to_string())?,
        );
    }
    Ok(config)
}
