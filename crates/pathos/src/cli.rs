//! Command-line surface.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::app::editor::{Action, Editor, EditorOptions, Outcome};
use crate::app::export::{ExportOptions, Exporter};
use crate::app::store::PathStore;
use crate::infra::config::{Config, SeedSource};
use crate::infra::store::{EnvStore, FileStore};
use crate::ui::app::UiApp;
use crate::ui::keymap::KeyMap;

/// Pathos - edit the directories of a PATH-like variable
#[derive(Debug, Parser)]
#[command(name = "pathos")]
#[command(version)]
#[command(about = "Interactive editor for PATH-like directory lists", long_about = None)]
pub struct Cli {
    /// Where the initial entries come from
    #[arg(long, value_enum, global = true)]
    pub seed: Option<SeedSource>,

    /// Store file used with `--seed file`
    #[arg(long, global = true)]
    pub store_file: Option<PathBuf>,

    /// Shell file the export line is written to
    #[arg(long, global = true)]
    pub export_file: Option<PathBuf>,

    /// Log file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the interactive editor (default)
    Tui,

    /// Write the export file and exit
    Export,

    /// Print every entry with its classification
    List,
}

impl Cli {
    /// Command-line flags are the last configuration layer.
    fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.defaults.set_seed(seed);
        }
        if let Some(path) = &self.store_file {
            config.store.set_file(path.display().to_string());
        }
        if let Some(path) = &self.export_file {
            config.export.set_file(path.display().to_string());
        }
    }
}

/// Load configuration, seed an editor, and run the selected command.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("failed to load configuration")?;
    cli.apply(&mut config);

    let editor = build_editor(&config)?;
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let mut app = UiApp::new(editor, KeyMap::from_config(&config.keybindings));
            app.run()?;
            if let Some(choice) = app.editor().choice() {
                println!("{choice}");
            }
        }
        Commands::Export => {
            let mut editor = editor;
            let Outcome::Exported(result) = editor.apply(Action::RequestExport)? else {
                bail!("export did not run");
            };
            println!(
                "wrote {} bytes to {}",
                result.bytes_written,
                result.path.display()
            );
        }
        Commands::List => {
            for row in editor.rows() {
                let tag = row.classification.tag();
                if tag.is_empty() {
                    println!("{}", row.text);
                } else {
                    println!("{} {tag}", row.text);
                }
            }
        }
    }
    Ok(())
}

/// Seed an [`Editor`] from the configured store.
pub fn build_editor(config: &Config) -> Result<Editor> {
    let env_store = EnvStore::new(config.store.variable());
    let (entries, store): (Vec<String>, Box<dyn PathStore>) = match config.defaults.seed() {
        SeedSource::Env => {
            let entries = env_store.load()?;
            (entries, Box::new(env_store))
        }
        SeedSource::File => {
            let file = FileStore::new(config.store.file());
            let entries = file
                .load_or_init(&env_store)
                .with_context(|| format!("failed to seed from {}", file.path().display()))?;
            (entries, Box::new(file))
        }
    };

    let mut autosave = config.defaults.autosave();
    if autosave && config.defaults.seed() == SeedSource::Env {
        warn!("autosave needs `seed = \"file\"`; the environment store is read-only");
        autosave = false;
    }
    info!(seed = config.defaults.seed().as_str(), entries = entries.len(), "seeded path list");

    let options = EditorOptions {
        exporter: Exporter::new(ExportOptions::from_config(config)),
        page_size: config.defaults.page_size(),
        autosave,
    };
    Ok(Editor::new(entries, store, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_configuration() {
        let cli = Cli::parse_from([
            "pathos",
            "--seed",
            "file",
            "--store-file",
            "/tmp/paths.json",
            "--export-file",
            "out.sh",
            "list",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(cli.command, Some(Commands::List));
        assert_eq!(config.defaults.seed(), SeedSource::File);
        assert_eq!(config.store.file(), "/tmp/paths.json");
        assert_eq!(config.export.file(), "out.sh");
    }

    #[test]
    fn file_seed_initialises_store_and_keeps_autosave() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("paths.yaml");
        let mut config = Config::default();
        config.defaults.set_seed(SeedSource::File);
        config.defaults.set_autosave(true);
        config.store.set_file(store.display().to_string());

        let mut editor = build_editor(&config).unwrap();
        assert!(store.exists());
        editor.apply(Action::StartNewEntry).unwrap();
        editor
            .apply(Action::CommitEntry("/from/test".into()))
            .unwrap();

        let saved = FileStore::new(&store).load().unwrap();
        assert_eq!(saved.first().map(String::as_str), Some("/from/test"));
    }
}
