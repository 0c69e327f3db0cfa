use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Project automation commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo nextest with default configuration
    Test {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        release: bool,
    },
    /// Run the insta snapshot tests and review pending changes
    Snapshots,
    /// Run clippy over every target, warnings denied
    Lint,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Test { profile, release } => {
            let mut args = vec!["nextest".to_string(), "run".to_string()];
            if let Some(profile) = profile {
                args.push("--profile".into());
                args.push(profile);
            }
            if release {
                args.push("--release".into());
            }
            cargo(&args)
        }
        Commands::Snapshots => cargo(["insta", "test", "--review"]),
        Commands::Lint => cargo([
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ]),
    }
}

fn cargo<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = Command::new("cargo");
    cmd.args(args);
    let description = format!("{cmd:?}");
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {description}"))?;
    if !status.success() {
        bail!("{description} failed");
    }
    Ok(())
}
