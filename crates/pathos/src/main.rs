use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = pathos::cli::Cli::parse();
    let _log_guard = pathos::init(cli.log_file.as_deref());
    pathos::cli::run(cli)
}
