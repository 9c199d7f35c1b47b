use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pezzottify_genre_network::config::{AppConfig, CliConfig, FileConfig};
use pezzottify_genre_network::report::write_report;
use pezzottify_genre_network::{build_network, write_network};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(name = "genre-network")]
#[command(about = "Build the artist/genre network files out of songs csv files")]
struct CliArgs {
    /// Songs csv files with at least `artist` and `tag` columns. Defaults to the 1960 and 2000 top 500 dumps.
    #[clap(value_parser = parse_path)]
    pub inputs: Vec<PathBuf>,

    /// Where to write the nodes JSON array.
    #[clap(long, value_parser = parse_path)]
    pub nodes_out: Option<PathBuf>,

    /// Where to write the links JSON array.
    #[clap(long, value_parser = parse_path)]
    pub links_out: Option<PathBuf>,

    /// Path to a TOML config file, its values take precedence over CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Build the network and print the report without writing any file.
    #[clap(long)]
    pub check_only: bool,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let cli_config = CliConfig {
        inputs: cli_args.inputs,
        nodes_out: cli_args.nodes_out,
        links_out: cli_args.links_out,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let build = build_network(&config)?;
    write_report(&mut std::io::stdout().lock(), &build)?;

    if cli_args.check_only {
        println!("\nCheck only, no files written.");
        return Ok(());
    }

    write_network(&build.network, &config.nodes_out, &config.links_out)?;
    println!(
        "\nSaved network data files!\n  {}\n  {}",
        config.nodes_out.display(),
        config.links_out.display()
    );
    Ok(())
}
