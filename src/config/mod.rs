mod file_config;

pub use file_config::{FileConfig, NetworkConfig};

use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_INPUTS: [&str; 2] = [
    "static/data/songs_1960_en_top500.csv",
    "static/data/songs_2000_en_top500.csv",
];
pub const DEFAULT_NODES_OUT: &str = "static/data/artist-genre-nodes.json";
pub const DEFAULT_LINKS_OUT: &str = "static/data/artist-genre-links.json";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub inputs: Vec<PathBuf>,
    pub nodes_out: Option<PathBuf>,
    pub links_out: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inputs: Vec<PathBuf>,
    pub nodes_out: PathBuf,
    pub links_out: PathBuf,

    pub network: NetworkSettings,
}

/// Thresholds and scales used to shape the genre network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSettings {
    /// Genres with fewer songs than this are never selected.
    pub min_genre_songs: u64,
    pub max_genres: usize,
    pub max_artists_per_genre: usize,
    /// Artist views are divided by this before being turned into a node size.
    pub views_divisor: u64,
    pub artist_size_cap: u64,
    pub artist_size_floor: u64,
    /// Genre node size is the genre song count times this.
    pub genre_size_factor: u64,
    pub link_value: u32,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            min_genre_songs: 10,
            max_genres: 10,
            max_artists_per_genre: 6,
            views_divisor: 100_000,
            artist_size_cap: 50,
            artist_size_floor: 10,
            genre_size_factor: 2,
            link_value: 3,
        }
    }
}

impl NetworkSettings {
    fn resolve(file: NetworkConfig) -> Result<Self> {
        let defaults = NetworkSettings::default();
        let settings = NetworkSettings {
            min_genre_songs: file.min_genre_songs.unwrap_or(defaults.min_genre_songs),
            max_genres: file.max_genres.unwrap_or(defaults.max_genres),
            max_artists_per_genre: file
                .max_artists_per_genre
                .unwrap_or(defaults.max_artists_per_genre),
            views_divisor: file.views_divisor.unwrap_or(defaults.views_divisor),
            artist_size_cap: file.artist_size_cap.unwrap_or(defaults.artist_size_cap),
            artist_size_floor: file.artist_size_floor.unwrap_or(defaults.artist_size_floor),
            genre_size_factor: file.genre_size_factor.unwrap_or(defaults.genre_size_factor),
            link_value: file.link_value.unwrap_or(defaults.link_value),
        };

        if settings.views_divisor == 0 {
            bail!("views_divisor must be greater than zero");
        }
        if settings.max_genres == 0 {
            bail!("max_genres must be at least 1");
        }
        if settings.max_artists_per_genre == 0 {
            bail!("max_artists_per_genre must be at least 1");
        }
        Ok(settings)
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let inputs: Vec<PathBuf> = match file.inputs {
            Some(inputs) => inputs.into_iter().map(PathBuf::from).collect(),
            None if !cli.inputs.is_empty() => cli.inputs.clone(),
            None => DEFAULT_INPUTS.into_iter().map(PathBuf::from).collect(),
        };
        if inputs.is_empty() {
            bail!("At least one songs file must be given");
        }

        let nodes_out = file
            .nodes_out
            .map(PathBuf::from)
            .or_else(|| cli.nodes_out.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NODES_OUT));
        let links_out = file
            .links_out
            .map(PathBuf::from)
            .or_else(|| cli.links_out.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LINKS_OUT));
        if nodes_out == links_out {
            bail!(
                "Nodes and links cannot be written to the same file: {:?}",
                nodes_out
            );
        }

        let network = NetworkSettings::resolve(file.network.unwrap_or_default())?;

        Ok(Self {
            inputs,
            nodes_out,
            links_out,
            network,
        })
    }
}
