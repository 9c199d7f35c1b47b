use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub inputs: Option<Vec<String>>,
    pub nodes_out: Option<String>,
    pub links_out: Option<String>,

    // Network shaping
    pub network: Option<NetworkConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    pub min_genre_songs: Option<u64>,
    pub max_genres: Option<usize>,
    pub max_artists_per_genre: Option<usize>,
    pub views_divisor: Option<u64>,
    pub artist_size_cap: Option<u64>,
    pub artist_size_floor: Option<u64>,
    pub genre_size_factor: Option<u64>,
    pub link_value: Option<u32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
