//! Songs files in, genre network out.

use crate::config::AppConfig;
use crate::network::{GenreTally, Network, Selection};
use crate::songs::{load_songs, LoadStats};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub stats: LoadStats,
}

#[derive(Debug)]
pub struct NetworkBuild {
    pub sources: Vec<SourceSummary>,
    pub tally: GenreTally,
    pub selection: Selection,
    pub network: Network,
}

/// Loads every source into its own tally and merges them, in input order.
pub fn load_tally(inputs: &[PathBuf]) -> Result<(GenreTally, Vec<SourceSummary>)> {
    let mut tally = GenreTally::new();
    let mut sources = Vec::with_capacity(inputs.len());
    for path in inputs {
        let loaded =
            load_songs(path).with_context(|| format!("Failed to load songs from {:?}", path))?;
        sources.push(SourceSummary {
            path: path.clone(),
            stats: loaded.stats,
        });
        tally = tally.merge(loaded.records.into_iter().collect());
    }
    Ok((tally, sources))
}

pub fn build_network(config: &AppConfig) -> Result<NetworkBuild> {
    let (tally, sources) = load_tally(&config.inputs)?;
    info!(
        "Tallied {} songs: {} genres, {} artists",
        tally.get_songs_count(),
        tally.get_genres_count(),
        tally.get_artists_count()
    );

    let selection = Selection::from_tally(&tally, &config.network);
    info!("Selected {} genres", selection.genres.len());

    let network = Network::build(&selection, &config.network)?;

    Ok(NetworkBuild {
        sources,
        tally,
        selection,
        network,
    })
}
