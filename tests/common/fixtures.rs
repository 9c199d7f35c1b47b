use super::constants::*;
use anyhow::Result;
use pezzottify_genre_network::config::{AppConfig, CliConfig};
use pezzottify_genre_network::{build_network, write_network, NetworkBuild};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Builder for a songs csv file.
pub struct SongsFixture {
    with_views: bool,
    lines: Vec<String>,
}

impl SongsFixture {
    pub fn new() -> Self {
        SongsFixture {
            with_views: true,
            lines: vec![SONGS_HEADER.to_string()],
        }
    }

    pub fn without_views() -> Self {
        SongsFixture {
            with_views: false,
            lines: vec![SONGS_HEADER_NO_VIEWS.to_string()],
        }
    }

    pub fn song(self, artist: &str, genre: &str, views: u64) -> Self {
        self.songs(artist, genre, views, 1)
    }

    /// Appends `times` identical songs.
    pub fn songs(mut self, artist: &str, genre: &str, views: u64, times: usize) -> Self {
        for i in 0..times {
            let title = format!("song {} {}", self.lines.len(), i);
            let line = if self.with_views {
                format!("{title},{artist},{genre},{views}")
            } else {
                format!("{title},{artist},{genre}")
            };
            self.lines.push(line);
        }
        self
    }

    /// Appends a line verbatim.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn write(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut body = self.lines.join("\n");
        body.push('\n');
        std::fs::write(&path, body).unwrap();
        path
    }
}

pub struct PipelineRun {
    pub build: NetworkBuild,
    pub nodes_text: String,
    pub links_text: String,
    pub nodes: Vec<Value>,
    pub links: Vec<Value>,
}

impl PipelineRun {
    pub fn genre_nodes(&self) -> Vec<&Value> {
        self.nodes
            .iter()
            .filter(|n| n["group"] == GENRE_GROUP)
            .collect()
    }

    pub fn artist_nodes(&self) -> Vec<&Value> {
        self.nodes
            .iter()
            .filter(|n| n["group"] == ARTIST_GROUP)
            .collect()
    }

    pub fn node(&self, id: &str) -> Option<&Value> {
        self.nodes.iter().find(|n| n["id"] == id)
    }

    pub fn links_to(&self, genre: &str) -> Vec<&Value> {
        self.links.iter().filter(|l| l["target"] == genre).collect()
    }

    pub fn links_from(&self, artist: &str) -> Vec<&Value> {
        self.links.iter().filter(|l| l["source"] == artist).collect()
    }
}

/// Runs the whole pipeline on `inputs`, writing the network files into `out_dir`.
pub fn run_pipeline(inputs: &[PathBuf], out_dir: &Path) -> Result<PipelineRun> {
    let cli = CliConfig {
        inputs: inputs.to_vec(),
        nodes_out: Some(out_dir.join(NODES_FILE)),
        links_out: Some(out_dir.join(LINKS_FILE)),
    };
    let config = AppConfig::resolve(&cli, None)?;
    let build = build_network(&config)?;
    write_network(&build.network, &config.nodes_out, &config.links_out)?;

    let nodes_text = std::fs::read_to_string(&config.nodes_out)?;
    let links_text = std::fs::read_to_string(&config.links_out)?;
    let nodes = serde_json::from_str(&nodes_text)?;
    let links = serde_json::from_str(&links_text)?;
    Ok(PipelineRun {
        build,
        nodes_text,
        links_text,
        nodes,
        links,
    })
}
