//! Writing the network files.
//!
//! Both documents are serialized and staged in temporary files next to their
//! destinations before either destination is replaced.

use super::Network;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

fn stage(path: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create a temporary file in {}", dir.display()))?;
    staged
        .write_all(contents)
        .and_then(|_| staged.as_file().sync_all())
        .with_context(|| format!("Failed to stage {}", path.display()))?;
    Ok(staged)
}

pub fn write_network(network: &Network, nodes_path: &Path, links_path: &Path) -> Result<()> {
    let nodes = serde_json::to_vec_pretty(&network.nodes).context("Failed to serialize nodes")?;
    let links = serde_json::to_vec_pretty(&network.links).context("Failed to serialize links")?;

    let staged_nodes = stage(nodes_path, &nodes)?;
    let staged_links = stage(links_path, &links)?;

    staged_nodes
        .persist(nodes_path)
        .with_context(|| format!("Failed to write {}", nodes_path.display()))?;
    staged_links
        .persist(links_path)
        .with_context(|| format!("Failed to write {}", links_path.display()))?;

    info!(
        "Wrote {} nodes to {} and {} links to {}",
        network.nodes.len(),
        nodes_path.display(),
        network.links.len(),
        links_path.display()
    );
    Ok(())
}
