use crate::pipeline::NetworkBuild;
use std::io::{self, Write};

/// How many artists per genre are previewed in the report.
const ARTIST_PREVIEW: usize = 3;

pub fn write_report<W: Write>(out: &mut W, build: &NetworkBuild) -> io::Result<()> {
    writeln!(out, "Top genres:")?;
    for genre in build.selection.genres.iter() {
        writeln!(out, "  {}: {} songs", genre.name, genre.songs)?;
    }

    writeln!(out, "\nTop artists per genre:")?;
    for genre in build.selection.genres.iter() {
        let preview: Vec<&str> = genre
            .artists
            .iter()
            .take(ARTIST_PREVIEW)
            .map(|a| a.name.as_str())
            .collect();
        writeln!(out, "  {}: {}...", genre.name, preview.join(", "))?;
    }

    let network = &build.network;
    writeln!(out, "\nNetwork summary:")?;
    writeln!(
        out,
        "  Nodes: {} ({} genres + {} artists)",
        network.nodes.len(),
        network.get_genres_count(),
        network.get_artists_count()
    )?;
    writeln!(out, "  Links: {}", network.get_links_count())?;
    Ok(())
}
