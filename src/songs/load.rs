//! Songs csv loading.

use super::record::{SongRecord, SongRow};
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not open songs file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed row in {}: {source}", .path.display())]
    Row {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid views value {value:?} at line {line} of {}", .path.display())]
    InvalidViews {
        path: PathBuf,
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows consumed, header excluded.
    pub rows_read: usize,
    /// Rows dropped because the artist or the genre was blank.
    pub rows_skipped: usize,
}

impl LoadStats {
    pub fn rows_kept(&self) -> usize {
        self.rows_read - self.rows_skipped
    }
}

/// The valid songs of a single source, in file order.
#[derive(Debug, Default)]
pub struct LoadedSongs {
    pub records: Vec<SongRecord>,
    pub stats: LoadStats,
}

pub fn load_songs(path: &Path) -> Result<LoadedSongs, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?;
    let loaded = collect_songs(reader, path)?;
    info!(
        "Loaded {}: {} rows, {} kept, {} skipped",
        path.display(),
        loaded.stats.rows_read,
        loaded.stats.rows_kept(),
        loaded.stats.rows_skipped
    );
    Ok(loaded)
}

/// Reads songs from any reader, `source` is only used to label errors.
pub fn read_songs<R: io::Read>(input: R, source: &Path) -> Result<LoadedSongs, LoadError> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    collect_songs(reader, source)
}

fn collect_songs<R: io::Read>(
    mut reader: csv::Reader<R>,
    path: &Path,
) -> Result<LoadedSongs, LoadError> {
    let row_error = |source: csv::Error| LoadError::Row {
        path: path.to_owned(),
        source,
    };

    let headers = reader.headers().map_err(row_error)?.clone();
    let mut loaded = LoadedSongs::default();
    let mut raw = csv::StringRecord::new();

    while reader.read_record(&mut raw).map_err(row_error)? {
        let line = raw.position().map(|p| p.line()).unwrap_or_default();
        let row: SongRow = raw.deserialize(Some(&headers)).map_err(row_error)?;
        loaded.stats.rows_read += 1;

        let song = row
            .into_record()
            .map_err(|(value, source)| LoadError::InvalidViews {
                path: path.to_owned(),
                line,
                value,
                source,
            })?;

        if song.is_valid() {
            loaded.records.push(song);
        } else {
            debug!("Skipping line {line} of {}: blank artist or genre", path.display());
            loaded.stats.rows_skipped += 1;
        }
    }

    Ok(loaded)
}
