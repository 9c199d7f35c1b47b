use serde::Deserialize;
use std::num::ParseIntError;

/// A songs csv row as it appears on disk. Columns other than these are ignored.
#[derive(Debug, Deserialize)]
pub(super) struct SongRow {
    pub artist: String,
    pub tag: String,
    #[serde(default)]
    pub views: Option<String>,
}

impl SongRow {
    /// Trims the names and parses the views, returning the raw views text on failure.
    pub fn into_record(self) -> Result<SongRecord, (String, ParseIntError)> {
        let views = match self.views.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(raw) => raw.parse::<u64>().map_err(|err| (raw.to_owned(), err))?,
        };
        Ok(SongRecord {
            artist: self.artist.trim().to_owned(),
            genre: self.tag.trim().to_owned(),
            views,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongRecord {
    pub artist: String,
    pub genre: String,
    pub views: u64,
}

impl SongRecord {
    pub fn new(artist: impl Into<String>, genre: impl Into<String>, views: u64) -> SongRecord {
        SongRecord {
            artist: artist.into(),
            genre: genre.into(),
            views,
        }
    }

    /// A record only counts towards the network when both names are present.
    pub fn is_valid(&self) -> bool {
        !self.artist.is_empty() && !self.genre.is_empty()
    }
}
