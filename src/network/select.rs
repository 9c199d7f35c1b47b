//! Top-K selection of genres and of the artists within each genre.
//!
//! Both rankings are by a numeric key descending; equal keys are ordered by
//! name ascending so the outcome never depends on hash map iteration order.

use super::GenreTally;
use crate::config::NetworkSettings;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedArtist {
    pub name: String,
    pub views: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedGenre {
    pub name: String,
    pub songs: u64,
    /// Best artists of the genre, most viewed first.
    pub artists: Vec<RankedArtist>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected genres, most songs first.
    pub genres: Vec<RankedGenre>,
}

fn by_key_then_name(a: (&str, u64), b: (&str, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

fn top_genres<'a>(tally: &'a GenreTally, settings: &NetworkSettings) -> Vec<(&'a str, u64)> {
    let mut genres: Vec<(&str, u64)> = tally
        .genres()
        .filter(|(_, songs)| *songs >= settings.min_genre_songs)
        .collect();
    genres.sort_by(|a, b| by_key_then_name(*a, *b));
    genres.truncate(settings.max_genres);
    genres
}

fn top_artists(tally: &GenreTally, genre: &str, limit: usize) -> Vec<RankedArtist> {
    let mut artists: Vec<(&str, u64)> = tally
        .artists_with_genre(genre)
        .map(|artist| (artist, tally.artist_views(artist)))
        .collect();
    artists.sort_by(|a, b| by_key_then_name(*a, *b));
    artists
        .into_iter()
        .take(limit)
        .map(|(name, views)| RankedArtist {
            name: name.to_owned(),
            views,
        })
        .collect()
}

impl Selection {
    pub fn from_tally(tally: &GenreTally, settings: &NetworkSettings) -> Selection {
        let genres = top_genres(tally, settings)
            .into_iter()
            .map(|(name, songs)| RankedGenre {
                name: name.to_owned(),
                songs,
                artists: top_artists(tally, name, settings.max_artists_per_genre),
            })
            .collect();
        Selection { genres }
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}
