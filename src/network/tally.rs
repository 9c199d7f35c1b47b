use crate::songs::SongRecord;
use std::collections::{HashMap, HashSet};

/// Running aggregation of songs: which genres each artist plays, how many
/// songs carry each genre and how many views each artist gathered.
///
/// Tallies built from different sources can be merged in any order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenreTally {
    artist_genres: HashMap<String, HashSet<String>>,
    genre_counts: HashMap<String, u64>,
    artist_views: HashMap<String, u64>,
}

impl GenreTally {
    pub fn new() -> GenreTally {
        GenreTally::default()
    }

    /// Records one song. Invalid songs (blank artist or genre) are ignored.
    pub fn add(&mut self, song: SongRecord) {
        if !song.is_valid() {
            return;
        }
        *self.genre_counts.entry(song.genre.clone()).or_default() += 1;
        let views = self.artist_views.entry(song.artist.clone()).or_default();
        *views = views.saturating_add(song.views);
        self.artist_genres
            .entry(song.artist)
            .or_default()
            .insert(song.genre);
    }

    pub fn merge(mut self, other: GenreTally) -> GenreTally {
        for (genre, count) in other.genre_counts {
            *self.genre_counts.entry(genre).or_default() += count;
        }
        for (artist, views) in other.artist_views {
            let total = self.artist_views.entry(artist).or_default();
            *total = total.saturating_add(views);
        }
        for (artist, genres) in other.artist_genres {
            self.artist_genres.entry(artist).or_default().extend(genres);
        }
        self
    }

    /// Number of songs tagged with `genre`, 0 if never seen.
    pub fn genre_count(&self, genre: &str) -> u64 {
        self.genre_counts.get(genre).copied().unwrap_or(0)
    }

    /// Cumulative views of `artist`, 0 if never seen.
    pub fn artist_views(&self, artist: &str) -> u64 {
        self.artist_views.get(artist).copied().unwrap_or(0)
    }

    pub fn artist_has_genre(&self, artist: &str, genre: &str) -> bool {
        self.artist_genres
            .get(artist)
            .is_some_and(|genres| genres.contains(genre))
    }

    pub fn genres(&self) -> impl Iterator<Item = (&str, u64)> {
        self.genre_counts
            .iter()
            .map(|(genre, count)| (genre.as_str(), *count))
    }

    /// Artists tagged at least once with `genre`, in no particular order.
    pub fn artists_with_genre<'a>(&'a self, genre: &'a str) -> impl Iterator<Item = &'a str> {
        self.artist_genres
            .iter()
            .filter(move |(_, genres)| genres.contains(genre))
            .map(|(artist, _)| artist.as_str())
    }

    pub fn get_genres_count(&self) -> usize {
        self.genre_counts.len()
    }

    pub fn get_artists_count(&self) -> usize {
        self.artist_genres.len()
    }

    /// Total number of songs that made it into the tally.
    pub fn get_songs_count(&self) -> u64 {
        self.genre_counts.values().sum()
    }
}

impl Extend<SongRecord> for GenreTally {
    fn extend<I: IntoIterator<Item = SongRecord>>(&mut self, songs: I) {
        for song in songs {
            self.add(song);
        }
    }
}

impl FromIterator<SongRecord> for GenreTally {
    fn from_iter<I: IntoIterator<Item = SongRecord>>(songs: I) -> GenreTally {
        let mut tally = GenreTally::new();
        tally.extend(songs);
        tally
    }
}
