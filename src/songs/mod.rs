mod load;
mod record;

pub use load::{load_songs, read_songs, LoadError, LoadStats, LoadedSongs};
pub use record::SongRecord;
