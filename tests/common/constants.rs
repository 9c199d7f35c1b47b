// Column layout used by the fixtures, `views` is optional and `title` is ignored.
pub const SONGS_HEADER: &str = "title,artist,tag,views";
pub const SONGS_HEADER_NO_VIEWS: &str = "title,artist,tag";

pub const NODES_FILE: &str = "artist-genre-nodes.json";
pub const LINKS_FILE: &str = "artist-genre-links.json";

pub const GENRE_GROUP: u64 = 1;
pub const ARTIST_GROUP: u64 = 2;
