mod graph;
mod output;
mod select;
mod tally;

pub use graph::{artist_size, Link, Network, NetworkError, Node, NodeId, NodeKind, NodeSize};
pub use output::write_network;
pub use select::{RankedArtist, RankedGenre, Selection};
pub use tally::GenreTally;
