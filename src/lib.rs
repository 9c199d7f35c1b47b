//! Pezzottify Genre Network Library
//!
//! Builds the artist/genre network shown by the frontend out of songs csv dumps.
//! The library exposes the pipeline stages for testing and potential reuse.

pub mod config;
pub mod network;
pub mod pipeline;
pub mod report;
pub mod songs;

// Re-export commonly used types for convenience
pub use config::{AppConfig, CliConfig, FileConfig, NetworkSettings};
pub use network::{write_network, GenreTally, Network, Selection};
pub use pipeline::{build_network, NetworkBuild};
