use super::Selection;
use crate::config::NetworkSettings;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("\"{0}\" is both a selected genre and a selected artist, node ids would collide")]
    NameCollision(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Genre,
    Artist,
}

impl NodeKind {
    /// Group number the visualization uses to style nodes.
    pub fn group(self) -> u8 {
        match self {
            NodeKind::Genre => 1,
            NodeKind::Artist => 2,
        }
    }
}

/// Nodes are told apart by kind and name, only the name is written out.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub kind: NodeKind,
    pub name: String,
}

/// Whole sizes serialize as JSON integers, scaled ones as floats.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeSize {
    Whole(u64),
    Scaled(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub size: NodeSize,
}

impl Node {
    fn genre(name: &str, songs: u64, settings: &NetworkSettings) -> Node {
        Node {
            id: NodeId {
                kind: NodeKind::Genre,
                name: name.to_owned(),
            },
            label: name.to_uppercase(),
            size: NodeSize::Whole(songs.saturating_mul(settings.genre_size_factor)),
        }
    }

    fn artist(name: &str, views: u64, settings: &NetworkSettings) -> Node {
        Node {
            id: NodeId {
                kind: NodeKind::Artist,
                name: name.to_owned(),
            },
            label: name.to_owned(),
            size: artist_size(views, settings),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.id.kind
    }

    pub fn group(&self) -> u8 {
        self.id.kind.group()
    }
}

#[derive(Serialize)]
struct NodeRecord<'a> {
    id: &'a str,
    label: &'a str,
    group: u8,
    size: NodeSize,
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeRecord {
            id: &self.id.name,
            label: &self.label,
            group: self.group(),
            size: self.size,
        }
        .serialize(serializer)
    }
}

/// An artist -> genre edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(rename = "source")]
    pub artist: String,
    #[serde(rename = "target")]
    pub genre: String,
    pub value: u32,
}

/// Scaled views plus the floor, or cap plus floor once the scaled views exceed the cap.
pub fn artist_size(views: u64, settings: &NetworkSettings) -> NodeSize {
    let scaled = views as f64 / settings.views_divisor as f64;
    if scaled > settings.artist_size_cap as f64 {
        NodeSize::Whole(settings.artist_size_cap + settings.artist_size_floor)
    } else {
        NodeSize::Scaled(scaled + settings.artist_size_floor as f64)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Network {
    /// Genre nodes first, then artist nodes in order of first appearance.
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Network {
    pub fn build(
        selection: &Selection,
        settings: &NetworkSettings,
    ) -> Result<Network, NetworkError> {
        let mut network = Network::default();

        let genre_names: HashSet<&str> =
            selection.genres.iter().map(|g| g.name.as_str()).collect();
        for genre in selection.genres.iter() {
            network
                .nodes
                .push(Node::genre(&genre.name, genre.songs, settings));
        }

        let mut artists_added: HashSet<&str> = HashSet::new();
        for genre in selection.genres.iter() {
            for artist in genre.artists.iter() {
                if artists_added.insert(artist.name.as_str()) {
                    if genre_names.contains(artist.name.as_str()) {
                        return Err(NetworkError::NameCollision(artist.name.clone()));
                    }
                    network
                        .nodes
                        .push(Node::artist(&artist.name, artist.views, settings));
                }
                network.links.push(Link {
                    artist: artist.name.clone(),
                    genre: genre.name.clone(),
                    value: settings.link_value,
                });
            }
        }

        Ok(network)
    }

    pub fn get_genres_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.kind() == NodeKind::Genre)
            .count()
    }

    pub fn get_artists_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.kind() == NodeKind::Artist)
            .count()
    }

    pub fn get_links_count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{RankedArtist, RankedGenre};
    use serde_json::json;

    fn genre(name: &str, songs: u64, artists: &[(&str, u64)]) -> RankedGenre {
        RankedGenre {
            name: name.to_owned(),
            songs,
            artists: artists
                .iter()
                .map(|(name, views)| RankedArtist {
                    name: name.to_string(),
                    views: *views,
                })
                .collect(),
        }
    }

    #[test]
    fn artist_size_is_scaled_floored_and_capped() {
        let settings = NetworkSettings::default();
        assert_eq!(artist_size(0, &settings), NodeSize::Scaled(10.0));
        assert_eq!(artist_size(500_000, &settings), NodeSize::Scaled(15.0));
        assert_eq!(artist_size(5_000_000, &settings), NodeSize::Scaled(60.0));
        assert_eq!(artist_size(5_500_000, &settings), NodeSize::Whole(60));
    }

    #[test]
    fn serializes_nodes_with_bare_ids() {
        let settings = NetworkSettings::default();
        let genre_node = Node::genre("hip hop", 12, &settings);
        let artist_node = Node::artist("Outkast", 250_000, &settings);

        assert_eq!(
            serde_json::to_value(&genre_node).unwrap(),
            json!({"id": "hip hop", "label": "HIP HOP", "group": 1, "size": 24})
        );
        assert_eq!(
            serde_json::to_value(&artist_node).unwrap(),
            json!({"id": "Outkast", "label": "Outkast", "group": 2, "size": 12.5})
        );
        assert_eq!(
            serde_json::to_string(&artist_node).unwrap(),
            r#"{"id":"Outkast","label":"Outkast","group":2,"size":12.5}"#
        );
    }

    #[test]
    fn serializes_links_as_source_and_target() {
        let link = Link {
            artist: "Outkast".to_owned(),
            genre: "hip hop".to_owned(),
            value: 3,
        };
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({"source": "Outkast", "target": "hip hop", "value": 3})
        );
    }

    #[test]
    fn shared_artist_gets_one_node_and_one_link_per_genre() {
        let selection = Selection {
            genres: vec![
                genre("rock", 20, &[("Y", 300), ("Z", 100)]),
                genre("pop", 15, &[("Y", 300)]),
            ],
        };
        let network = Network::build(&selection, &NetworkSettings::default()).unwrap();

        assert_eq!(network.get_genres_count(), 2);
        assert_eq!(network.get_artists_count(), 2);
        let ids: Vec<&str> = network.nodes.iter().map(|n| n.id.name.as_str()).collect();
        assert_eq!(ids, vec!["rock", "pop", "Y", "Z"]);

        let links: Vec<(&str, &str)> = network
            .links
            .iter()
            .map(|l| (l.artist.as_str(), l.genre.as_str()))
            .collect();
        assert_eq!(links, vec![("Y", "rock"), ("Z", "rock"), ("Y", "pop")]);
        assert!(network.links.iter().all(|l| l.value == 3));
    }

    #[test]
    fn genre_node_size_doubles_song_count() {
        let selection = Selection {
            genres: vec![genre("rock", 11, &[("X", 5_500_000)])],
        };
        let network = Network::build(&selection, &NetworkSettings::default()).unwrap();

        assert_eq!(network.nodes[0].size, NodeSize::Whole(22));
        assert_eq!(network.nodes[1].size, NodeSize::Whole(60));
        assert_eq!(
            network.links,
            vec![Link {
                artist: "X".to_owned(),
                genre: "rock".to_owned(),
                value: 3
            }]
        );
    }

    #[test]
    fn rejects_artist_named_like_a_genre() {
        let selection = Selection {
            genres: vec![
                genre("rock", 20, &[("Metal", 1)]),
                genre("Metal", 15, &[("Band", 1)]),
            ],
        };
        assert_eq!(
            Network::build(&selection, &NetworkSettings::default()),
            Err(NetworkError::NameCollision("Metal".to_owned()))
        );
    }

    #[test]
    fn empty_selection_builds_empty_network() {
        let network = Network::build(&Selection::default(), &NetworkSettings::default()).unwrap();
        assert!(network.nodes.is_empty());
        assert!(network.links.is_empty());
    }
}
