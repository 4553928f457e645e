//! # labyrinth-graph: Weighted Room Network
//!
//! A small, self-contained graph engine for maze-style games: an undirected
//! adjacency-matrix network with Dijkstra shortest paths, built on top of its
//! own container primitives rather than the standard collections.
//!
//! ## Design Principles
//!
//! 1. **Containers first**: `ArrayUnorderedList`, `LinkedUnorderedList` and
//!    `LinkedQueue` share one contract (`UnorderedList`) and are interchangeable
//! 2. **One sentinel**: "no path" is always `UNREACHABLE` / an empty `Path`,
//!    never an error and never zero
//! 3. **Façade owns the vocabulary**: the network knows vertices and weights;
//!    only `MazeMap` knows about rooms, locks and levers
//!
//! ## Quick Start
//!
//! ```rust
//! use labyrinth_graph::{MazeMap, Room, RoomKind, Interaction};
//!
//! # fn example() -> labyrinth_graph::Result<()> {
//! let mut maze = MazeMap::new();
//! let hall = Room::new("Hall", RoomKind::Entrance, Interaction::None, 0, 0);
//! let vault = Room::new("Vault", RoomKind::Treasure, Interaction::None, 1, 0);
//! maze.add_room(hall.clone());
//! maze.add_room(vault.clone());
//! maze.add_locked_corridor(&hall, &vault)?;
//!
//! assert!(maze.is_locked(&hall, &vault));
//! maze.open_passage(&hall, &vault)?;
//! assert_eq!(maze.weight(&hall, &vault), 1.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Layers
//!
//! | Layer | Module | Description |
//! |-------|--------|-------------|
//! | Containers | `collections` | Array/linked lists and a FIFO queue |
//! | Network | `network` | Vertex registry, weight matrix, Dijkstra |
//! | Façade | `maze` | Rooms, corridors, locked doors, levers |

// ============================================================================
// Modules
// ============================================================================

pub mod collections;
pub mod network;
pub mod maze;

// ============================================================================
// Re-exports: Containers
// ============================================================================

pub use collections::{
    UnorderedList, ArrayUnorderedList, LinkedUnorderedList, LinkedQueue,
};

// ============================================================================
// Re-exports: Network
// ============================================================================

pub use network::{
    Network, NetworkConfig, Path, AdjacencyMatrix,
    MAX_WEIGHT, NO_EDGE, UNREACHABLE,
};

// ============================================================================
// Re-exports: Façade
// ============================================================================

pub use maze::{MazeMap, MazeConfig, Room, RoomKind, Interaction};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Empty collection: {0}")]
    EmptyCollection(&'static str),

    #[error("Element not found in {0}")]
    ElementNotFound(&'static str),

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Invalid edge weight {0}: weights must lie between 0 and 1e12")]
    InvalidWeight(f64),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
