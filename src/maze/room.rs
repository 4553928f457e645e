//! Room: the façade's vertex type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// What a room means to the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomKind {
    Entrance,
    Treasure,
    #[default]
    Normal,
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoomKind::Entrance => "ENTRANCE",
            RoomKind::Treasure => "TREASURE",
            RoomKind::Normal => "NORMAL",
        })
    }
}

/// What happens when a player first enters a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    #[default]
    None,
    Enigma,
    /// Pulling it opens the locked passages around the room.
    Lever,
}

/// A room in the maze.
///
/// Identity is the `id` alone: two rooms with the same id are the same
/// vertex regardless of kind, interaction or coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub kind: RoomKind,
    #[serde(default)]
    pub interaction: Interaction,
    /// Display coordinates.
    pub x: i32,
    pub y: i32,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        kind: RoomKind,
        interaction: Interaction,
        x: i32,
        y: i32,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            interaction,
            x,
            y,
        }
    }

    /// A `Normal` room with no interaction at the origin.
    pub fn named(id: impl Into<String>) -> Self {
        Self::new(id, RoomKind::Normal, Interaction::None, 0, 0)
    }

    pub fn has_lever(&self) -> bool {
        self.interaction == Interaction::Lever
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Room {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Room {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{},{}]", self.id, self.kind, self.x, self.y)
    }
}
