//! # Maze Façade
//!
//! Room/corridor vocabulary over a `Network<Room>`, plus the two derived
//! queries the game depends on.
//!
//! ## Adjacency is derived, not looked up
//!
//! `is_neighbor(a, b)` holds iff the shortest path from `a` to `b` has
//! exactly two rooms. When a direct corridor exists but a strictly cheaper
//! detour also exists (the usual case for a locked door beside an open
//! loop), Dijkstra returns the detour and `is_neighbor` reports `false`
//! even though `corridor_weight` shows the direct edge. Movement checks and
//! levers rely on this.
//!
//! Likewise `weight(a, b)` is the shortest-path weight. It equals the
//! corridor cost only for rooms that are neighbours in the above sense.

pub mod config;
pub mod room;

pub use config::MazeConfig;
pub use room::{Interaction, Room, RoomKind};

use tracing::debug;

use crate::collections::{ArrayUnorderedList, UnorderedList};
use crate::network::{Network, Path};
use crate::{Error, Result};

/// The maze map: rooms as vertices, corridors as weighted edges.
#[derive(Debug, Clone)]
pub struct MazeMap {
    graph: Network<Room>,
    rooms: ArrayUnorderedList<Room>,
    config: MazeConfig,
}

impl MazeMap {
    pub fn new() -> Self {
        Self::build(MazeConfig::default())
    }

    /// A map using custom weight conventions. Fails if `config` is invalid.
    pub fn with_config(config: MazeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: MazeConfig) -> Self {
        Self {
            graph: Network::with_config(config.network_config()),
            rooms: ArrayUnorderedList::new(),
            config,
        }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// The underlying network, for queries the façade does not wrap.
    pub fn network(&self) -> &Network<Room> {
        &self.graph
    }

    // ========================================================================
    // Building
    // ========================================================================

    /// Add `room`. A room whose id is already present is ignored and
    /// `false` is returned.
    pub fn add_room(&mut self, room: Room) -> bool {
        if !self.graph.add_vertex(room.clone()) {
            return false;
        }
        self.rooms.add_to_rear(room);
        true
    }

    /// Remove `room` together with every corridor touching it.
    pub fn remove_room(&mut self, room: &Room) -> Result<Room> {
        self.graph.remove_vertex(room)?;
        self.rooms.remove(room)
    }

    /// Connect two rooms, replacing any corridor already between them.
    pub fn add_corridor(&mut self, from: &Room, to: &Room, weight: f64) -> Result<()> {
        self.graph.add_edge(from, to, weight)
    }

    /// Connect two rooms through a locked door.
    pub fn add_locked_corridor(&mut self, from: &Room, to: &Room) -> Result<()> {
        self.graph.add_edge(from, to, self.config.locked_weight)
    }

    /// Unlock (or create) the corridor between two rooms by re-weighting
    /// it to the open weight.
    pub fn open_passage(&mut self, from: &Room, to: &Room) -> Result<()> {
        self.graph.add_edge(from, to, self.config.open_weight)?;
        debug!(from = %from.id, to = %to.id, "passage opened");
        Ok(())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Rooms in the order they were added.
    pub fn rooms(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Find a room by id, ignoring case.
    pub fn room(&self, id: &str) -> Option<&Room> {
        let wanted = id.to_lowercase();
        self.rooms.iter().find(|r| r.id.to_lowercase() == wanted)
    }

    pub fn rooms_of_kind(&self, kind: RoomKind) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(move |r| r.kind == kind)
    }

    /// The first treasure room added, if any.
    pub fn treasure_room(&self) -> Option<&Room> {
        self.rooms_of_kind(RoomKind::Treasure).next()
    }

    pub fn entrances(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms_of_kind(RoomKind::Entrance)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Cheapest route between two rooms; empty if there is none.
    pub fn shortest_path(&self, from: &Room, to: &Room) -> Path<Room> {
        self.graph.shortest_path(from, to)
    }

    /// The room to step into next on the way from `from` to `to`.
    pub fn next_hop(&self, from: &Room, to: &Room) -> Option<Room> {
        self.shortest_path(from, to).next_hop().cloned()
    }

    /// Shortest-path weight, used as the cost of stepping between
    /// neighbours. `UNREACHABLE` if no route exists.
    pub fn weight(&self, from: &Room, to: &Room) -> f64 {
        self.graph.shortest_path_weight(from, to)
    }

    /// The raw corridor weight, present whether or not the rooms count as
    /// neighbours.
    pub fn corridor_weight(&self, from: &Room, to: &Room) -> Option<f64> {
        self.graph.edge_weight(from, to)
    }

    /// Whether the cheapest route between two distinct rooms is a single
    /// step.
    pub fn is_neighbor(&self, a: &Room, b: &Room) -> bool {
        if a == b {
            return false;
        }
        self.shortest_path(a, b).len() == 2
    }

    /// Whether stepping from `from` to `to` costs more than the lock
    /// threshold. Unreachable pairs are not locked; they are not connected.
    pub fn is_locked(&self, from: &Room, to: &Room) -> bool {
        let weight = self.weight(from, to);
        weight.is_finite() && weight > self.config.lock_threshold
    }

    /// Every room that `is_neighbor(room, _)`, in insertion order.
    ///
    /// One Dijkstra run per room: O(V³) overall.
    pub fn neighbors(&self, room: &Room) -> ArrayUnorderedList<Room> {
        self.rooms
            .iter()
            .filter(|r| *r != room && self.is_neighbor(room, r))
            .cloned()
            .collect()
    }

    // ========================================================================
    // Levers
    // ========================================================================

    /// Pull the lever in `room`.
    ///
    /// Each neighbour is re-checked against the current graph just before
    /// its passage is opened, so a door that an earlier opening has already
    /// bypassed stays locked. Afterwards the treasure room, if it is a
    /// neighbour, is opened regardless of its weight. Returns how many
    /// corridors changed weight.
    pub fn unlock_adjacent(&mut self, room: &Room) -> Result<usize> {
        if !self.graph.contains_vertex(room) {
            return Err(Error::VertexNotFound(format!("{room:?}")));
        }

        let mut opened = 0;
        for neighbor in &self.neighbors(room) {
            if self.is_locked(room, neighbor) {
                self.open_passage(room, neighbor)?;
                opened += 1;
            }
        }

        if let Some(treasure) = self.treasure_room().cloned() {
            if self.is_neighbor(room, &treasure)
                && self.corridor_weight(room, &treasure) != Some(self.config.open_weight)
            {
                self.open_passage(room, &treasure)?;
                opened += 1;
            }
        }

        debug!(room = %room.id, opened, "lever pulled");
        Ok(opened)
    }
}

impl Default for MazeMap {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
