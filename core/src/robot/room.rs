//! Room model
//!
//! A rectangular room of width x height integer tiles, a fixed obstacle
//! set sampled once at construction, and a monotonically growing cleaned
//! set. Obstacles and the derived empty-tile count are immutable after
//! construction; cleaning is an idempotent insert.
//!
//! # Invariant
//!
//! `cleaned` is always a subset of the empty (non-obstacle) tiles:
//! `clean_tile_at_position` refuses obstacle tiles, so no movement-policy
//! code path can mark one cleaned.

use crate::errors::ConfigError;
use crate::rng::RngManager;
use crate::robot::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A rectangular room containing obstacle tiles and cleanable tiles
///
/// # Example
/// ```
/// use mobility_simulator_core_rs::robot::{Position, Room};
/// use mobility_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(42);
/// let room = Room::generate(5, 5, 5, &mut rng).unwrap();
///
/// assert_eq!(room.num_tiles(), 25);
/// assert_eq!(room.num_empty_tiles(), 20);
/// assert!(room.is_position_in_room(Position::new(2.5, 2.5)));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Size along the x dimension
    width: usize,

    /// Size along the y dimension
    height: usize,

    /// Obstacle tiles, fixed at construction
    obstacles: HashSet<(i64, i64)>,

    /// Tiles cleaned so far; grows monotonically, never shrinks
    cleaned: HashSet<(i64, i64)>,
}

impl Room {
    /// Generate a room with `num_obstacles` obstacles sampled uniformly
    /// without replacement over the tile grid.
    ///
    /// # Errors
    ///
    /// - `ConfigError::EmptyRoom` when width or height is zero
    /// - `ConfigError::TooManyObstacles` when the obstacle count exceeds
    ///   the tile count
    pub fn generate(
        width: usize,
        height: usize,
        num_obstacles: usize,
        rng: &mut RngManager,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyRoom { width, height });
        }

        let tiles = width * height;
        if num_obstacles > tiles {
            return Err(ConfigError::TooManyObstacles {
                requested: num_obstacles,
                tiles,
            });
        }

        let obstacles = rng
            .sample_indices(tiles, num_obstacles)
            .into_iter()
            .map(|index| ((index / height) as i64, (index % height) as i64))
            .collect();

        Ok(Self {
            width,
            height,
            obstacles,
            cleaned: HashSet::new(),
        })
    }

    /// Create a room with an explicit obstacle layout (for deterministic
    /// scenarios). Obstacles outside the grid are rejected.
    ///
    /// # Errors
    ///
    /// - `ConfigError::EmptyRoom` when width or height is zero
    /// - `ConfigError::TooManyObstacles` when an obstacle lies outside
    ///   the grid (it would inflate the obstacle count past the tiles it
    ///   can occupy)
    pub fn with_obstacles(
        width: usize,
        height: usize,
        obstacles: HashSet<(i64, i64)>,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyRoom { width, height });
        }

        let tiles = width * height;
        let in_grid = |&(x, y): &(i64, i64)| {
            (0..width as i64).contains(&x) && (0..height as i64).contains(&y)
        };
        if obstacles.len() > tiles || !obstacles.iter().all(in_grid) {
            return Err(ConfigError::TooManyObstacles {
                requested: obstacles.len(),
                tiles,
            });
        }

        Ok(Self {
            width,
            height,
            obstacles,
            cleaned: HashSet::new(),
        })
    }

    /// Get room width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get room height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of tiles
    pub fn num_tiles(&self) -> usize {
        self.width * self.height
    }

    /// Number of non-obstacle tiles
    pub fn num_empty_tiles(&self) -> usize {
        self.num_tiles() - self.obstacles.len()
    }

    /// Number of tiles cleaned so far
    pub fn num_cleaned_tiles(&self) -> usize {
        self.cleaned.len()
    }

    /// Does the tile under `pos` hold an obstacle
    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos.tile())
    }

    /// Is `pos` inside the room: half-open [0, width) x [0, height)
    pub fn is_position_in_room(&self, pos: Position) -> bool {
        pos.x() >= 0.0
            && pos.x() < self.width as f64
            && pos.y() >= 0.0
            && pos.y() < self.height as f64
    }

    /// Mark the tile under `pos` cleaned. Idempotent; obstacle tiles are
    /// refused so `cleaned` stays a subset of the empty tiles.
    ///
    /// Returns true when the tile was newly cleaned.
    pub fn clean_tile_at_position(&mut self, pos: Position) -> bool {
        let tile = pos.tile();
        if self.obstacles.contains(&tile) {
            return false;
        }
        self.cleaned.insert(tile)
    }

    /// Has the tile (x, y) been cleaned
    pub fn is_tile_cleaned(&self, x: i64, y: i64) -> bool {
        self.cleaned.contains(&(x, y))
    }

    /// The obstacle set (for rendering)
    pub fn obstacles(&self) -> &HashSet<(i64, i64)> {
        &self.obstacles
    }

    /// The cleaned set (for rendering)
    pub fn cleaned_tiles(&self) -> &HashSet<(i64, i64)> {
        &self.cleaned
    }

    /// The robot's spawn tile: the center of the room (integer division)
    pub fn center(&self) -> (i64, i64) {
        ((self.width / 2) as i64, (self.height / 2) as i64)
    }

    /// A uniformly random non-obstacle tile
    ///
    /// # Panics
    /// Panics if the room is fully obstructed (no empty tiles).
    pub fn random_empty_tile(&self, rng: &mut RngManager) -> (i64, i64) {
        assert!(self.num_empty_tiles() > 0, "room has no empty tiles");

        let mut empty: Vec<(i64, i64)> = (0..self.width as i64)
            .flat_map(|x| (0..self.height as i64).map(move |y| (x, y)))
            .filter(|tile| !self.obstacles.contains(tile))
            .collect();
        empty.sort_unstable(); // iteration order independent of HashSet internals

        let index = rng.range(0, empty.len() as i64) as usize;
        empty[index]
    }
}
