//! Frontend Models
//!
//! Draggable items and the identifiers of the two grids.

use serde::{Deserialize, Serialize};

/// A draggable card. `id` is unique across both grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub content: String,
}

impl Item {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Which grid a drop lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridId {
    A,
    B,
}

impl GridId {
    pub fn other(self) -> Self {
        match self {
            GridId::A => GridId::B,
            GridId::B => GridId::A,
        }
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridId::A => write!(f, "A"),
            GridId::B => write!(f, "B"),
        }
    }
}

/// Items Grid A starts with
pub fn initial_grid_a() -> Vec<Item> {
    (1..=2).map(|n| Item::new(format!("a{}", n), format!("A Item {}", n))).collect()
}

/// Items Grid B starts with
pub fn initial_grid_b() -> Vec<Item> {
    (1..=6).map(|n| Item::new(format!("b{}", n), format!("B Item {}", n))).collect()
}
