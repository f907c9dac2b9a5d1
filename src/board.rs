//! Board State
//!
//! The two grids' collections, owned together so membership moves stay
//! disjoint. Transitions are pure: they return a new state that the view
//! stores in place of the old one.

use reactive_stores::Store;

use crate::models::{initial_grid_a, initial_grid_b, GridId, Item};
use crate::transfer::{decode_item, TransferError};

/// Both grids' items
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct BoardState {
    /// Grid A, position derived from index
    pub grid_a: Vec<Item>,
    /// Grid B, insertion order
    pub grid_b: Vec<Item>,
}

/// Result of applying a drop payload
#[derive(Debug)]
pub enum DropOutcome {
    /// The item changed grids
    Moved {
        next: BoardState,
        id: String,
        /// Grid the item left, None if it came from outside the board
        from: Option<GridId>,
    },
    /// Already in the target grid; nothing to do
    AlreadyPresent,
    /// Payload could not be decoded; the drop is ignored
    Rejected(TransferError),
}

impl BoardState {
    pub fn new(grid_a: Vec<Item>, grid_b: Vec<Item>) -> Self {
        Self { grid_a, grid_b }
    }

    /// Startup contents
    pub fn seeded() -> Self {
        Self::new(initial_grid_a(), initial_grid_b())
    }

    pub fn items(&self, grid: GridId) -> &[Item] {
        match grid {
            GridId::A => &self.grid_a,
            GridId::B => &self.grid_b,
        }
    }

    pub fn contains(&self, grid: GridId, id: &str) -> bool {
        self.items(grid).iter().any(|i| i.id == id)
    }

    /// Grid currently holding `id`
    pub fn locate(&self, id: &str) -> Option<GridId> {
        [GridId::A, GridId::B].into_iter().find(|g| self.contains(*g, id))
    }

    /// No id appears in both grids
    pub fn is_disjoint(&self) -> bool {
        self.grid_a.iter().all(|i| !self.contains(GridId::B, &i.id))
    }

    /// Move `item` into `target`, taking it out of the other grid.
    ///
    /// Returns `None` when `target` already holds the id.
    pub fn with_item_moved(&self, item: Item, target: GridId) -> Option<BoardState> {
        if self.contains(target, &item.id) {
            return None;
        }
        let source: Vec<Item> = self
            .items(target.other())
            .iter()
            .filter(|i| i.id != item.id)
            .cloned()
            .collect();
        let mut dest = self.items(target).to_vec();
        dest.push(item);

        Some(match target {
            GridId::A => BoardState::new(dest, source),
            GridId::B => BoardState::new(source, dest),
        })
    }

    /// Decode a transfer payload and move its item into `target`
    pub fn apply_drop(&self, payload: &str, target: GridId) -> DropOutcome {
        match decode_item(payload) {
            Ok(item) => {
                let id = item.id.clone();
                let from = self.locate(&id);
                match self.with_item_moved(item, target) {
                    Some(next) => DropOutcome::Moved { next, id, from },
                    None => DropOutcome::AlreadyPresent,
                }
            }
            Err(e) => DropOutcome::Rejected(e),
        }
    }
}
