//! Board Context
//!
//! Drag handlers shared by both grids, provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::DragEvent;

use crate::board::{BoardState, BoardStateStoreFields, DropOutcome};
use crate::models::{GridId, Item};
use crate::transfer::{read_drop_payload, write_drag_payload};

pub type BoardStore = Store<BoardState>;

/// Board store plus the drag-and-drop handlers operating on it
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub store: BoardStore,
}

impl BoardContext {
    pub fn new(store: BoardStore) -> Self {
        Self { store }
    }

    /// Grid A items - reactive
    pub fn grid_a(&self) -> Vec<Item> {
        self.store.grid_a().get()
    }

    /// Grid B items - reactive
    pub fn grid_b(&self) -> Vec<Item> {
        self.store.grid_b().get()
    }

    /// Put `item` on the drag event. Leaves the board untouched.
    pub fn handle_external_drag_start(&self, ev: &DragEvent, item: &Item) {
        match write_drag_payload(ev, item) {
            Ok(()) => log::debug!(target: "dnd", "drag start: {}", item.id),
            Err(e) => log::warn!(target: "dnd", "drag start for {} not armed: {}", item.id, e),
        }
    }

    /// Move the dropped item into `target`. Bad payloads are ignored.
    pub fn handle_external_drop(&self, ev: &DragEvent, target: GridId) {
        ev.prevent_default();
        match read_drop_payload(ev) {
            Ok(payload) => {
                self.drop_payload(&payload, target);
            }
            Err(e) => log::warn!(target: "dnd", "drop on {} ignored: {}", target, e),
        }
    }

    /// Apply a raw payload; returns whether the board changed
    pub fn drop_payload(&self, payload: &str, target: GridId) -> bool {
        let outcome = self.store.with_untracked(|state| state.apply_drop(payload, target));
        match outcome {
            DropOutcome::Moved { next, id, from } => {
                debug_assert!(next.is_disjoint());
                match from {
                    Some(from) => log::info!(target: "dnd", "moved {} from grid {} to grid {}", id, from, target),
                    None => log::info!(target: "dnd", "added {} to grid {}", id, target),
                }
                self.store.set(next);
                true
            }
            DropOutcome::AlreadyPresent => {
                log::debug!(target: "dnd", "drop on {} ignored: already there", target);
                false
            }
            DropOutcome::Rejected(e) => {
                log::warn!(target: "dnd", "drop on {} ignored: {}", target, e);
                false
            }
        }
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::encode_item;

    #[test]
    fn test_drop_payload_replaces_state() {
        let ctx = BoardContext::new(Store::new(BoardState::seeded()));
        let payload = encode_item(&Item::new("a1", "A Item 1")).unwrap();

        assert!(ctx.drop_payload(&payload, GridId::B));
        assert_eq!(ctx.store.grid_a().get_untracked(), vec![Item::new("a2", "A Item 2")]);
        assert_eq!(ctx.store.grid_b().get_untracked().last(), Some(&Item::new("a1", "A Item 1")));

        // Second delivery of the same drop
        assert!(!ctx.drop_payload(&payload, GridId::B));
        assert_eq!(ctx.store.grid_b().get_untracked().len(), 7);
    }

    #[test]
    fn test_drop_payload_malformed() {
        let ctx = BoardContext::new(Store::new(BoardState::seeded()));
        assert!(!ctx.drop_payload("{oops", GridId::A));
        assert_eq!(ctx.store.grid_a().get_untracked().len(), 2);
        assert_eq!(ctx.store.grid_b().get_untracked().len(), 6);
    }
}
