//! Grid A Layout
//!
//! Cell geometry for Grid A is derived from each item's index: two cells per
//! row, each three columns wide and two rows tall.

use leptos_grid_layout::{GridLayoutConfig, LayoutItem};

use crate::models::Item;

const CELL_W: u32 = 3;
const CELL_H: u32 = 2;
const CELLS_PER_ROW: usize = 2;

/// Class of the element that starts an internal drag
pub const INTERNAL_DRAG_HANDLE: &str = "internal-drag-handle";

/// Widget settings for Grid A
pub fn grid_a_config() -> GridLayoutConfig {
    GridLayoutConfig {
        cols: 6,
        row_height: 50,
        width: 500,
        is_draggable: true,
        is_resizable: true,
        draggable_handle: Some(format!(".{}", INTERNAL_DRAG_HANDLE)),
        ..Default::default()
    }
}

/// Cell for the item at `index`
pub fn cell_at(id: &str, index: usize) -> LayoutItem {
    LayoutItem::new(
        id,
        (index % CELLS_PER_ROW) as u32 * CELL_W,
        (index / CELLS_PER_ROW) as u32,
        CELL_W,
        CELL_H,
    )
}

pub fn derive_layout(items: &[Item]) -> Vec<LayoutItem> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| cell_at(&item.id, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardState;
    use crate::models::GridId;
    use leptos_grid_layout::sync_layout;

    #[test]
    fn test_derive_layout_seed() {
        let layout = derive_layout(&BoardState::seeded().grid_a);
        assert_eq!(
            layout,
            vec![LayoutItem::new("a1", 0, 0, 3, 2), LayoutItem::new("a2", 3, 0, 3, 2)]
        );
    }

    #[test]
    fn test_cells_wrap_every_two() {
        let cells: Vec<(u32, u32)> = (0..5).map(|i| cell_at("x", i)).map(|c| (c.x, c.y)).collect();
        assert_eq!(cells, vec![(0, 0), (3, 0), (0, 1), (3, 1), (0, 2)]);
    }

    #[test]
    fn test_dropped_item_lands_at_end() {
        let state = BoardState::seeded();
        let before = state.grid_a.len();
        let b3 = state.grid_b[2].clone();
        let next = state.with_item_moved(b3, GridId::A).unwrap();

        let layout = derive_layout(&next.grid_a);
        let cell = layout.iter().find(|c| c.i == "b3").unwrap();
        assert_eq!(layout.iter().position(|c| c.i == "b3"), Some(before));
        assert_eq!(cell.x, (before as u32 % 2) * 3);
        assert_eq!(cell.y, before as u32 / 2);
        assert_eq!((cell.w, cell.h), (3, 2));
    }

    #[test]
    fn test_shown_layout_follows_index_after_item_leaves() {
        let state = BoardState::seeded();
        let before = derive_layout(&state.grid_a);
        // a1 was moved inside the grid before leaving it
        let live = vec![LayoutItem::new("a1", 0, 3, 3, 2), before[1].clone()];

        let next = state.with_item_moved(state.grid_a[0].clone(), GridId::B).unwrap();
        let derived = derive_layout(&next.grid_a);
        let shown = sync_layout(&live, &before, &derived);

        assert_eq!(shown, derived);
        assert_eq!(shown, vec![LayoutItem::new("a2", 0, 0, 3, 2)]);
    }

    #[test]
    fn test_grid_a_config() {
        let config = grid_a_config();
        assert_eq!((config.cols, config.row_height, config.width), (6, 50, 500));
        assert!(config.is_draggable && config.is_resizable);
        assert_eq!(config.draggable_handle.as_deref(), Some(".internal-drag-handle"));
    }

    #[test]
    fn test_empty_layout() {
        assert!(derive_layout(&[]).is_empty());
    }
}
