//! Grid A Panel Component
//!
//! Items laid out on the grid widget. Each card has an internal handle for
//! moving it within the grid and an external handle for dragging it to
//! Grid B.

use leptos::prelude::*;
use leptos_grid_layout::{GridLayout, LayoutItem};
use web_sys::DragEvent;

use crate::board::BoardStateStoreFields;
use crate::context::use_board;
use crate::layout::{derive_layout, grid_a_config, INTERNAL_DRAG_HANDLE};
use crate::models::Item;

#[component]
fn GridACard(item: Item) -> impl IntoView {
    let board = use_board();
    let content = item.content.clone();

    view! {
        <div class="grid-a-card">
            <div class=INTERNAL_DRAG_HANDLE>{content}</div>
            <div
                class="external-drag-handle"
                title="Drag to the other grid"
                draggable="true"
                on:dragstart=move |ev: DragEvent| board.handle_external_drag_start(&ev, &item)
            >
                "⇅"
            </div>
        </div>
    }
}

/// Grid A: resizable, internally draggable
#[component]
pub fn GridAPanel() -> impl IntoView {
    let board = use_board();
    let layout = Memo::new(move |_| derive_layout(&board.grid_a()));

    let on_layout_change = Callback::new(|layout: Vec<LayoutItem>| {
        let cells: Vec<String> = layout
            .iter()
            .map(|c| format!("{}@{},{} {}x{}", c.i, c.x, c.y, c.w, c.h))
            .collect();
        log::debug!(target: "grid_a", "layout changed: {}", cells.join(" "));
    });

    let cell = move |id: String| {
        board
            .store
            .grid_a()
            .with_untracked(|items| items.iter().find(|i| i.id == id).cloned())
            .map(|item| view! { <GridACard item=item /> })
    };

    view! {
        <GridLayout
            layout=layout
            config=grid_a_config()
            on_layout_change=on_layout_change
            class="grid-a"
            cell=cell
        />
    }
}
