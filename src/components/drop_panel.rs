//! Drop Panel Component
//!
//! Bordered panel that accepts items dragged in from the other grid.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::context::use_board;
use crate::models::GridId;

/// Nesting depth of dragenter/dragleave pairs.
///
/// Moving onto a child fires dragenter on the child before dragleave on the
/// parent, so the count stays above zero until the drag really leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct HoverDepth(u32);

impl HoverDepth {
    fn enter(self) -> Self {
        HoverDepth(self.0.saturating_add(1))
    }

    fn leave(self) -> Self {
        HoverDepth(self.0.saturating_sub(1))
    }

    fn is_over(self) -> bool {
        self.0 > 0
    }
}

/// Drop target for one grid
#[component]
pub fn DropPanel(
    /// Grid that receives dropped items
    grid: GridId,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let board = use_board();
    let depth = RwSignal::new(HoverDepth::default());

    let on_dragenter = move |_: DragEvent| {
        depth.update(|d| *d = d.enter());
    };

    // Browsers only fire drop on targets that cancel dragover
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let on_dragleave = move |_: DragEvent| {
        depth.update(|d| *d = d.leave());
    };

    let on_drop = move |ev: DragEvent| {
        depth.set(HoverDepth::default());
        board.handle_external_drop(&ev, grid);
    };

    view! {
        <section
            class="drop-panel"
            class:drag-over=move || depth.get().is_over()
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <h3>{title}</h3>
            {children()}
        </section>
    }
}
