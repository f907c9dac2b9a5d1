//! Dual Grid App
//!
//! Main application component with two side-by-side grids.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::BoardState;
use crate::components::{DropPanel, GridAPanel, GridBPanel};
use crate::context::BoardContext;
use crate::models::GridId;

#[component]
pub fn App() -> impl IntoView {
    let board = BoardContext::new(Store::new(BoardState::seeded()));

    // Provide context to all children
    provide_context(board);

    view! {
        <div class="app-layout">
            <DropPanel grid=GridId::A title="Grid A (Resizable + Internal Drag)">
                <GridAPanel />
            </DropPanel>

            <DropPanel grid=GridId::B title="Grid B (No Resize)">
                <GridBPanel />
            </DropPanel>
        </div>
    }
}
