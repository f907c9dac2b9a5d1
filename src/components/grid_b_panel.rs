//! Grid B Panel Component
//!
//! Fixed-size cards in a wrapping row. Cards cannot be resized; the whole
//! card is the drag source.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::context::use_board;

#[component]
pub fn GridBPanel() -> impl IntoView {
    let board = use_board();

    view! {
        <div class="grid-b-cards">
            <For
                each=move || board.grid_b()
                key=|item| item.id.clone()
                children=move |item| {
                    let content = item.content.clone();
                    view! {
                        <div
                            class="grid-b-card"
                            draggable="true"
                            on:dragstart=move |ev: DragEvent| board.handle_external_drag_start(&ev, &item)
                        >
                            {content}
                        </div>
                    }
                }
            />
        </div>
    }
}
