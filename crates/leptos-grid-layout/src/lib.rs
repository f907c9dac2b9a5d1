//! Leptos Grid Layout
//!
//! A small grid layout widget for Leptos: absolutely positioned cells on a
//! column/row grid, moved by a drag handle and resized from the bottom-right
//! corner using mouse events. Uses a movement threshold to distinguish click
//! from drag.
//!
//! The widget owns the live geometry. Callers hand in a layout descriptor and
//! get the full layout back through `on_layout_change` after each completed
//! drag or resize.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

/// Movement threshold in pixels before a pending interaction becomes active
const DRAG_THRESHOLD_PX: i32 = 5;

/// CSS class of the corner handle used for resizing
pub const RESIZE_HANDLE_CLASS: &str = "grid-layout-resize-handle";

/// Position and size of one cell, in grid units
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Cell key, matches the id of the rendered child
    pub i: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl LayoutItem {
    pub fn new(i: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { i: i.into(), x, y, w, h }
    }
}

/// Rendering and interaction settings
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayoutConfig {
    /// Number of columns
    pub cols: u32,
    /// Height of one row in pixels
    pub row_height: u32,
    /// Total container width in pixels
    pub width: u32,
    /// Gap between cells (and around the edge) in pixels
    pub margin: u32,
    pub is_draggable: bool,
    pub is_resizable: bool,
    /// Selector restricting where a move may start (None = whole cell)
    pub draggable_handle: Option<String>,
}

impl Default for GridLayoutConfig {
    fn default() -> Self {
        Self {
            cols: 12,
            row_height: 150,
            width: 1200,
            margin: 10,
            is_draggable: true,
            is_resizable: true,
            draggable_handle: None,
        }
    }
}

impl GridLayoutConfig {
    /// Pixel width of a single column
    pub fn column_width(&self) -> f64 {
        let cols = self.cols.max(1);
        let gaps = self.margin * (cols + 1);
        self.width.saturating_sub(gaps) as f64 / cols as f64
    }

    fn column_step(&self) -> f64 {
        self.column_width() + self.margin as f64
    }

    fn row_step(&self) -> f64 {
        (self.row_height + self.margin) as f64
    }
}

/// Pixel rectangle of a cell relative to the container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn to_style(&self) -> String {
        format!(
            "position: absolute; left: {:.0}px; top: {:.0}px; width: {:.0}px; height: {:.0}px;",
            self.left, self.top, self.width, self.height
        )
    }
}

pub fn cell_rect(item: &LayoutItem, config: &GridLayoutConfig) -> CellRect {
    let margin = config.margin as f64;
    let col_w = config.column_width();
    let w = item.w.max(1) as f64;
    let h = item.h.max(1) as f64;
    CellRect {
        left: margin + item.x as f64 * config.column_step(),
        top: margin + item.y as f64 * config.row_step(),
        width: w * col_w + (w - 1.0) * margin,
        height: h * config.row_height as f64 + (h - 1.0) * margin,
    }
}

/// Container height in pixels needed to show every cell
pub fn container_height(layout: &[LayoutItem], config: &GridLayoutConfig) -> f64 {
    let rows = layout.iter().map(|it| it.y + it.h).max().unwrap_or(0);
    config.margin as f64 + rows as f64 * config.row_step()
}

/// Reconcile the live layout with a new descriptor.
///
/// `previous` is the descriptor the live layout was last built from. While
/// the descriptor is unchanged, geometry from internal moves and resizes is
/// kept; once it changes, the new descriptor replaces the live layout whole.
pub fn sync_layout(
    live: &[LayoutItem],
    previous: &[LayoutItem],
    incoming: &[LayoutItem],
) -> Vec<LayoutItem> {
    if previous == incoming {
        live.to_vec()
    } else {
        incoming.to_vec()
    }
}

/// What a mousedown inside a cell starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    Move,
    Resize,
}

/// Decide which interaction a mousedown starts, given where it landed
pub fn resolve_interaction(
    config: &GridLayoutConfig,
    on_resize_handle: bool,
    on_drag_handle: bool,
) -> Option<InteractionKind> {
    if on_resize_handle {
        return config.is_resizable.then_some(InteractionKind::Resize);
    }
    if !config.is_draggable {
        return None;
    }
    if config.draggable_handle.is_none() || on_drag_handle {
        Some(InteractionKind::Move)
    } else {
        None
    }
}

fn clamp_units(value: i64, min: i64, max: i64) -> u32 {
    value.max(min).min(max.max(min)) as u32
}

/// Whole grid units covered by `px`; a degenerate step moves nothing
fn snap_units(px: i32, step: f64) -> i64 {
    if step.is_finite() && step > 0.0 {
        (px as f64 / step).round() as i64
    } else {
        0
    }
}

/// Apply a pixel delta to the geometry captured at mousedown.
///
/// Deltas snap to whole grid units. Results stay inside the column range and
/// never shrink below one unit.
pub fn apply_delta(
    origin: &LayoutItem,
    kind: InteractionKind,
    dx: i32,
    dy: i32,
    config: &GridLayoutConfig,
) -> LayoutItem {
    let cols = config.cols.max(1) as i64;
    let d_cols = snap_units(dx, config.column_step());
    let d_rows = snap_units(dy, config.row_step());
    let mut next = origin.clone();
    match kind {
        InteractionKind::Move => {
            let w = (origin.w as i64).min(cols);
            next.x = clamp_units((origin.x as i64).saturating_add(d_cols), 0, cols - w);
            next.y = clamp_units((origin.y as i64).saturating_add(d_rows), 0, u32::MAX as i64);
        }
        InteractionKind::Resize => {
            next.w = clamp_units((origin.w as i64).saturating_add(d_cols), 1, cols - origin.x as i64);
            next.h = clamp_units((origin.h as i64).saturating_add(d_rows), 1, u32::MAX as i64);
        }
    }
    next
}

/// An in-flight move or resize
#[derive(Clone, Debug, PartialEq)]
pub struct Interaction {
    pub kind: InteractionKind,
    /// Geometry at mousedown
    pub origin: LayoutItem,
    pub start_x: i32,
    pub start_y: i32,
    /// False until the pointer passes the threshold
    pub active: bool,
}

impl Interaction {
    fn passes_threshold(&self, x: i32, y: i32) -> bool {
        (x - self.start_x).abs() > DRAG_THRESHOLD_PX || (y - self.start_y).abs() > DRAG_THRESHOLD_PX
    }
}

fn element_matches(ev: &web_sys::MouseEvent, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Bind document-level mousemove/mouseup for one widget instance
fn bind_global_handlers(
    live: RwSignal<Vec<LayoutItem>>,
    interaction: RwSignal<Option<Interaction>>,
    config: StoredValue<GridLayoutConfig>,
    on_layout_change: Option<Callback<Vec<LayoutItem>>>,
) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(mut current) = interaction.try_get_untracked().flatten() else { return };

        if !current.active {
            if !current.passes_threshold(ev.client_x(), ev.client_y()) {
                return;
            }
            current.active = true;
            interaction.set(Some(current.clone()));
        }

        let dx = ev.client_x() - current.start_x;
        let dy = ev.client_y() - current.start_y;
        let next = config.with_value(|c| apply_delta(&current.origin, current.kind, dx, dy, c));
        let changed = live.with_untracked(|l| l.iter().any(|it| it.i == next.i && *it != next));
        if changed {
            live.update(|l| {
                if let Some(slot) = l.iter_mut().find(|it| it.i == next.i) {
                    *slot = next;
                }
            });
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(done) = interaction.try_get_untracked().flatten() else { return };
        interaction.set(None);
        if !done.active {
            return;
        }
        let moved = live.with_untracked(|l| {
            l.iter().any(|it| it.i == done.origin.i && *it != done.origin)
        });
        if moved {
            if let Some(cb) = on_layout_change {
                cb.run(live.get_untracked());
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

/// Grid layout widget
///
/// `cell` renders the content of the cell with the given id; the widget wraps
/// it in a positioned container and adds the resize handle.
#[component]
pub fn GridLayout<CF, IV>(
    /// Layout descriptor, one entry per cell
    #[prop(into)]
    layout: Signal<Vec<LayoutItem>>,
    #[prop(optional)] config: GridLayoutConfig,
    /// Fired with the full layout after a completed move or resize
    #[prop(optional, into)]
    on_layout_change: Option<Callback<Vec<LayoutItem>>>,
    #[prop(optional, into)] class: String,
    cell: CF,
) -> impl IntoView
where
    CF: Fn(String) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let resizable = config.is_resizable;
    let config = StoredValue::new(config);
    let live = RwSignal::new(layout.get_untracked());
    // Descriptor `live` was last taken from
    let applied = StoredValue::new(layout.get_untracked());
    let interaction = RwSignal::new(None::<Interaction>);

    Effect::new(move |_| {
        let incoming = layout.get();
        let next = applied.with_value(|prev| live.with_untracked(|cur| sync_layout(cur, prev, &incoming)));
        applied.set_value(incoming);
        live.set(next);
    });

    bind_global_handlers(live, interaction, config, on_layout_change);

    let container_style = move || {
        let (width, height) = config.with_value(|c| (c.width, live.with(|l| container_height(l, c))));
        format!("position: relative; width: {}px; height: {:.0}px;", width, height)
    };

    view! {
        <div class=format!("grid-layout {}", class) style=container_style>
            <For
                each=move || live.get()
                key=|item| item.i.clone()
                children=move |item| {
                    let id = item.i;
                    let cell = cell.clone();

                    let style = {
                        let id = id.clone();
                        move || {
                            live.with(|l| {
                                l.iter()
                                    .find(|it| it.i == id)
                                    .map(|it| config.with_value(|c| cell_rect(it, c)).to_style())
                                    .unwrap_or_default()
                            })
                        }
                    };

                    let is_active = {
                        let id = id.clone();
                        move || interaction.with(|i| matches!(i, Some(it) if it.active && it.origin.i == id))
                    };

                    let on_mousedown = {
                        let id = id.clone();
                        move |ev: web_sys::MouseEvent| {
                            if ev.button() != 0 { return; }
                            let on_resize = element_matches(&ev, &format!(".{}", RESIZE_HANDLE_CLASS));
                            let kind = config.with_value(|c| {
                                let on_handle = c
                                    .draggable_handle
                                    .as_deref()
                                    .map(|sel| element_matches(&ev, sel))
                                    .unwrap_or(false);
                                resolve_interaction(c, on_resize, on_handle)
                            });
                            let Some(kind) = kind else { return };
                            let Some(origin) = live.with_untracked(|l| l.iter().find(|it| it.i == id).cloned()) else { return };
                            // Keep text selection from following the pointer
                            ev.prevent_default();
                            interaction.set(Some(Interaction {
                                kind,
                                origin,
                                start_x: ev.client_x(),
                                start_y: ev.client_y(),
                                active: false,
                            }));
                        }
                    };

                    view! {
                        <div
                            class="grid-layout-item"
                            class:active=is_active
                            style=style
                            on:mousedown=on_mousedown
                        >
                            {cell(id)}
                            {resizable.then(|| view! { <span class=RESIZE_HANDLE_CLASS></span> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
