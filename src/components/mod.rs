//! UI Components
//!
//! The two grid panels and the drop target wrapping them.

mod drop_panel;
mod grid_a_panel;
mod grid_b_panel;

pub use drop_panel::DropPanel;
pub use grid_a_panel::GridAPanel;
pub use grid_b_panel::GridBPanel;
