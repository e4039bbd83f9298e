//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Frame drawing (dashboard, popup)
//! - `theme.rs` - Light/dark palettes
//! - `layout.rs` - Calendar grid geometry and sidebar placement
//! - `day_cell.rs` - Day cell widget
//! - `plain.rs` - Plain-text rendering for `--once`

mod day_cell;
mod draw;
pub mod layout;
pub mod plain;
pub mod theme;

// Re-export main draw function
pub use draw::draw;
