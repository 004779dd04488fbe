// ABOUTME: Text block rendering for moto panes.
// ABOUTME: Measures, pads, joins, and borders blocks of terminal text.

mod border;
mod table;
mod text;
mod theme;

pub use border::{bordered, BorderSet};
pub use table::table;
pub use text::{
    block_height, block_width, fit, join_horizontal, join_vertical, place_center, truncate,
};
pub use theme::Theme;
