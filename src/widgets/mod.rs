//! Widget components for the energy dashboard screen.
//!
//! - [`rings`]: Rasterizes ring draw commands (arcs, glow, particles)
//! - [`overlay`]: Per-ring figures in the center and the car placeholder
//! - [`card`]: "Smart assistant" recommendation card
//! - [`nav_bar`]: Bottom navigation bar and its hit testing
//! - [`status_bar`]: Top spacer with the optional FPS counter
//! - [`primitives`]: Background gradient, text measuring and wrapping
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` and discard
//! draw errors with `.ok()`; a failed primitive only loses pixels for one
//! frame.

mod card;
mod nav_bar;
mod overlay;
mod primitives;
mod rings;
mod status_bar;

pub use card::{ASSISTANT_MESSAGE, ASSISTANT_TITLE, CARD_AREA, draw_assistant_card};
pub use nav_bar::{NAV_BAR_AREA, draw_nav_bar, hit_test};
pub use overlay::{draw_car_placeholder, draw_metric_overlay};
pub use primitives::{background_at, fill_background, text_width, wrap_text};
pub use rings::{draw_ring_commands, draw_rings};
pub use status_bar::{STATUS_BAR_AREA, draw_status_bar};
