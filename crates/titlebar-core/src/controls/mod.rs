//! Platform control sets.
//!
//! - `mac` - traffic-light buttons with hover icons and modifier-gated zoom
//! - `windows` - caption buttons with a maximize/restore icon kept in sync
//!   through resize notifications
//! - `keys` - modifier key tracking
//! - `types` - icons and button identifiers shared by both sets

pub mod keys;
pub mod mac;
pub mod types;
pub mod windows;

pub use keys::{KeyTracker, ModifierKey, ModifierState, VALID_MODIFIER_KEYS};
pub use mac::MacControls;
pub use types::{ButtonView, Icon, MacButton, WindowsButton};
pub use windows::WindowsControls;
