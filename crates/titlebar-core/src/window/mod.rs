//! Window handle abstraction.
//!
//! The title bar never talks to a native window directly. Control sets
//! issue [`WindowRequest`]s through a [`WindowSlot`], which holds an
//! optional handle implementing [`NativeWindow`].

pub mod errors;
#[cfg(any(test, feature = "test-support"))]
pub mod headless;
pub mod request;
pub mod slot;
pub mod subscription;
pub mod traits;
pub mod types;

pub use errors::WindowError;
#[cfg(any(test, feature = "test-support"))]
pub use headless::{HeadlessWindow, WindowCall};
pub use request::{RequestOutcome, WindowRequest};
pub use slot::WindowSlot;
pub use subscription::Subscription;
pub use traits::NativeWindow;
pub use types::WindowOp;
