pub mod board;
pub mod config;
pub mod error;

pub use board::{Board, Snapshot};
pub use config::{EditPolicy, PasteFailurePolicy, SessionConfig};
pub use error::SessionError;

// Re-export for convenience
pub use multibits_codec::{OverflowPolicy, Palette, PlaneSet, Rgb};
pub use multibits_common::{Square, ValueGrid};
