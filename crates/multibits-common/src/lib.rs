pub mod error;
pub mod grid;
pub mod square;

pub use error::*;
pub use grid::*;
pub use square::*;
