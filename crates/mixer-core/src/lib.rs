pub mod board;
pub mod catalog;
pub mod constants;
pub mod drag;
pub mod mixer;
pub mod registry;

pub use board::*;
pub use catalog::*;
pub use constants::*;
pub use drag::*;
pub use mixer::*;
pub use registry::*;
