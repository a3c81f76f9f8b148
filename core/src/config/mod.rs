pub mod load;
pub mod types;

pub use load::{load, DEFAULT_CONFIG_FILE};
pub use types::*;
