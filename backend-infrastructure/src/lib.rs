pub mod config;
pub mod repositories;
pub mod storage;
pub mod utils;

pub use config::*;
pub use repositories::*;
pub use storage::*;
pub use utils::*;
