// Repository and storage port traits (interfaces)
// Define what the domain needs from infrastructure

pub mod repositories;
pub mod storage;

pub use repositories::*;
pub use storage::*;
