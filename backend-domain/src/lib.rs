// Backend Domain Layer

pub mod entities;
pub mod ports;
pub mod utils;
pub mod validation;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use utils::*;
pub use validation::*;
pub use value_objects::*;
