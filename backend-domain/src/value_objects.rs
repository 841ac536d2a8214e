// Domain value objects
pub mod event_kind;

pub use event_kind::*;
