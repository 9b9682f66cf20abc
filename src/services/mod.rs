// Service exports
pub mod name_data;
pub mod names;

pub use names::{NameLists, NamePool, NameSource};
