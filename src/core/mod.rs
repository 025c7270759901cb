// Generic data structures shared by engine systems

#[allow(dead_code)]
pub mod bimap;

pub use bimap::BiMap;
