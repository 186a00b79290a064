//! Record model for the collection.

pub mod dragon;

pub use dragon::{Color, Coordinates, Dragon, DragonCave, DragonCharacter};
