//! Physical pixel layout: coordinates, rotation, and the location manager.

pub mod location;
pub mod manager;
pub mod rotation;
