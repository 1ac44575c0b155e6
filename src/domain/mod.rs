//! Pure physics rules: geometry, entity state, and the collision resolver.

pub mod coords;
pub mod entity;
pub mod foothold;
pub mod graph;
pub mod ladder;
pub mod physics;
