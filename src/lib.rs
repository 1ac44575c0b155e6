//! Foothold-based 2D platformer physics.
//!
//! Characters walk along footholds (sloped ground segments linked to their
//! neighbors), fall under gravity, jump, drop through one-way platforms and
//! climb ladders. The host owns the loop: it loads a map into an
//! [`ActiveMap`], polls a [`MovementIntent`] each tick and hands both to
//! [`PhysicsStepper::step`], then reads a [`PhysicsSnapshot`] for rendering.

pub mod config;
pub mod domain;
pub mod error;
pub mod sim;

pub use config::PhysicsConfig;
pub use domain::entity::{MotionState, MovementIntent, MovementStats, PlayerPhysicsState};
pub use domain::foothold::{Foothold, FootholdId, FootholdRecord};
pub use domain::graph::{FootholdGraph, GroundHint, GroundHit};
pub use domain::ladder::LadderRegion;
pub use error::{FootholdError, MapError};
pub use sim::clock::FixedTimestep;
pub use sim::event::PhysicsEvent;
pub use sim::map::{ActiveMap, InMemoryMapSource, MapData, MapGeometry, MapId, MapSource};
pub use sim::snapshot::PhysicsSnapshot;
pub use sim::step::PhysicsStepper;
