//! Path planning over the integer step lattice
//!
//! Pure, stateless rasterization of straight lines into unit steps; safe to
//! call from any context, allocates nothing beyond its own iterator state.

pub mod grid;
pub mod path;

pub use grid::{GridVec2, GridVec3, GridVector};
pub use path::{collect_path, plan_path, PathCollectError, PathError, PathPlan};
