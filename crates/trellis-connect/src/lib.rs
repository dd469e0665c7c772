//! Connection resolution for connected-surface textures: face/axis algebra,
//! connection sets, and the quadrant/rotation decision procedure.
#![forbid(unsafe_code)]

pub mod face;
pub mod resolve;
pub mod set;

pub use face::{Axis, Face};
pub use resolve::{Resolved, pruned, resolve};
pub use set::{ConnectionCtx, ConnectionSet};
