//! Environment the rules run against: the random source and world setup.
//!
//! Nothing here performs I/O. The runtime chooses the seed and the concrete
//! [`RngOracle`]; tests plug in scripted sources.
pub mod rng;
pub mod spawn;

pub use rng::{PcgRng, RngOracle, compute_seed};
pub use spawn::{PlayerSpec, spawn_world};
