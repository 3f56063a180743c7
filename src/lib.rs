//! Toroidal Automata - 2D Life-like and 1D elementary cellular automata
//!
//! Two independent engines produce per-generation snapshots for a rendering
//! host:
//! - [`GridEngine`] steps a binary grid whose edges wrap, counting the 8
//!   Moore neighbors of every cell and applying a [`LifeRule`].
//! - [`LineEngine`] steps a periodic binary row through an 8-entry
//!   [`ElementaryRule`] table and records [`Timeline`]s for space-time diagrams.
//!
//! Both are also exported over a C ABI in [`ffi`].

pub mod automaton;
pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;


pub use automaton::{
    ElementaryRule, Grid, LifeRule, NeighborCount, Row, Timeline, RULE_110, RULE_30,
};
pub use config::{GridConfig, LineConfig};
pub use engine::{GridEngine, LineEngine};
pub use error::{Error, Result};
