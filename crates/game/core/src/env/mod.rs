//! Read-only collaborators injected into the rules.
//!
//! The core never opens files or touches global randomness. Catalog lookups go
//! through [`MonsterOracle`] and every roll goes through [`RngOracle`], so the
//! runtime decides where templates and entropy come from.

pub mod monsters;
pub mod rng;

pub use monsters::MonsterOracle;
pub use rng::{PcgRng, RngOracle, SequenceRng};
