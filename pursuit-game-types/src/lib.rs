//! Shared vocabulary for the pursuit crates.
//!
//! The search and minimax engines never see a concrete maze. They talk to game states through
//! the capability traits in [types], so a game only has to implement the handful of traits a
//! given engine or evaluation function actually needs.

pub mod types;

pub use types::*;
