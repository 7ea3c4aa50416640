//! Choice Ranker - Multi-criteria decision engine
//!
//! This crate ranks a set of options against weighted criteria, filters them
//! by hard constraints, recommends the best valid option with a confidence
//! value and reports pairwise trade-offs. Per-criterion scoring is delegated
//! to pluggable domain scorers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
