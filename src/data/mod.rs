//! # Storing of transportation problems in memory
//!
//! This module provides the data structures that flow between the importer, the solver adapter and
//! the renderer. Algorithms may introduce their specific data structures in
//! `algorithm::my_algorithm`.
pub mod problem;
pub mod solution;
