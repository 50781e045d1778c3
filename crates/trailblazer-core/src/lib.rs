//! Trailblazer Core Library
//!
//! Graph model and search engines for route finding over mazes, terrain
//! and road maps.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod world;
