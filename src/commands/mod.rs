//! CLI commands for trailblazer

pub mod compare;
pub mod dispatch;
pub mod format;
pub mod maze;
pub mod mst;
pub mod path;
