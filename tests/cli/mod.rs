pub mod compare;
pub mod config;
pub mod errors;
pub mod maze;
pub mod mst;
pub mod path;
pub mod support;
