pub mod classify;
pub mod config;
pub mod consts;
pub mod error;
pub mod filter;
pub mod grid;
pub mod loader;
pub mod model;
pub mod narrative;
pub mod stats;
pub mod view;
