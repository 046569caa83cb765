pub mod detail;
pub mod explore;
pub mod show;
pub mod stats;
