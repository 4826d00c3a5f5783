//! Pure menu and schedule logic. Nothing in here performs I/O.

pub mod browse;
pub mod classifier;
pub mod refresh;
pub mod schedule;
