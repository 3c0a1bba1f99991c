pub mod config;
pub mod motif;
pub mod pattern;
