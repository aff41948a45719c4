//! Command-line front-end for hubmap.

pub mod cli;
pub mod config;
