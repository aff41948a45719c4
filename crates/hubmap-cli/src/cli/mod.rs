//! CLI subcommand implementations for the hubmap binary.

pub mod activity_cmd;
pub mod doctor;
pub mod entries_cmd;
pub mod output;
pub mod robots_cmd;
pub mod sitemap_cmd;
