//! CLI commands for floodfill

pub mod dispatch;
pub mod fill;
pub mod output;
