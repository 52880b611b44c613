#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod manifest;
pub mod render;
pub mod report;
pub mod util;
