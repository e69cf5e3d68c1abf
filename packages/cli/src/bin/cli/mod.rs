//! CLI command modules

pub mod auth;
pub mod board;
pub mod comments;
pub mod projects;
pub mod tasks;
pub mod utils;
