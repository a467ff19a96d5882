//! Nutriscore Library
//!
//! Scores a food item's nutrients and serves the result over HTTP.

pub mod config;
pub mod http;
pub mod models;
pub mod nutrition;
