//! Core translation engine module

pub mod action;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;
pub mod throttle;
