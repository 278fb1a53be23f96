//! Response formatting and rendering for the launcher

pub mod formatter;
pub mod languages;
pub mod render;
