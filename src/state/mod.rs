/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The fixed prompt, model and artist lists (catalog.rs)
/// - The selection gate and capability table (gate.rs)
/// - User configuration (config.rs)

pub mod catalog;
pub mod config;
pub mod data;
pub mod gate;
