//! Input processing module
//! Handles file detection, record parsing, and input management

pub mod file_detector;
pub mod loader;
pub mod manager;

pub use manager::InputManager;
