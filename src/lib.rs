//! Starscope - Main-Sequence Star Viewer
//!
//! A library crate providing the stellar model, color mapping and Bevy
//! plugins for the interactive star viewer.

pub mod camera;
pub mod color;
pub mod input;
pub mod model;
pub mod scene;
pub mod timeline;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
