//! # figdraw
//!
//! Renders rectangles, circles and triangles onto a character grid.
//! A scene file lists the canvas size, the output path and the figures;
//! figures are drawn in file order and later ones overwrite earlier ones.

pub mod canvas;
pub mod config;
pub mod errors;
pub mod scene;

pub use canvas::{Canvas, Figure, Surface};
pub use config::{load_scene, SceneConfig};
pub use errors::{FigdrawError, Result};
pub use scene::Scene;
