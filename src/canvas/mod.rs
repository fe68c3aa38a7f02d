//! # Canvas - character grid rendering core
//!
//! Figures rasterize themselves through the [`Surface`] pixel-write contract;
//! [`Canvas`] is the in-memory grid that implements it.
//!
//! ```text
//!    ┌──────────────┐   draw()    ┌───────────┐  draw_pixel()  ┌──────────┐
//!    │ Scene        │ ──────────▶ │  Figure   │ ─────────────▶ │  Canvas  │
//!    │ (list order) │             │ ▭  ○  △   │   (clipped)    │  char[]  │
//!    └──────────────┘             └───────────┘                └────┬─────┘
//!                                                                   │ render()
//!                                                                   ▼
//!                                                                 text
//! ```

mod canvas;
mod shapes;

pub use canvas::{Canvas, Surface, BLANK};
pub use shapes::{Bounds, Circle, Figure, Point, Rectangle, Triangle};
