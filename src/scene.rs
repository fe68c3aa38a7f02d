//! Scene: a canvas size plus figures drawn in order

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::canvas::{Canvas, Figure};
use crate::config::{dimension, SceneConfig};
use crate::errors::{FigdrawError, Result};

/// Validated scene ready to render
///
/// Every figure has passed construction checks; the only failure left at
/// render time is allocating the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    width: u32,
    height: u32,
    figures: Vec<Figure>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Canvas::cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            figures: Vec::new(),
        })
    }

    /// Validate a parsed scene file; the first invalid entry aborts
    pub fn from_config(config: &SceneConfig) -> Result<Self> {
        let size = config
            .canvas
            .ok_or_else(|| FigdrawError::configuration("scene has no canvas entry"))?;

        let mut scene = Self::new(
            dimension("canvas", "width", size.width)?,
            dimension("canvas", "height", size.height)?,
        )?;
        for spec in &config.figures {
            scene.push(spec.build()?);
        }

        info!(
            width = scene.width(),
            height = scene.height(),
            figures = scene.figures.len(),
            "scene ready"
        );
        Ok(scene)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn push(&mut self, figure: impl Into<Figure>) {
        self.figures.push(figure.into());
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Draw every figure in list order; later figures overwrite earlier ones
    pub fn render(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height)?;

        for (idx, figure) in self.figures.iter().enumerate() {
            if !figure.bounds().intersects(self.width(), self.height()) {
                warn!(
                    index = idx,
                    kind = figure.kind(),
                    "figure lies entirely outside the canvas"
                );
            }
            debug!(index = idx, kind = figure.kind(), symbol = %figure.symbol(), "drawing");
            figure.draw(&mut canvas);
        }

        Ok(canvas)
    }

    /// Render and write the result to `path`
    pub fn render_to_file(&self, path: &Path) -> Result<()> {
        let canvas = self.render()?;
        let file = File::create(path).map_err(|e| FigdrawError::file_access(path, &e))?;
        let mut writer = BufWriter::new(file);
        canvas.write_to(&mut writer).map_err(|e| match e {
            FigdrawError::IoError(io) => FigdrawError::file_access(path, &io),
            other => other,
        })?;
        info!(path = %path.display(), "wrote rendering");
        Ok(())
    }
}
