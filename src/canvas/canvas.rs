//! Character grid canvas with clipped pixel writes

use std::io::Write;

use super::shapes::Bounds;
use crate::errors::{FigdrawError, Result};

/// Character used for cells nothing has been drawn on
pub const BLANK: char = ' ';

/// Pixel-write contract shared by every drawing target
///
/// Coordinates are signed so figures may extend past the surface edges.
/// Implementations must ignore writes outside their bounds.
pub trait Surface {
    fn draw_pixel(&mut self, x: i64, y: i64, symbol: char);

    /// Region where writes can land, if the surface is bounded
    ///
    /// Figures skip whatever falls outside it; `None` means every write
    /// must be issued.
    fn clip(&self) -> Option<Bounds> {
        None
    }
}

/// Fixed-size grid of characters
///
/// Row-major storage, `height` rows of `width` cells, all initialised to
/// [`BLANK`]. The size never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl Canvas {
    /// Number of cells a `width x height` grid holds
    ///
    /// Fails for zero dimensions and for sizes no `Vec<char>` could hold.
    pub fn cell_count(width: u32, height: u32) -> Result<usize> {
        if width == 0 {
            return Err(FigdrawError::InvalidDimension {
                figure: "canvas",
                field: "width",
                value: i64::from(width),
            });
        }
        if height == 0 {
            return Err(FigdrawError::InvalidDimension {
                figure: "canvas",
                field: "height",
                value: i64::from(height),
            });
        }

        // A Vec can hold at most isize::MAX bytes
        (width as usize)
            .checked_mul(height as usize)
            .filter(|&cells| {
                cells
                    .checked_mul(std::mem::size_of::<char>())
                    .is_some_and(|bytes| isize::try_from(bytes).is_ok())
            })
            .ok_or_else(|| {
                FigdrawError::configuration(format!("canvas {width}x{height} is too large"))
            })
    }

    /// Create a blank canvas; both dimensions must be non-zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = Self::cell_count(width, height)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|e| {
            FigdrawError::configuration(format!(
                "cannot allocate canvas {width}x{height}: {e}"
            ))
        })?;
        cells.resize(size, BLANK);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Get the character at coordinates, `None` when out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width as usize)
    }

    /// Number of cells that are not blank
    pub fn painted_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != BLANK).count()
    }

    /// Serialize the grid, one `'\n'`-terminated line per row
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    /// Stream the same text [`Canvas::render`] produces into a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut line = String::with_capacity(self.width as usize + 1);
        for row in self.rows() {
            line.clear();
            line.extend(row.iter());
            line.push('\n');
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Surface for Canvas {
    #[inline]
    fn draw_pixel(&mut self, x: i64, y: i64, symbol: char) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = symbol;
        }
    }

    fn clip(&self) -> Option<Bounds> {
        Some(Bounds {
            left: 0,
            top: 0,
            right: i64::from(self.width) - 1,
            bottom: i64::from(self.height) - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(5, 5)]
    #[case(7, 3)]
    #[case(2, 9)]
    fn test_fresh_canvas_renders_blank(#[case] width: u32, #[case] height: u32) {
        let canvas = Canvas::new(width, height).unwrap();
        let text = canvas.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), height as usize);
        for line in lines {
            assert_eq!(line.chars().count(), width as usize);
            assert!(line.chars().all(|c| c == BLANK));
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Canvas::new(0, 4),
            Err(FigdrawError::InvalidDimension { field: "width", .. })
        ));
        assert!(matches!(
            Canvas::new(4, 0),
            Err(FigdrawError::InvalidDimension { field: "height", .. })
        ));
    }

    #[test]
    fn test_oversized_canvas_is_an_error() {
        let err = Canvas::new(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, FigdrawError::ConfigurationError(_)));
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(Canvas::cell_count(7, 3).unwrap(), 21);
        assert!(Canvas::cell_count(0, 3).unwrap_err().is_validation());
    }

    #[test]
    fn test_clip_covers_grid() {
        let canvas = Canvas::new(4, 3).unwrap();
        assert_eq!(
            canvas.clip(),
            Some(Bounds {
                left: 0,
                top: 0,
                right: 3,
                bottom: 2
            })
        );
    }

    #[test]
    fn test_set_get_pixel() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.draw_pixel(5, 3, '#');
        assert_eq!(canvas.get_pixel(5, 3), Some('#'));
        assert_eq!(canvas.get_pixel(3, 5), Some(BLANK));
        assert_eq!(canvas.painted_cells(), 1);
    }

    #[test]
    fn test_draw_pixel_idempotent() {
        let mut once = Canvas::new(4, 4).unwrap();
        once.draw_pixel(1, 2, '*');

        let mut twice = Canvas::new(4, 4).unwrap();
        twice.draw_pixel(1, 2, '*');
        twice.draw_pixel(1, 2, '*');

        assert_eq!(once, twice);
    }

    #[rstest]
    #[case(-1, 0)]
    #[case(0, -1)]
    #[case(4, 0)]
    #[case(0, 3)]
    #[case(i64::MAX, i64::MIN)]
    fn test_out_of_bounds_ignored(#[case] x: i64, #[case] y: i64) {
        let mut canvas = Canvas::new(4, 3).unwrap();
        let before = canvas.clone();
        canvas.draw_pixel(x, y, '@');
        assert_eq!(canvas, before);
        assert_eq!(canvas.get_pixel(x, y), None);
    }

    #[test]
    fn test_render_row_order() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.draw_pixel(0, 0, 'a');
        canvas.draw_pixel(2, 1, 'b');
        assert_eq!(canvas.render(), "a  \n  b\n");
    }

    #[test]
    fn test_write_to_matches_render() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.draw_pixel(1, 1, 'x');
        let mut buf = Vec::new();
        canvas.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), canvas.render());
    }
}
