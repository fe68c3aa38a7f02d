//! Figures and their rasterization onto a [`Surface`]

use super::canvas::Surface;
use crate::errors::{FigdrawError, Result};

/// Integer anchor position of a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Inclusive integer bounding box of a figure's footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Bounds {
    /// Whether any cell of the box lies inside a `width x height` grid
    pub fn intersects(&self, width: u32, height: u32) -> bool {
        self.right >= 0
            && self.bottom >= 0
            && self.left < i64::from(width)
            && self.top < i64::from(height)
    }

    /// Overlap of two boxes, `None` when they are disjoint
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let b = Bounds {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        (b.left <= b.right && b.top <= b.bottom).then_some(b)
    }
}

/// Part of `footprint` the surface can show
fn visible<S: Surface + ?Sized>(footprint: Bounds, surface: &S) -> Option<Bounds> {
    match surface.clip() {
        Some(clip) => footprint.intersection(&clip),
        None => Some(footprint),
    }
}

fn positive(figure: &'static str, field: &'static str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(FigdrawError::InvalidDimension {
            figure,
            field,
            value: 0,
        });
    }
    Ok(value)
}

fn printable(symbol: char) -> Result<char> {
    if symbol.is_control() {
        return Err(FigdrawError::InvalidSymbol { symbol });
    }
    Ok(symbol)
}

/// Solid axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    origin: Point,
    width: u32,
    height: u32,
    symbol: char,
}

impl Rectangle {
    pub fn new(origin: Point, width: u32, height: u32, symbol: char) -> Result<Self> {
        Ok(Self {
            origin,
            width: positive("rectangle", "width", width)?,
            height: positive("rectangle", "height", height)?,
            symbol: printable(symbol)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Some(area) = visible(self.bounds(), surface) else {
            return;
        };
        for y in area.top..=area.bottom {
            for x in area.left..=area.right {
                surface.draw_pixel(x, y, self.symbol);
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        let x = i64::from(self.origin.x);
        let y = i64::from(self.origin.y);
        Bounds {
            left: x,
            top: y,
            right: x + i64::from(self.width) - 1,
            bottom: y + i64::from(self.height) - 1,
        }
    }
}

/// Filled disk anchored at its center
///
/// Membership is the squared-distance test `i² + j² <= r²`, so the footprint
/// is symmetric in both axes and needs no floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    center: Point,
    radius: u32,
    symbol: char,
}

impl Circle {
    pub fn new(center: Point, radius: u32, symbol: char) -> Result<Self> {
        Ok(Self {
            center,
            radius: positive("circle", "radius", radius)?,
            symbol: printable(symbol)?,
        })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Some(area) = visible(self.bounds(), surface) else {
            return;
        };
        let cx = i64::from(self.center.x);
        let cy = i64::from(self.center.y);
        let r = i64::from(self.radius);
        // i128 keeps r² + r² exact for any u32 radius
        let r2 = i128::from(r) * i128::from(r);

        for y in area.top..=area.bottom {
            let i = y - cy;
            let i2 = i128::from(i) * i128::from(i);
            for x in area.left..=area.right {
                let j = x - cx;
                if i2 + i128::from(j) * i128::from(j) <= r2 {
                    surface.draw_pixel(x, y, self.symbol);
                }
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        let cx = i64::from(self.center.x);
        let cy = i64::from(self.center.y);
        let r = i64::from(self.radius);
        Bounds {
            left: cx - r,
            top: cy - r,
            right: cx + r,
            bottom: cy + r,
        }
    }
}

/// Solid isosceles triangle hanging down from its apex
///
/// Scanline `i` spans `x - w..=x + w` with `w = floor(i * base / height)`.
/// The truncating division is part of the output format: the last row's
/// half-width is `(height - 1) * base / height`, not `base / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    apex: Point,
    base: u32,
    height: u32,
    symbol: char,
}

impl Triangle {
    pub fn new(apex: Point, base: u32, height: u32, symbol: char) -> Result<Self> {
        Ok(Self {
            apex,
            base: positive("triangle", "base", base)?,
            height: positive("triangle", "height", height)?,
            symbol: printable(symbol)?,
        })
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Half-width of scanline `row`, counted from the apex
    #[inline]
    pub fn half_width(&self, row: u32) -> u32 {
        let w = u64::from(row) * u64::from(self.base) / u64::from(self.height);
        // row < height keeps w below base
        u32::try_from(w).unwrap_or(self.base)
    }

    /// Each scanline covers `x - w..=x + w`, the union of the mirrored
    /// writes `x + j` and `x - j` for `j` in `0..=w`; only its visible part is
    /// written, once per cell.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Some(area) = visible(self.bounds(), surface) else {
            return;
        };
        let x = i64::from(self.apex.x);
        let y = i64::from(self.apex.y);

        for py in area.top..=area.bottom {
            // area.top >= y and area.bottom < y + height
            let row = u32::try_from(py - y).unwrap_or(0);
            let w = i64::from(self.half_width(row));
            for px in (x - w).max(area.left)..=(x + w).min(area.right) {
                surface.draw_pixel(px, py, self.symbol);
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        let x = i64::from(self.apex.x);
        let y = i64::from(self.apex.y);
        let widest = i64::from(self.half_width(self.height - 1));
        Bounds {
            left: x - widest,
            top: y,
            right: x + widest,
            bottom: y + i64::from(self.height) - 1,
        }
    }
}

/// Closed set of drawable figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
}

impl Figure {
    /// Rasterize onto any surface; writes past the edges are left to it to clip
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Figure::Rectangle(r) => r.draw(surface),
            Figure::Circle(c) => c.draw(surface),
            Figure::Triangle(t) => t.draw(surface),
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Figure::Rectangle(r) => r.bounds(),
            Figure::Circle(c) => c.bounds(),
            Figure::Triangle(t) => t.bounds(),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Figure::Rectangle(r) => r.symbol,
            Figure::Circle(c) => c.symbol,
            Figure::Triangle(t) => t.symbol,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Figure::Rectangle(_) => "rectangle",
            Figure::Circle(_) => "circle",
            Figure::Triangle(_) => "triangle",
        }
    }
}

impl From<Rectangle> for Figure {
    fn from(r: Rectangle) -> Self {
        Figure::Rectangle(r)
    }
}

impl From<Circle> for Figure {
    fn from(c: Circle) -> Self {
        Figure::Circle(c)
    }
}

impl From<Triangle> for Figure {
    fn from(t: Triangle) -> Self {
        Figure::Triangle(t)
    }
}
