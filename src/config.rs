//! Scene files
//!
//! Two formats describe the same scene:
//!
//! - the line format, one whitespace-separated directive per line
//!   (`canvas`, `output`, `figure <kind> ...`), unknown lines ignored
//! - TOML, selected by a `.toml` extension
//!
//! In both formats a figure's symbol is the first character of its token or
//! string; anything after it is ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::{FromStr, SplitWhitespace};

use serde::{Deserialize, Deserializer};
use tracing::{debug, info, warn};

use crate::canvas::{Circle, Figure, Point, Rectangle, Triangle};
use crate::errors::{FigdrawError, Result};

/// Requested canvas dimensions, validated when the canvas is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CanvasSize {
    pub width: i64,
    pub height: i64,
}

/// One figure entry as written in a scene file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FigureSpec {
    Rectangle {
        x: i32,
        y: i32,
        width: i64,
        height: i64,
        #[serde(deserialize_with = "first_char")]
        symbol: char,
    },
    Circle {
        x: i32,
        y: i32,
        radius: i64,
        #[serde(deserialize_with = "first_char")]
        symbol: char,
    },
    Triangle {
        x: i32,
        y: i32,
        base: i64,
        height: i64,
        #[serde(deserialize_with = "first_char")]
        symbol: char,
    },
}

fn first_char<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<char, D::Error> {
    let token = String::deserialize(deserializer)?;
    token
        .chars()
        .next()
        .ok_or_else(|| serde::de::Error::custom("symbol must not be empty"))
}

/// Convert a size read from a scene file into a validated dimension
pub fn dimension(figure: &'static str, field: &'static str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(FigdrawError::InvalidDimension {
            figure,
            field,
            value,
        });
    }
    u32::try_from(value).map_err(|_| {
        FigdrawError::configuration(format!(
            "{figure} {field} {value} exceeds the maximum of {}",
            u32::MAX
        ))
    })
}

impl FigureSpec {
    /// Validate the parameters and build the drawable figure
    pub fn build(&self) -> Result<Figure> {
        let figure = match *self {
            FigureSpec::Rectangle {
                x,
                y,
                width,
                height,
                symbol,
            } => Rectangle::new(
                Point::new(x, y),
                dimension("rectangle", "width", width)?,
                dimension("rectangle", "height", height)?,
                symbol,
            )?
            .into(),
            FigureSpec::Circle {
                x,
                y,
                radius,
                symbol,
            } => Circle::new(
                Point::new(x, y),
                dimension("circle", "radius", radius)?,
                symbol,
            )?
            .into(),
            FigureSpec::Triangle {
                x,
                y,
                base,
                height,
                symbol,
            } => Triangle::new(
                Point::new(x, y),
                dimension("triangle", "base", base)?,
                dimension("triangle", "height", height)?,
                symbol,
            )?
            .into(),
        };
        Ok(figure)
    }
}

/// Parsed scene file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SceneConfig {
    /// Canvas size, required before rendering
    pub canvas: Option<CanvasSize>,

    /// Destination of the rendered text
    pub output: Option<PathBuf>,

    /// Figures in drawing order
    #[serde(default, rename = "figure")]
    pub figures: Vec<FigureSpec>,
}

/// Token cursor over one line of the line format
struct Directive<'a> {
    number: usize,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Directive<'a> {
    fn word(&mut self, name: &str) -> Result<&'a str> {
        self.tokens
            .next()
            .ok_or_else(|| FigdrawError::parse(self.number, format!("missing {name}")))
    }

    fn int<T: FromStr>(&mut self, name: &str) -> Result<T> {
        let token = self.word(name)?;
        token.parse().map_err(|_| {
            FigdrawError::parse(
                self.number,
                format!("expected integer for {name}, got {token:?}"),
            )
        })
    }

    /// First character of the next token; the rest of the token is ignored
    fn symbol(&mut self) -> Result<char> {
        let token = self.word("symbol")?;
        token
            .chars()
            .next()
            .ok_or_else(|| FigdrawError::parse(self.number, "missing symbol"))
    }
}

/// Parse the line format
pub fn parse_scene(text: &str) -> Result<SceneConfig> {
    let mut config = SceneConfig::default();

    for (idx, line) in text.lines().enumerate() {
        let mut directive = Directive {
            number: idx + 1,
            tokens: line.split_whitespace(),
        };
        let Some(key) = directive.tokens.next() else {
            continue;
        };

        match key {
            "canvas" => {
                let width = directive.int("canvas width")?;
                let height = directive.int("canvas height")?;
                config.canvas = Some(CanvasSize { width, height });
            }
            "output" => {
                config.output = Some(PathBuf::from(directive.word("output path")?));
            }
            "figure" => {
                let Some(kind) = directive.tokens.next() else {
                    warn!(line = directive.number, "ignoring figure without a kind");
                    continue;
                };
                if let Some(spec) = parse_figure(kind, &mut directive)? {
                    config.figures.push(spec);
                } else {
                    warn!(line = directive.number, kind, "ignoring unknown figure kind");
                }
            }
            _ if key.starts_with('#') => {}
            _ => {
                warn!(line = directive.number, key, "ignoring unrecognized directive");
            }
        }
    }

    debug!(figures = config.figures.len(), "parsed scene");
    Ok(config)
}

fn parse_figure(kind: &str, d: &mut Directive<'_>) -> Result<Option<FigureSpec>> {
    let spec = match kind {
        "rectangle" => FigureSpec::Rectangle {
            x: d.int("x")?,
            y: d.int("y")?,
            width: d.int("width")?,
            height: d.int("height")?,
            symbol: d.symbol()?,
        },
        "circle" => FigureSpec::Circle {
            x: d.int("x")?,
            y: d.int("y")?,
            radius: d.int("radius")?,
            symbol: d.symbol()?,
        },
        "triangle" => FigureSpec::Triangle {
            x: d.int("x")?,
            y: d.int("y")?,
            base: d.int("base")?,
            height: d.int("height")?,
            symbol: d.symbol()?,
        },
        _ => return Ok(None),
    };
    Ok(Some(spec))
}

/// Parse a TOML scene
pub fn parse_toml_scene(text: &str) -> Result<SceneConfig> {
    Ok(toml::from_str(text)?)
}

/// Load a scene file, choosing the format from the extension
pub fn load_scene(path: &Path) -> Result<SceneConfig> {
    let content = fs::read_to_string(path).map_err(|e| FigdrawError::file_access(path, &e))?;
    info!(path = %path.display(), bytes = content.len(), "loading scene");

    if path.extension().is_some_and(|e| e == "toml") {
        parse_toml_scene(&content)
    } else {
        parse_scene(&content)
    }
}
