//! Staggered hexagonal lattice generation.
//!
//! Points are laid out on a rectangular row/column index grid and every even
//! column is pushed down by half a row, which turns the rectangle into a
//! triangular lattice. Column spacing is `cos(pi/6)` of the row spacing so
//! neighbouring points form regular hexagons.

use std::f64::consts::FRAC_PI_6;

use crate::config::FieldConfig;
use crate::error::{ConfigError, Result};
use crate::geometry::{Vec2, Viewport};

/// Upper bound on points per lattice; every point is re-aimed on each move.
pub const MAX_POINTS: usize = 1 << 20;

#[derive(Clone, Debug)]
pub struct Lattice {
    x_spacing: f64,
    y_spacing: f64,
    cols: usize,
    rows: usize,
    origin: Vec2,
    points: Vec<Vec2>,
}

impl Lattice {
    pub fn from_config(cfg: &FieldConfig, viewport: Viewport) -> Result<Self> {
        Self::new(cfg.box_width, cfg.box_height, cfg.y_spacing, viewport)
    }

    /// Fill a `box_width` x `box_height` box centred in `viewport`.
    pub fn new(
        box_width: f64,
        box_height: f64,
        y_spacing: f64,
        viewport: Viewport,
    ) -> Result<Self> {
        for (field, value) in [
            ("boxWidth", box_width),
            ("boxHeight", box_height),
            ("ySpacing", y_spacing),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value }.into());
            }
        }

        let x_spacing = FRAC_PI_6.cos() * y_spacing;
        let cols = (box_width / x_spacing).floor() as usize;
        let rows = (box_height / y_spacing).floor() as usize;
        if cols == 0 || rows == 0 {
            return Err(ConfigError::EmptyLattice { cols, rows }.into());
        }
        // `as usize` saturates, so oversized boxes land here rather than wrapping
        let len = match cols.checked_mul(rows) {
            Some(len) if len <= MAX_POINTS => len,
            _ => {
                return Err(ConfigError::TooLarge {
                    cols,
                    rows,
                    max: MAX_POINTS,
                }
                .into())
            }
        };

        // Start point errs up/left when the extent is not a whole pixel count.
        let center = viewport.center();
        let origin = Vec2::new(
            center.x - (cols as f64 * x_spacing).ceil() / 2.0,
            center.y - (rows as f64 * y_spacing).ceil() / 2.0,
        );

        let mut lattice = Self {
            x_spacing,
            y_spacing,
            cols,
            rows,
            origin,
            points: Vec::with_capacity(len),
        };
        for index in 0..len {
            let (row, col) = lattice.row_col(index);
            let x = (origin.x + col as f64 * x_spacing).ceil();
            let y_raw = (origin.y + row as f64 * y_spacing).ceil();
            let y = if col % 2 == 0 {
                y_raw + y_spacing / 2.0
            } else {
                y_raw
            };
            lattice.points.push(Vec2::new(x, y));
        }
        Ok(lattice)
    }

    fn row_col(&self, index: usize) -> (usize, usize) {
        let row = index / self.cols;
        (row, index - row * self.cols)
    }

    /// `(row, col)` of a point, or `None` past the end.
    pub fn cell(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.points.len()).then(|| self.row_col(index))
    }

    /// Row coordinate before the stagger offset is applied.
    pub fn raw_y(&self, index: usize) -> Option<f64> {
        self.cell(index)
            .map(|(row, _)| (self.origin.y + row as f64 * self.y_spacing).ceil())
    }

    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn x_spacing(&self) -> f64 {
        self.x_spacing
    }

    pub fn y_spacing(&self) -> f64 {
        self.y_spacing
    }

    /// Unrounded top-left start point of the lattice.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
}
