//! Owned state of one flow field: the lattice plus the parallel vector and
//! segment arrays, all index-aligned.

use crate::config::FieldConfig;
use crate::error::Result;
use crate::geometry::{Segment, Vec2, Viewport};
use crate::grid::Lattice;
use crate::tracker;
use crate::vector::FlowVector;

#[derive(Clone, Debug)]
pub struct FlowField {
    pub(crate) lattice: Lattice,
    pub(crate) vectors: Vec<FlowVector>,
    pub(crate) segments: Vec<Segment>,
    pub(crate) viewport: Viewport,
    pub(crate) deflect_length: f64,
    pub(crate) cursor: Option<Vec2>,
}

impl FlowField {
    /// Validate `cfg` and lay out the lattice. Segments start horizontal.
    pub fn new(cfg: &FieldConfig, viewport: Viewport) -> Result<Self> {
        cfg.validate()?;
        let lattice = Lattice::from_config(cfg, viewport)?;
        let vectors = vec![FlowVector::default(); lattice.len()];
        let segments = lattice
            .points()
            .iter()
            .map(|&p| Segment::centered(p, 0.0, cfg.deflect_length))
            .collect();
        Ok(Self {
            lattice,
            vectors,
            segments,
            viewport,
            deflect_length: cfg.deflect_length,
            cursor: None,
        })
    }

    /// Re-aim every vector at `cursor`. Returns false if the position was
    /// rejected and nothing changed.
    pub fn pointer_moved(&mut self, cursor: Vec2) -> bool {
        tracker::track(self, cursor)
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn vectors(&self) -> &[FlowVector] {
        &self.vectors
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn deflect_length(&self) -> f64 {
        self.deflect_length
    }

    /// Last cursor position applied by the tracker.
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.lattice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lattice.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_stay_index_aligned() {
        let field = FlowField::new(&FieldConfig::default(), Viewport::new(800.0, 600.0)).unwrap();
        assert_eq!(field.len(), 20);
        assert_eq!(field.vectors().len(), field.len());
        assert_eq!(field.segments().len(), field.len());
    }

    #[test]
    fn segments_rest_horizontally_before_first_move() {
        let field = FlowField::new(&FieldConfig::default(), Viewport::new(800.0, 600.0)).unwrap();
        for (seg, p) in field.segments().iter().zip(field.lattice().points()) {
            assert_eq!(seg.side1, Vec2::new(p.x - 10.0, p.y));
            assert_eq!(seg.side2, Vec2::new(p.x + 10.0, p.y));
        }
        assert_eq!(field.cursor(), None);
    }

    #[test]
    fn invalid_config_fails_fast() {
        let cfg = FieldConfig {
            line_width: -2.0,
            ..FieldConfig::default()
        };
        assert!(FlowField::new(&cfg, Viewport::new(800.0, 600.0)).is_err());
    }
}
