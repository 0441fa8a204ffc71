use crate::geometry::Vec2;
use crate::ramp::Rgb;

/// Mutable per-point record. `offset` is the point-to-cursor vector after the
/// first pointer move and zero before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowVector {
    pub offset: Vec2,
    pub color: Rgb,
    /// Not read by the renderer yet.
    pub width: f64,
}

impl Default for FlowVector {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            color: Rgb::WHITE,
            width: 1.0,
        }
    }
}

impl FlowVector {
    pub fn new(offset: Vec2) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    pub fn angle(&self) -> f64 {
        self.offset.angle()
    }

    pub fn length(&self) -> f64 {
        self.offset.length()
    }

    /// Rotate to `angle`, keeping the current length.
    pub fn set_angle(&mut self, angle: f64) {
        self.offset = Vec2::from_polar(angle, self.length());
    }

    /// Scale to `length`, keeping the current angle.
    pub fn set_length(&mut self, length: f64) {
        self.offset = Vec2::from_polar(self.angle(), length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn defaults_to_white_and_zero() {
        let v = FlowVector::default();
        assert_eq!(v.color, Rgb::WHITE);
        assert_eq!(v.length(), 0.0);
        assert_eq!(v.angle(), 0.0);
    }

    #[test]
    fn set_angle_keeps_length() {
        let mut v = FlowVector::new(Vec2::new(3.0, 4.0));
        v.set_angle(FRAC_PI_2);
        assert!((v.length() - 5.0).abs() < 1e-12);
        assert!(v.offset.x.abs() < 1e-12);
        assert!((v.offset.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn set_length_keeps_angle() {
        let mut v = FlowVector::new(Vec2::new(-1.0, 1.0));
        let before = v.angle();
        v.set_length(10.0);
        assert!((v.angle() - before).abs() < 1e-12);
        assert!((v.length() - 10.0).abs() < 1e-12);
    }
}
