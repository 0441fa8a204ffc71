//! Plain value types shared by the lattice, tracker and renderer.

/// A 2D point or offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_polar(angle: f64, length: f64) -> Self {
        Self::new(angle.cos() * length, angle.sin() * length)
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// The two deflection endpoints drawn for one grid point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub side1: Vec2,
    pub side2: Vec2,
}

impl Segment {
    /// Segment of total `length` centred on `center`, pointing along `angle`.
    /// `side1` trails and `side2` leads.
    pub fn centered(center: Vec2, angle: f64, length: f64) -> Self {
        let half = Vec2::from_polar(angle, length / 2.0);
        Self {
            side1: center - half,
            side2: center + half,
        }
    }

    pub fn length(&self) -> f64 {
        self.side1.distance(self.side2)
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.side1 + self.side2) * 0.5
    }

    pub fn is_finite(&self) -> bool {
        self.side1.is_finite() && self.side2.is_finite()
    }
}

/// Drawable area in CSS pixels, read once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Longest possible cursor distance; normalises the linear colour term.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}
