//! Geometry in list coordinates.
//!
//! `(0, 0)` is the top-left corner of the list viewport and `y` grows
//! downward. Items scrolled above the viewport have negative tops.

/// A position, also used as a translation vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance, used for touch slop checks.
    pub fn distance_to(self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from(pair: (f32, f32)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

/// Width and height of a measured view or of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero or negative.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// An axis-aligned box: a top-left corner plus a size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(left, top),
            size: Size::new(width, height),
        }
    }

    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left() + self.width()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top() + self.height()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        (self.left()..self.right()).contains(&point.x)
            && (self.top()..self.bottom()).contains(&point.y)
    }

    /// Closed containment: every edge counts as inside.
    ///
    /// Header hit-testing uses this, so a tap exactly on a header's bottom
    /// edge lands on the header.
    pub fn contains_inclusive(&self, point: Point) -> bool {
        (self.left()..=self.right()).contains(&point.x)
            && (self.top()..=self.bottom()).contains(&point.y)
    }

    /// The same box moved by `by`.
    pub fn translated(&self, by: Point) -> Rect {
        Rect {
            origin: Point::new(self.origin.x + by.x, self.origin.y + by.y),
            size: self.size,
        }
    }
}

static_assertions::assert_impl_all!(Rect: Send, Sync, Copy);
