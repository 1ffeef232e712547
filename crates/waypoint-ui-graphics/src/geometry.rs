//! Geometric primitives: Point, Size, Rect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Closed-interval containment: points on any edge are inside.
    ///
    /// A rectangle with negative extent contains nothing.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.right() && y <= self.bottom()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let rect = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(rect.contains(50.0, 50.0));
        assert!(rect.contains(150.0, 150.0));
        assert!(rect.contains(150.0, 50.0));
        assert!(rect.contains(50.0, 150.0));
        assert!(rect.contains(100.0, 100.0));
    }

    #[test]
    fn contains_rejects_points_outside() {
        let rect = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(!rect.contains(0.0, 0.0));
        assert!(!rect.contains(49.9, 100.0));
        assert!(!rect.contains(100.0, 150.1));
    }

    #[test]
    fn zero_sized_rect_contains_only_its_origin() {
        let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert!(rect.contains_point(Point::ZERO));
        assert!(!rect.contains(0.1, 0.0));
    }

    #[test]
    fn negative_extent_contains_nothing() {
        let rect = Rect::new(10.0, 10.0, -5.0, -5.0);
        assert!(!rect.contains(10.0, 10.0));
        assert!(!rect.contains(7.0, 7.0));
    }
}
