//! Integer 2D geometry used by colliders and textures.
//!
//! Coordinates are discrete (pixel/grid cells). A [`Rectangle`] covers the
//! half-open ranges `[ul.x, br.x)` and `[ul.y, br.y)`, so two rectangles that
//! only share an edge do not intersect.

use std::ops::{Add, Neg, Not, Range, Sub};

use serde::{Deserialize, Serialize};

/// Integer offset used to move points, rectangles, colliders and textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

/// Axis swap: `!Vector::new(1, 2) == Vector::new(2, 1)`.
impl Not for Vector {
    type Output = Vector;

    fn not(self) -> Vector {
        Vector::new(self.dy, self.dx)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.dx + other.dx, self.dy + other.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.dx - other.dx, self.dy - other.dy)
    }
}

/// Integer position on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move the point in place by the vector offsets.
    pub fn move_by(&mut self, vector: Vector) {
        self.x += vector.dx;
        self.y += vector.dy;
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Axis-aligned rectangle given by its upper-left and bottom-right corners.
///
/// Corner ordering is not checked. When `ul` is not above-left of `br` the
/// corresponding range is empty and the rectangle intersects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub ul: Point,
    pub br: Point,
}

impl Rectangle {
    pub fn new(ul: Point, br: Point) -> Self {
        Self { ul, br }
    }

    /// Build a rectangle from its upper-left corner and a width/height.
    pub fn from_wh(ul: Point, w: i32, h: i32) -> Self {
        Self {
            ul,
            br: Point::new(ul.x + w, ul.y + h),
        }
    }

    pub fn x_range(&self) -> Range<i32> {
        self.ul.x..self.br.x
    }

    pub fn y_range(&self) -> Range<i32> {
        self.ul.y..self.br.y
    }

    pub fn width(&self) -> i32 {
        self.br.x - self.ul.x
    }

    pub fn height(&self) -> i32 {
        self.br.y - self.ul.y
    }

    /// True if both axis ranges share at least one integer coordinate.
    pub fn intersects_with(&self, other: &Rectangle) -> bool {
        ranges_overlap(&self.x_range(), &other.x_range())
            && ranges_overlap(&self.y_range(), &other.y_range())
    }

    /// Half-open point containment.
    pub fn contains(&self, point: Point) -> bool {
        self.x_range().contains(&point.x) && self.y_range().contains(&point.y)
    }

    pub fn move_by(&mut self, vector: Vector) {
        self.ul.move_by(vector);
        self.br.move_by(vector);
    }
}

fn ranges_overlap(a: &Range<i32>, b: &Range<i32>) -> bool {
    a.start.max(b.start) < a.end.min(b.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Rectangle {
        Rectangle::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_vector_laws() {
        let a = Vector::new(3, -7);
        let b = Vector::new(-2, 5);
        assert_eq!(-(-a), a);
        assert_eq!(!(!a), a);
        assert_eq!(!a, Vector::new(-7, 3));
        assert_eq!(a + (-a), Vector::ZERO);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_point_move_round_trip() {
        let mut p = Point::new(4, 9);
        let v = Vector::new(-3, 11);
        p.move_by(v);
        assert_eq!(p, Point::new(1, 20));
        p.move_by(-v);
        let (x, y): (i32, i32) = p.into();
        assert_eq!((x, y), (4, 9));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = rect(0, 0, 2, 2);
        let b = rect(2, 0, 4, 2);
        assert!(!a.intersects_with(&b));
        assert!(!b.intersects_with(&a));
    }

    #[test]
    fn test_one_unit_overlap_intersects() {
        let a = rect(0, 0, 3, 2);
        let b = rect(2, 0, 4, 2);
        assert!(a.intersects_with(&b));
        assert!(b.intersects_with(&a));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let rects = [
            rect(0, 0, 2, 2),
            rect(1, 1, 3, 3),
            rect(10, 10, 12, 12),
            rect(-5, -5, 0, 0),
            rect(-1, -1, 1, 1),
            rect(0, 0, 0, 5),
            rect(3, 3, 1, 1),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(a.intersects_with(b), b.intersects_with(a), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_inverted_rectangle_intersects_nothing() {
        let inverted = rect(3, 3, 1, 1);
        assert!(!inverted.intersects_with(&rect(0, 0, 10, 10)));
    }

    #[test]
    fn test_from_wh_and_move() {
        let mut r = Rectangle::from_wh(Point::new(1, 2), 3, 4);
        assert_eq!(r.br, Point::new(4, 6));
        assert_eq!((r.width(), r.height()), (3, 4));
        r.move_by(Vector::new(10, -2));
        assert_eq!(r, rect(11, 0, 14, 4));
        assert!(r.contains(Point::new(11, 0)));
        assert!(!r.contains(Point::new(14, 0)));
    }
}
