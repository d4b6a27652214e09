//! Geometric primitives for drawing layout and positioning.
//!
//! This module provides the fundamental geometric types used throughout
//! Counterdraw for placing the piece outline, dimension annotations, and
//! info blocks.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in plan space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular range defined by minimum and maximum coordinates
//! - [`Insets`] - Padding values for four sides
//! - [`Projection`] - The mapping from plan space to SVG pixel space
//!
//! # Coordinate System
//!
//! Layout happens in *plan space*: units are inches, the origin sits at the
//! lower-left corner of the piece outline, X increases rightward and Y
//! increases **upward**, like a dimensioned shop drawing. SVG uses the
//! opposite vertical convention (Y increases downward), so the
//! [`Projection`] flips the Y axis while scaling to pixels.

/// A 2D point representing a position in plan coordinate space.
///
/// Points use `f32` coordinates and provide operations for basic vector
/// math. See the [module documentation](self) for the coordinate
/// conventions.
///
/// # Examples
///
/// ```
/// # use counterdraw_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size with padding added to both width and height
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangular coordinate range with minimum and maximum coordinates.
///
/// In plan space the minimum corner is the lower-left and the maximum
/// corner is the upper-right.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from explicit minimum and maximum coordinates.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a new bounds spanning two arbitrary corner points.
    ///
    /// The corners may be given in any order; coordinates are normalized so
    /// that the minimum corner is component-wise smallest.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x().min(b.x()),
            min_y: a.y().min(b.y()),
            max_x: a.x().max(b.x()),
            max_y: a.y().max(b.y()),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns true if the given point lies within the bounds (inclusive).
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use counterdraw_core::geometry::Bounds;
    /// let outline = Bounds::new(0.0, 0.0, 39.37, 19.69);
    /// let annotations = Bounds::new(-0.7, -3.5, 40.07, 20.39);
    ///
    /// let combined = outline.merge(&annotations);
    /// assert_eq!(combined.min_x(), -0.7);
    /// assert_eq!(combined.max_x(), 40.07);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// The mapping from plan space (inches, Y up) to SVG space (pixels, Y down).
///
/// A projection is built from the drawing's view bounds and a uniform
/// scale factor in pixels per inch. The uniform scale preserves the equal
/// aspect ratio the drawing requires; the Y axis is flipped so that plan
/// "up" renders toward the top of the document.
///
/// # Examples
///
/// ```
/// # use counterdraw_core::geometry::{Bounds, Point, Projection};
/// let bounds = Bounds::new(-2.0, -4.0, 12.0, 6.0);
/// let proj = Projection::new(bounds, 10.0);
///
/// // The top-left of the view maps to the SVG origin.
/// let top_left = proj.to_svg(Point::new(-2.0, 6.0));
/// assert_eq!(top_left.x(), 0.0);
/// assert_eq!(top_left.y(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    bounds: Bounds,
    scale: f32,
}

impl Projection {
    /// Creates a projection for the given plan-space view bounds at the
    /// given scale in pixels per inch.
    pub fn new(bounds: Bounds, scale: f32) -> Self {
        Self { bounds, scale }
    }

    /// Returns the plan-space view bounds this projection covers.
    pub fn bounds(self) -> Bounds {
        self.bounds
    }

    /// Returns the scale factor in pixels per inch.
    pub fn scale(self) -> f32 {
        self.scale
    }

    /// Maps a plan-space point into SVG pixel coordinates.
    pub fn to_svg(self, point: Point) -> Point {
        Point::new(
            (point.x() - self.bounds.min_x()) * self.scale,
            (self.bounds.max_y() - point.y()) * self.scale,
        )
    }

    /// Scales a plan-space length into pixels.
    pub fn length(self, plan_length: f32) -> f32 {
        plan_length * self.scale
    }

    /// Returns the size of the SVG viewport in pixels.
    pub fn svg_size(self) -> Size {
        self.bounds.to_size().scale(self.scale)
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new(x, y, x + w, y + h))
    }

    fn scale_strategy() -> impl Strategy<Value = f32> {
        1.0f32..200.0
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Midpoint should always be between (or equal to) both points.
    fn check_midpoint_is_between_points(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let mid = p1.midpoint(p2);

        let min_x = p1.x().min(p2.x());
        let max_x = p1.x().max(p2.x());
        let min_y = p1.y().min(p2.y());
        let max_y = p1.y().max(p2.y());

        prop_assert!(mid.x() >= min_x && mid.x() <= max_x);
        prop_assert!(mid.y() >= min_y && mid.y() <= max_y);
        Ok(())
    }

    /// Merged bounds should contain both original bounds.
    fn check_bounds_merge_contains_both(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged = b1.merge(&b2);

        prop_assert!(merged.min_x() <= b1.min_x() + 0.001);
        prop_assert!(merged.min_y() <= b1.min_y() + 0.001);
        prop_assert!(merged.max_x() >= b1.max_x() - 0.001);
        prop_assert!(merged.max_y() >= b1.max_y() - 0.001);

        prop_assert!(merged.min_x() <= b2.min_x() + 0.001);
        prop_assert!(merged.min_y() <= b2.min_y() + 0.001);
        prop_assert!(merged.max_x() >= b2.max_x() - 0.001);
        prop_assert!(merged.max_y() >= b2.max_y() - 0.001);
        Ok(())
    }

    /// A projected corner of the view bounds always lands inside the viewport.
    fn check_projection_maps_bounds_to_viewport(
        bounds: Bounds,
        scale: f32,
    ) -> Result<(), TestCaseError> {
        let proj = Projection::new(bounds, scale);
        let size = proj.svg_size();

        for point in [
            Point::new(bounds.min_x(), bounds.min_y()),
            Point::new(bounds.max_x(), bounds.min_y()),
            Point::new(bounds.min_x(), bounds.max_y()),
            Point::new(bounds.max_x(), bounds.max_y()),
            bounds.center(),
        ] {
            let mapped = proj.to_svg(point);
            prop_assert!(mapped.x() >= -0.01 && mapped.x() <= size.width() + 0.01);
            prop_assert!(mapped.y() >= -0.01 && mapped.y() <= size.height() + 0.01);
        }
        Ok(())
    }

    /// Projection preserves vertical order by reversing it exactly once:
    /// a plan point above another maps strictly above it in SVG space.
    fn check_projection_reverses_vertical_order(
        bounds: Bounds,
        scale: f32,
    ) -> Result<(), TestCaseError> {
        let proj = Projection::new(bounds, scale);

        let low = Point::new(bounds.center().x(), bounds.min_y());
        let high = Point::new(bounds.center().x(), bounds.max_y());

        let low_svg = proj.to_svg(low);
        let high_svg = proj.to_svg(high);

        prop_assert!(high_svg.y() < low_svg.y());
        prop_assert!(approx_eq!(f32, high_svg.x(), low_svg.x(), epsilon = 0.001));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn midpoint_is_between_points(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_between_points(p1, p2)?;
        }

        #[test]
        fn bounds_merge_contains_both(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_bounds_merge_contains_both(b1, b2)?;
        }

        #[test]
        fn projection_maps_bounds_to_viewport(bounds in bounds_strategy(), scale in scale_strategy()) {
            check_projection_maps_bounds_to_viewport(bounds, scale)?;
        }

        #[test]
        fn projection_reverses_vertical_order(bounds in bounds_strategy(), scale in scale_strategy()) {
            check_projection_reverses_vertical_order(bounds, scale)?;
        }
    }
}
