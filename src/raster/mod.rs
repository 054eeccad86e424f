//! Scan-conversion rasterizers.
//!
//! Two algorithm families produce the same shapes with slightly different
//! interior pixel choices:
//!
//! - **Bresenham**: accumulating error term, compared doubled against the
//!   major delta.
//! - **Midpoint**: decision variable tracking which side of the curve the
//!   midpoint between candidate pixels falls on.
//!
//! Both emit through a [`Marker`], which applies octant/quadrant mirroring
//! and the contour/fill choice.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter."
//! - Foley, van Dam, Feiner, Hughes. *Computer Graphics: Principles and
//!   Practice*, ch. 3 (midpoint scan conversion).

pub mod bresenham;
pub mod midpoint;

pub(crate) mod octant;

use crate::error::Result;
use crate::geometry::{Circle, Ellipse, Line};
use crate::mark::{Marker, PixelSink};

/// Shapes that can rasterize themselves into a [`Marker`].
///
/// `draw` uses the Bresenham family; `draw_midpoint` the midpoint family.
pub trait Drawable {
    /// Rasterize with the Bresenham-family algorithm.
    fn draw<S: PixelSink>(&self, marker: &mut Marker<S>) -> Result<()>;

    /// Rasterize with the midpoint-family algorithm.
    fn draw_midpoint<S: PixelSink>(&self, marker: &mut Marker<S>) -> Result<()>;
}

impl Drawable for Line {
    fn draw<S: PixelSink>(&self, marker: &mut Marker<S>) -> Result<()> {
        bresenham::draw_line(marker, self.start.x, self.start.y, self.end.x, self.end.y);
        Ok(())
    }

    fn draw_midpoint<S: PixelSink>(&self, marker: &mut Marker<S>) -> Result<()> {
        midpoint::draw_line(marker, self.start.x, self.start.y, self.end.x, self.end.y);
        Ok(())
    }
}

impl Drawable for Circle {
    fn draw<S: PixelSink>(&self, marker: &mut Marker<S>) -> Result<()> {
        bresenham::draw_circle(marker, self.center.x, self.center.y, self.radius)
    }

    fn draw_midpoint<S: PixelSink>(&self, marker: &mut Marker<S>) -> Result<()> {
        midpoint::draw_circle(marker, self.center.x, self.center.y, self.radius)
    }
}

impl Drawable for Ellipse {
    fn draw<S: PixelSink>(&self, marker: &mut Marker<S>) -> Result<()> {
        bresenham::draw_ellipse(marker, self.center.x, self.center.y, self.rx, self.ry)
    }

    fn draw_midpoint<S: PixelSink>(&self, marker: &mut Marker<S>) -> Result<()> {
        midpoint::draw_ellipse(marker, self.center.x, self.center.y, self.rx, self.ry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::mark::PointBuffer;

    #[test]
    fn test_drawable_line() {
        let mut marker = Marker::new(PointBuffer::new());
        Line::from_coords(0, 0, 4, 0).draw(&mut marker).unwrap();
        assert_eq!(marker.sink().len(), 5);
    }

    #[test]
    fn test_drawable_circle_both_families() {
        let circle = Circle::from_coords(0, 0, 0);

        let mut a = Marker::new(PointBuffer::new());
        circle.draw(&mut a).unwrap();
        let mut b = Marker::new(PointBuffer::new());
        circle.draw_midpoint(&mut b).unwrap();

        assert!(a.sink().points().contains(&Point::ORIGIN));
        assert!(b.sink().points().contains(&Point::ORIGIN));
    }

    #[test]
    fn test_drawable_ellipse_rejects_negative_axis() {
        let mut marker = Marker::new(PointBuffer::new());
        assert!(Ellipse::from_coords(0, 0, -1, 1).draw(&mut marker).is_err());
    }
}
