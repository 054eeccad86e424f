//! Bresenham-family rasterizers.
//!
//! Each shape is generated with an accumulating integer error term and no
//! multiplies or divides inside the stepping loop. Lines walk one of four
//! octant templates after normalization to the upper half-plane; circles
//! walk the first octant only; ellipses walk the first quadrant in two
//! regions. All symmetry expansion is delegated to the [`Marker`].

use crate::error::{Error, Result};
use crate::mark::{Marker, PixelSink};
use crate::raster::octant::{self, Octant};

/// Draw the segment from (x1, y1) to (x2, y2), both endpoints included.
///
/// The minor axis advances as soon as the doubled error term reaches the
/// major delta (`>=` comparison), which fixes the rounding direction
/// consistently across all four octants. A degenerate segment still marks
/// its start point.
pub fn draw_line<S: PixelSink>(marker: &mut Marker<S>, x1: i32, y1: i32, x2: i32, y2: i32) {
    let (x1, y1, x2, y2) = octant::upper_half(x1, y1, x2, y2);
    let dx = x2 - x1;
    let dy = y2 - y1;

    match octant::classify(dx, dy) {
        Octant::ShallowRight => {
            let mut eps = 0;
            let mut y = y1;
            for x in x1..=x2 {
                marker.point(x, y);
                eps += dy;
                if 2 * eps >= dx {
                    y += 1;
                    eps -= dx;
                }
            }
        }
        Octant::SteepRight => {
            let mut eps = 0;
            let mut x = x1;
            for y in y1..=y2 {
                marker.point(x, y);
                eps += dx;
                if 2 * eps >= dy {
                    x += 1;
                    eps -= dy;
                }
            }
        }
        Octant::SteepLeft => {
            let mut eps = 0;
            let mut x = x1;
            for y in y1..=y2 {
                marker.point(x, y);
                eps -= dx;
                if 2 * eps >= dy {
                    x -= 1;
                    eps -= dy;
                }
            }
        }
        Octant::ShallowLeft => {
            let mut eps = 0;
            let mut y = y1;
            for x in (x2..=x1).rev() {
                marker.point(x, y);
                eps += dy;
                if 2 * eps >= -dx {
                    y += 1;
                    eps += dx;
                }
            }
        }
    }
}

/// Draw the circle of the given center and radius.
///
/// Walks the first octant (x from 0 while x <= y) with the error term
/// `e = 3 - 2r`; the marker mirrors each step into the remaining octants,
/// or emits the span pairs for both (x, y) and (y, x) in fill mode.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] for a negative radius. A zero radius
/// marks the center point once.
pub fn draw_circle<S: PixelSink>(marker: &mut Marker<S>, xc: i32, yc: i32, r: i32) -> Result<()> {
    if r < 0 {
        return Err(Error::InvalidRadius { radius: r });
    }

    let mut x = 0;
    let mut y = r;
    let mut e = 3 - 2 * r;

    while x <= y {
        marker.oct(xc, yc, x, y);
        if e < 0 {
            e += 4 * x + 6;
        } else {
            y -= 1;
            e += 4 * (x - y) + 10;
        }
        x += 1;
    }

    Ok(())
}

/// Draw the axis-aligned ellipse of the given center and semi-axes.
///
/// First-quadrant walk in two regions: region 1 steps x every iteration
/// while the doubled-scaled deltas satisfy dx < dy, region 2 steps y down
/// to (and including) the y = 0 row. Decision arithmetic is 64-bit: the
/// terms carry products of squared semi-axes, which overflow 32 bits for
/// semi-axes beyond a few thousand pixels.
///
/// # Errors
///
/// Returns [`Error::InvalidSemiAxes`] if either semi-axis is negative.
pub fn draw_ellipse<S: PixelSink>(
    marker: &mut Marker<S>,
    xc: i32,
    yc: i32,
    rx: i32,
    ry: i32,
) -> Result<()> {
    if rx < 0 || ry < 0 {
        return Err(Error::InvalidSemiAxes { rx, ry });
    }

    let rx2 = i64::from(rx) * i64::from(rx);
    let ry2 = i64::from(ry) * i64::from(ry);

    let mut x = 0i32;
    let mut y = ry;
    marker.quad(xc, yc, x, y);

    // Decision term and deltas, all scaled by 4 to stay integral
    let mut d = 4 * ry2 - 4 * rx2 * i64::from(ry) + rx2;
    let mut dx = 0i64;
    let mut dy = 8 * rx2 * i64::from(y);

    // Region 1: x is the major axis
    while dx < dy {
        x += 1;
        dx += 8 * ry2;
        if d < 0 {
            d += dx + 4 * ry2;
        } else {
            y -= 1;
            dy -= 8 * rx2;
            d += dx - dy + 4 * ry2;
        }
        marker.quad(xc, yc, x, y);
    }

    // Region 2: y is the major axis; recompute the decision term from the
    // boundary state and run down to the y = 0 row inclusive
    let fx = 2 * i64::from(x) + 1;
    let fy = 2 * i64::from(y) - 2;
    d = ry2 * fx * fx + rx2 * fy * fy - 4 * rx2 * ry2;

    while y > 0 {
        y -= 1;
        dy -= 8 * rx2;
        if d > 0 {
            d += 4 * rx2 - dy;
        } else {
            x += 1;
            dx += 8 * ry2;
            d += dx - dy + 4 * rx2;
        }
        marker.quad(xc, yc, x, y);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::{DrawMode, PointBuffer};
    use std::collections::BTreeSet;

    fn contour_set(draw: impl FnOnce(&mut Marker<PointBuffer>)) -> BTreeSet<(i32, i32)> {
        let mut marker = Marker::new(PointBuffer::new());
        draw(&mut marker);
        marker
            .into_sink()
            .points()
            .iter()
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn test_horizontal_line() {
        let set = contour_set(|m| draw_line(m, 0, 0, 5, 0));
        let expected: BTreeSet<_> = (0..=5).map(|x| (x, 0)).collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_vertical_line() {
        let set = contour_set(|m| draw_line(m, 0, 0, 0, 5));
        let expected: BTreeSet<_> = (0..=5).map(|y| (0, y)).collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_diagonal_line() {
        let set = contour_set(|m| draw_line(m, 0, 0, 3, 3));
        let expected: BTreeSet<_> = (0..=3).map(|i| (i, i)).collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_single_point_segment() {
        let set = contour_set(|m| draw_line(m, 4, 7, 4, 7));
        assert_eq!(set, BTreeSet::from([(4, 7)]));
    }

    #[test]
    fn test_line_direction_independence() {
        // The emitted pixel set must not depend on endpoint order
        let forward = contour_set(|m| draw_line(m, -3, -2, 8, 5));
        let backward = contour_set(|m| draw_line(m, 8, 5, -3, -2));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_steep_left_octant() {
        let set = contour_set(|m| draw_line(m, 0, 0, -2, 5));
        assert!(set.contains(&(0, 0)));
        assert!(set.contains(&(-2, 5)));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_circle_zero_radius() {
        let set = contour_set(|m| draw_circle(m, 10, 10, 0).unwrap());
        assert_eq!(set, BTreeSet::from([(10, 10)]));
    }

    #[test]
    fn test_circle_radius_five_octant_walk() {
        // First-octant steps are (0,5) (1,5) (2,5) (3,4); the rest is mirror
        let set = contour_set(|m| draw_circle(m, 0, 0, 5).unwrap());
        for &(x, y) in &[(0, 5), (1, 5), (2, 5), (3, 4)] {
            assert!(set.contains(&(x, y)));
            assert!(set.contains(&(-x, y)));
            assert!(set.contains(&(x, -y)));
            assert!(set.contains(&(y, x)));
        }
        assert!(!set.contains(&(0, 0)));
        assert!(!set.contains(&(4, 4)));
    }

    #[test]
    fn test_circle_negative_radius_rejected() {
        let mut marker = Marker::new(PointBuffer::new());
        let err = draw_circle(&mut marker, 0, 0, -1).unwrap_err();
        assert!(matches!(err, Error::InvalidRadius { radius: -1 }));
        assert!(marker.sink().is_empty());
    }

    #[test]
    fn test_circle_fill_includes_center_row() {
        let mut marker = Marker::with_mode(PointBuffer::new(), DrawMode::Fill);
        draw_circle(&mut marker, 0, 0, 5).unwrap();
        let set: BTreeSet<_> = marker
            .into_sink()
            .points()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();

        for x in -5..=5 {
            assert!(set.contains(&(x, 0)), "missing ({x}, 0)");
        }
        assert!(set.contains(&(0, 0)));
    }

    #[test]
    fn test_ellipse_quadrant_walk() {
        // rx = ry = 2 degenerates to the r=2 circle pixel set
        let set = contour_set(|m| draw_ellipse(m, 0, 0, 2, 2).unwrap());
        let circle = contour_set(|m| draw_circle(m, 0, 0, 2).unwrap());
        assert_eq!(set, circle);
    }

    #[test]
    fn test_ellipse_poles() {
        let set = contour_set(|m| draw_ellipse(m, 0, 0, 8, 14).unwrap());
        assert!(set.contains(&(0, 14)));
        assert!(set.contains(&(0, -14)));
        assert!(set.contains(&(8, 0)));
        assert!(set.contains(&(-8, 0)));
    }

    #[test]
    fn test_ellipse_zero_axes() {
        let set = contour_set(|m| draw_ellipse(m, 3, 4, 0, 0).unwrap());
        assert_eq!(set, BTreeSet::from([(3, 4)]));
    }

    #[test]
    fn test_ellipse_vertical_degenerate() {
        let set = contour_set(|m| draw_ellipse(m, 0, 0, 0, 3).unwrap());
        let expected: BTreeSet<_> = (-3..=3).map(|y| (0, y)).collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_ellipse_negative_axis_rejected() {
        let mut marker = Marker::new(PointBuffer::new());
        let err = draw_ellipse(&mut marker, 0, 0, 4, -2).unwrap_err();
        assert!(matches!(err, Error::InvalidSemiAxes { rx: 4, ry: -2 }));
        assert!(marker.sink().is_empty());
    }

    #[test]
    fn test_ellipse_large_axes_no_overflow() {
        // 4·rx²·ry ≈ 4.6e13 overflows i32 arithmetic; must complete and
        // still include the poles
        let set = contour_set(|m| draw_ellipse(m, 0, 0, 3000, 2000).unwrap());
        assert!(set.contains(&(0, 2000)));
        assert!(set.contains(&(3000, 0)));
    }
}
