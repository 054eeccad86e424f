//! Midpoint-family rasterizers.
//!
//! Same contracts as [`crate::raster::bresenham`], driven by midpoint
//! decision variables instead of an accumulating error term: each step
//! tests which side of the ideal curve the midpoint between the two
//! candidate pixels falls on. Interior pixel choices can differ from the
//! Bresenham family by one pixel on near-ties; endpoints, poles and
//! symmetry behave identically.

use crate::error::{Error, Result};
use crate::mark::{Marker, PixelSink};
use crate::raster::octant::{self, Octant};

/// Draw the segment from (x1, y1) to (x2, y2), both endpoints included.
///
/// The decision variable starts at `|minor| - |major|/2` and is updated by
/// `|minor|` or `|minor| - |major|` per step. A degenerate segment still
/// marks its start point.
pub fn draw_line<S: PixelSink>(marker: &mut Marker<S>, x1: i32, y1: i32, x2: i32, y2: i32) {
    let (x1, y1, x2, y2) = octant::upper_half(x1, y1, x2, y2);
    let dx = x2 - x1;
    let dy = y2 - y1;
    let absdx = dx.abs();
    let absdy = dy.abs();

    marker.point(x1, y1);

    match octant::classify(dx, dy) {
        Octant::ShallowRight => {
            let mut d = absdy - absdx / 2;
            let mut y = y1;
            let mut x = x1;
            while x < x2 {
                x += 1;
                if d < 0 {
                    d += absdy;
                } else {
                    d += absdy - absdx;
                    y += 1;
                }
                marker.point(x, y);
            }
        }
        Octant::SteepRight => {
            let mut d = absdx - absdy / 2;
            let mut x = x1;
            let mut y = y1;
            while y < y2 {
                y += 1;
                if d < 0 {
                    d += absdx;
                } else {
                    d += absdx - absdy;
                    x += 1;
                }
                marker.point(x, y);
            }
        }
        Octant::SteepLeft => {
            let mut d = absdx - absdy / 2;
            let mut x = x1;
            let mut y = y1;
            while y < y2 {
                y += 1;
                if d < 0 {
                    d += absdx;
                } else {
                    d += absdx - absdy;
                    x -= 1;
                }
                marker.point(x, y);
            }
        }
        Octant::ShallowLeft => {
            let mut d = absdy - absdx / 2;
            let mut y = y1;
            let mut x = x1;
            while x > x2 {
                x -= 1;
                if d < 0 {
                    d += absdy;
                } else {
                    d += absdy - absdx;
                    y += 1;
                }
                marker.point(x, y);
            }
        }
    }
}

/// Draw the circle of the given center and radius.
///
/// Walks the first octant with x as the major axis (x from r while x > y)
/// and the decision variable `P = 1 - r`. The crossover step is emitted
/// only while x >= y still holds, so the x == y diagonal is marked once.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] for a negative radius. A zero radius
/// marks the center point once.
pub fn draw_circle<S: PixelSink>(marker: &mut Marker<S>, xc: i32, yc: i32, r: i32) -> Result<()> {
    if r < 0 {
        return Err(Error::InvalidRadius { radius: r });
    }

    let mut x = r;
    let mut y = 0;
    marker.oct(xc, yc, x, y);

    let mut p = 1 - r;
    while x > y {
        y += 1;
        if p <= 0 {
            p += 2 * y + 1;
        } else {
            x -= 1;
            p += 2 * y - 2 * x + 1;
        }
        if x < y {
            break;
        }
        marker.oct(xc, yc, x, y);
    }

    Ok(())
}

/// Draw the axis-aligned ellipse of the given center and semi-axes.
///
/// Two-region first-quadrant walk with the canonical midpoint decision
/// terms, scaled by 4 to stay integral; 64-bit arithmetic as in the
/// Bresenham variant. Region 2 emits before stepping and runs while
/// y >= 0, so the y = 0 row is included exactly once.
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

    let mut d = 4 * ry2 - 4 * rx2 * i64::from(ry) + rx2;
    let mut dx = 0i64;
    let mut dy = 8 * rx2 * i64::from(y);

    // Region 1: x is the major axis
    while dx < dy {
        marker.quad(xc, yc, x, y);
        x += 1;
        dx += 8 * ry2;
        if d < 0 {
            d += dx + 4 * ry2;
        } else {
            y -= 1;
            dy -= 8 * rx2;
            d += dx - dy + 4 * ry2;
        }
    }

    // Region 2: y is the major axis; the region-1 boundary point is still
    // unmarked and is emitted first here
    let fx = 2 * i64::from(x) + 1;
    let fy = 2 * i64::from(y) - 2;
    d = ry2 * fx * fx + rx2 * fy * fy - 4 * rx2 * ry2;

    while y >= 0 {
        marker.quad(xc, yc, x, y);
        y -= 1;
        dy -= 8 * rx2;
        if d > 0 {
            d += 4 * rx2 - dy;
        } else {
            x += 1;
            dx += 8 * ry2;
            d += dx - dy + 4 * rx2;
        }
    }

    Ok(())
}
