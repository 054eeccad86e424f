//! # monoraster
//!
//! Integer-only scan conversion of geometric primitives onto 1-bit
//! bitmaps, serialized as plain-text PBM (P1) or 1-bit grayscale PNG.
//!
//! Lines, circles and axis-aligned ellipses are rasterized with the two
//! classic incremental algorithm families (Bresenham and midpoint),
//! exploiting octant/quadrant symmetry so only one arc segment is ever
//! stepped. Generated geometry flows through a pluggable [`mark::Marker`]
//! that applies the mirroring and the contour-versus-fill choice before
//! touching pixel storage, so the stepping loops know nothing about
//! surfaces or modes.
//!
//! ## Quick Start
//!
//! ```
//! use monoraster::prelude::*;
//!
//! let mut bitmap = Bitmap::new(64, 64)?;
//! let mut marker = Marker::new(&mut bitmap);
//!
//! Circle::from_coords(32, 32, 20).draw(&mut marker)?;
//! marker.set_mode(DrawMode::Fill);
//! Circle::from_coords(32, 32, 8).draw(&mut marker)?;
//!
//! let text = PbmEncoder::encode_to_string(&bitmap);
//! assert!(text.starts_with("P1\n64\n64\n"));
//! # Ok::<(), monoraster::Error>(())
//! ```
//!
//! Everything is single-threaded and synchronous: a drawing session owns
//! its surface, every call runs to completion, and out-of-bounds pixels
//! are clipped silently at the surface.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

/// Monochrome bitmap surface.
pub mod bitmap;

/// Geometric primitives (points, lines, circles, ellipses).
pub mod geometry;

/// Mark dispatch: sinks, draw modes and the marker session.
pub mod mark;

/// Scan-conversion rasterizers (Bresenham and midpoint families).
pub mod raster;

/// Output encoders (PBM, PNG, terminal).
pub mod output;

/// Error types for monoraster operations.
pub mod error;

pub use error::{Error, Result};

/// Commonly used types and traits for convenient imports.
///
/// ```
/// use monoraster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bitmap::Bitmap;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, Ellipse, Line, Point};
    pub use crate::mark::{DrawMode, Marker, PixelSink, PointBuffer};
    pub use crate::output::{PbmEncoder, PngEncoder, TerminalEncoder};
    pub use crate::raster::{bresenham, midpoint, Drawable};
}
