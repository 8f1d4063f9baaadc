//! pathmatch - Bézier paths and shape similarity
//!
//! Builds vector paths from SVG path data, measures them by arc length, and
//! scores how alike two paths are once position and size are factored out.
//!
//! ```
//! use pathmatch::{Invariance, Path};
//!
//! let horizontal: Path<f64> = "M 10 10 20 10".parse().unwrap();
//! let vertical: Path<f64> = "M 10 10 10 20".parse().unwrap();
//!
//! assert_eq!(horizontal.length().unwrap(), 10.0);
//! assert!(horizontal.compare_to(&vertical, Invariance::ALL).unwrap() < 0.5);
//! ```

pub mod bounds;
pub mod curves;
pub mod error;
pub mod io;
pub mod path;
pub mod primitives;
pub mod similarity;

pub use bounds::Aabb2;
pub use error::PathError;
pub use io::{parse_path_data, to_path_data};
pub use path::{Path, PathSink, Segment, SegmentKind};
pub use primitives::{Affine2, Point2, Vec2};
pub use similarity::{compare_paths, compare_paths_with, CompareConfig, Invariance};
