//! Input/output for path data.
//!
//! Reads and writes the SVG path `d` attribute grammar.

mod svg;

pub use svg::{parse_path_data, to_path_data};
