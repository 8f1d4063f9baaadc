//! SVG path data parsing and export.
//!
//! Parses the `d` attribute grammar into a [`Path`] and writes a path back
//! out as absolute commands.
//!
//! # Supported Commands
//!
//! - `M`/`m` - Move to; extra pairs are implicit line-tos
//! - `L`/`l` - Line to
//! - `C`/`c` - Cubic Bézier curve
//! - `S`/`s` - Smooth cubic Bézier
//! - `Z`/`z` - Close path with a line
//!
//! Relative groups resolve against the path as it stands after the previous
//! group, so `c` chains follow each other's destinations.
//!
//! # Example
//!
//! ```
//! use pathmatch::io::{parse_path_data, to_path_data};
//!
//! let path = parse_path_data::<f64>("m 10 10 l 10 0 l 0 10 z").unwrap();
//! assert_eq!(path.len(), 4);
//! assert_eq!(to_path_data(&path), "M 10 10 L 20 10 L 20 20 L 10 10");
//! ```

use crate::error::PathError;
use crate::path::{Path, PathSink, Segment};
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt::{self, Write as _};
use std::str::FromStr;

const COMMAND_LETTERS: &[char] = &['M', 'm', 'L', 'l', 'C', 'c', 'S', 's', 'Z', 'z'];

/// Parses SVG path data into a path.
///
/// An empty or blank string gives an empty path.
///
/// # Errors
///
/// [`PathError::MalformedPathData`] if the text holds anything other than
/// the supported commands and numbers, or a command has the wrong number of
/// coordinates. No partial path is returned.
///
/// # Example
///
/// ```
/// use pathmatch::io::parse_path_data;
///
/// let path = parse_path_data::<f64>("M100,10 50,50 L100,100 150,50").unwrap();
/// assert_eq!(path.len(), 4);
///
/// assert!(parse_path_data::<f64>("M 0 0 H 10").is_err());
/// ```
pub fn parse_path_data<F: Float + FromStr>(data: &str) -> Result<Path<F>, PathError> {
    let mut parser = PathDataParser::new(data);
    match parser.parse() {
        Ok(path) => {
            tracing::debug!(
                commands = parser.commands,
                segments = path.len(),
                "parsed path data"
            );
            Ok(path)
        }
        Err(err) => {
            tracing::warn!("rejected path data: {}", err);
            Err(err)
        }
    }
}

/// Writes a path as absolute SVG path data.
///
/// Every segment becomes one `M`, `L`, `Q` or `C` command. Closing lines are
/// written as plain `L` commands.
pub fn to_path_data<F: Float + fmt::Display>(path: &Path<F>) -> String {
    let mut writer = SvgWriter::default();
    path.replay(&mut writer);
    writer.finish()
}

// ============================================================================
// Internal implementation
// ============================================================================

/// Collects segments into path data text.
#[derive(Debug, Default)]
struct SvgWriter {
    out: String,
}

impl SvgWriter {
    fn command<F: fmt::Display>(&mut self, letter: char, points: &[Point2<F>]) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push(letter);
        for p in points {
            // Writing to a String cannot fail
            let _ = write!(self.out, " {} {}", p.x, p.y);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

impl<F: fmt::Display> PathSink<F> for SvgWriter {
    fn move_to(&mut self, to: Point2<F>) {
        self.command('M', &[to]);
    }

    fn line_to(&mut self, to: Point2<F>) {
        self.command('L', &[to]);
    }

    fn quad_to(&mut self, control: Point2<F>, to: Point2<F>) {
        self.command('Q', &[control, to]);
    }

    fn cubic_to(&mut self, control_a: Point2<F>, control_b: Point2<F>, to: Point2<F>) {
        self.command('C', &[control_a, control_b, to]);
    }
}

/// Path data parser.
struct PathDataParser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    commands: usize,
}

impl<'a> PathDataParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            commands: 0,
        }
    }

    fn parse<F: Float + FromStr>(&mut self) -> Result<Path<F>, PathError> {
        let mut path = Path::new();

        self.skip_separators();
        if let Some(&(pos, c)) = self.chars.peek() {
            if !is_command(c) {
                return Err(PathError::malformed(
                    self.run_from(pos),
                    "text before the first command",
                ));
            }
        }

        while let Some((start, letter)) = self.chars.next() {
            let args: Vec<F> = self.parse_arguments(start)?;
            self.apply(&mut path, letter, &args, start)?;
            self.commands += 1;
            self.skip_separators();
        }

        Ok(path)
    }

    /// Reads numbers up to the next command letter or the end of input.
    fn parse_arguments<F: Float + FromStr>(&mut self, start: usize) -> Result<Vec<F>, PathError> {
        let mut args = Vec::new();
        loop {
            self.skip_separators();
            match self.chars.peek() {
                None => break,
                Some(&(_, c)) if is_command(c) => break,
                Some(_) => match self.parse_number::<F>() {
                    Some(n) if n.is_finite() => args.push(n),
                    Some(_) => {
                        return Err(PathError::malformed(
                            self.run_from(start),
                            "number out of range",
                        ))
                    }
                    None => {
                        return Err(PathError::malformed(
                            self.run_from(start),
                            "expected a number",
                        ))
                    }
                },
            }
        }
        Ok(args)
    }

    fn apply<F: Float>(
        &self,
        path: &mut Path<F>,
        letter: char,
        args: &[F],
        start: usize,
    ) -> Result<(), PathError> {
        let group = match letter {
            'M' | 'm' | 'L' | 'l' => 2,
            'S' | 's' => 4,
            'C' | 'c' => 6,
            _ => 0,
        };
        if group > 0 {
            if args.is_empty() {
                return Err(PathError::malformed(self.run_from(start), "missing arguments"));
            }
            if args.len() % group != 0 {
                return Err(PathError::malformed(
                    self.run_from(start),
                    "argument count does not fit the command",
                ));
            }
        }

        let points: Vec<Point2<F>> = args
            .chunks_exact(2)
            .map(|pair| Point2::new(pair[0], pair[1]))
            .collect();

        match letter {
            'M' => {
                path.append(Segment::MoveTo(points[0]));
                for &p in &points[1..] {
                    path.append(Segment::LineTo(p));
                }
            }
            'm' => {
                path.append_relative(Segment::MoveTo(points[0]));
                for &p in &points[1..] {
                    path.append_relative(Segment::LineTo(p));
                }
            }
            'L' => points.iter().for_each(|&p| path.append(Segment::LineTo(p))),
            'l' => points
                .iter()
                .for_each(|&p| path.append_relative(Segment::LineTo(p))),
            'C' | 'c' => {
                for c in points.chunks_exact(3) {
                    let segment = Segment::CubicTo {
                        control_a: c[0],
                        control_b: c[1],
                        to: c[2],
                    };
                    if letter == 'C' {
                        path.append(segment);
                    } else {
                        path.append_relative(segment);
                    }
                }
            }
            'S' => {
                for s in points.chunks_exact(2) {
                    path.add_smooth_curve(s[0], s[1]);
                }
            }
            's' => {
                for s in points.chunks_exact(2) {
                    path.append_relative_smooth_curve(s[0], s[1]);
                }
            }
            _ => path.close_with_line(),
        }

        Ok(())
    }

    fn skip_separators(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() || c == ',' {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    /// Consumes digits and returns them.
    fn take_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        digits
    }

    /// Parses one number, or returns `None` if the text is not a number.
    ///
    /// A trailing `.` is accepted; an exponent needs at least one digit.
    fn parse_number<F: Float + FromStr>(&mut self) -> Option<F> {
        let mut negative = false;
        if let Some(&(_, c)) = self.chars.peek() {
            if c == '-' || c == '+' {
                negative = c == '-';
                self.chars.next();
            }
        }

        let integer = self.take_digits();
        let mut fraction = String::new();
        if let Some(&(_, '.')) = self.chars.peek() {
            self.chars.next();
            fraction = self.take_digits();
        }
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut exponent = String::from("0");
        if let Some(&(_, c)) = self.chars.peek() {
            if c == 'e' || c == 'E' {
                self.chars.next();
                let mut sign = "";
                if let Some(&(_, c)) = self.chars.peek() {
                    if c == '-' || c == '+' {
                        sign = if c == '-' { "-" } else { "" };
                        self.chars.next();
                    }
                }
                let digits = self.take_digits();
                if digits.is_empty() {
                    return None;
                }
                exponent = format!("{sign}{digits}");
            }
        }

        // Normalized so every float FromStr accepts it
        let text = format!(
            "{}{}.{}e{}",
            if negative { "-" } else { "" },
            if integer.is_empty() { "0" } else { &integer },
            if fraction.is_empty() { "0" } else { &fraction },
            exponent
        );
        text.parse().ok()
    }

    /// The text from `start` up to the next command letter after it.
    fn run_from(&self, start: usize) -> &'a str {
        let rest = &self.input[start..];
        let skip = rest.chars().next().map_or(0, char::len_utf8);
        let end = rest[skip..]
            .find(is_command)
            .map_or(rest.len(), |i| i + skip);
        &rest[..end]
    }
}

fn is_command(c: char) -> bool {
    COMMAND_LETTERS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parse(data: &str) -> Path<f64> {
        parse_path_data(data).unwrap()
    }

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_parse_linear_path() {
        let path = parse("M100,10 50,50 L100,100 150,50");
        assert_eq!(path.len(), 4);
        assert_eq!(
            path.control_polygon(),
            vec![p(100.0, 10.0), p(50.0, 50.0), p(100.0, 100.0), p(150.0, 50.0)]
        );
    }

    #[test]
    fn test_parse_relative_linear_path() {
        let path = parse("m100,0 -50,50 l50,50 50,-50");
        assert_eq!(
            path.control_polygon(),
            vec![p(100.0, 0.0), p(50.0, 50.0), p(100.0, 100.0), p(150.0, 50.0)]
        );
    }

    #[test]
    fn test_relative_move_applies_offset_once() {
        let path = parse("M10,10 L20,20 m5,5");
        assert_eq!(path.current_point(), p(25.0, 25.0));
    }

    #[test]
    fn test_parse_tricky_relative_curve() {
        let path = parse(
            "M13,50.5c1.75,0.62,3.25,0.88,5,0.25c0.97-0.35,9.75-3.5,11.25-4s2.86,1.16,2,2.75\
             c-7.62,14.12-7.38,9.25-0.25,19c0.99,1.35,1,3.25-0.5,4.5s-6.88,6-11.25,9.25",
        );
        let expected = [
            p(13.0, 50.5),
            p(14.75, 51.12),
            p(16.25, 51.38),
            p(18.0, 50.75),
            p(18.97, 50.40),
            p(27.75, 47.25),
            p(29.25, 46.75),
            p(30.75, 46.25),
            p(32.11, 47.91),
            p(31.25, 49.5),
        ];
        let points = path.control_polygon();
        for (actual, expected) in points.iter().zip(&expected) {
            assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
            assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_parse_cubic_paths() {
        assert_eq!(parse("M0,0 C20,0 50,30 50,50").len(), 2);
        assert_eq!(parse("M50,0 C100,0 100,100 50,100 0,100 0,100 0,50 L50,50").len(), 4);

        let absolute = parse("M50,0 C100,0 100,100 50,100 0,100 0,100 0,50 L50,50");
        let relative = parse("m50,0 c50,0 50,100 0,100 -50,0 -50,0 -50,-50 l50,0");
        assert_eq!(relative.segments(), absolute.segments());
    }

    #[test]
    fn test_parse_smooth_curves() {
        let absolute = parse("M0,0 S100,0 100,50 0,100 0,100");
        assert_eq!(absolute.len(), 3);
        assert_eq!(absolute.control_polygon().len(), 7);

        let relative = parse("s100,0 100,50 -100,50 -100,50");
        assert_eq!(relative.len(), 3);
        assert_eq!(relative.control_polygon().len(), 7);
        assert_eq!(relative.segments(), absolute.segments());
    }

    #[test]
    fn test_parse_close() {
        let path = parse("M0,0 L10,0 L10,10 Z");
        assert_eq!(path.len(), 4);
        assert_eq!(path.current_point(), p(0.0, 0.0));

        // Arguments after Z are ignored
        let path = parse("M0,0 L10,0 z 5 5");
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_parse_number_forms() {
        let path = parse("M+1.5e1,-.5 L3.,1E-1 L-2e+2 0");
        assert_eq!(
            path.control_polygon(),
            vec![p(15.0, -0.5), p(3.0, 0.1), p(-200.0, 0.0)]
        );
    }

    #[test]
    fn test_parse_glued_fractions() {
        let path = parse("M0.5.5L1-1");
        assert_eq!(path.control_polygon(), vec![p(0.5, 0.5), p(1.0, -1.0)]);
    }

    #[test]
    fn test_parse_whitespace() {
        let path = parse("  M 12, 12\n\t L  4\t5  ");
        assert_eq!(path.control_polygon(), vec![p(12.0, 12.0), p(4.0, 5.0)]);
    }

    #[test]
    fn test_parse_empty() {
        let path = parse("");
        assert!(path.is_empty());
        assert_eq!(path.len(), 1);
        assert!(parse("   ").is_empty());
    }

    #[test]
    fn test_parse_error_unsupported_command() {
        let err = parse_path_data::<f64>("M 0 0 H 10 L 5 5").unwrap_err();
        assert_eq!(
            err,
            PathError::MalformedPathData {
                fragment: "M 0 0 H 10".to_string(),
                reason: "expected a number",
            }
        );
        assert!(parse_path_data::<f64>("M0,0 A5,5 0 0 1 10,0").is_err());
        assert!(parse_path_data::<f64>("M0,0 Q5,5 10,0").is_err());
    }

    #[test]
    fn test_parse_error_leading_text() {
        let err = parse_path_data::<f64>("x M0,0").unwrap_err();
        assert!(matches!(err, PathError::MalformedPathData { .. }));
        assert!(parse_path_data::<f64>("10 10 L 5 5").is_err());
    }

    #[test]
    fn test_parse_error_group_size() {
        assert!(parse_path_data::<f64>("M 10").is_err());
        assert!(parse_path_data::<f64>("M 0 0 L").is_err());
        assert!(parse_path_data::<f64>("M 0 0 C 1 1 2 2").is_err());
        assert!(parse_path_data::<f64>("M 0 0 S 1 1 2 2 3").is_err());

        let err = parse_path_data::<f64>("M 0 0 L 1 2 3 Z").unwrap_err();
        assert_eq!(
            err,
            PathError::MalformedPathData {
                fragment: "L 1 2 3".to_string(),
                reason: "argument count does not fit the command",
            }
        );
    }

    #[test]
    fn test_parse_error_bad_exponent() {
        assert!(parse_path_data::<f64>("M 1e 2").is_err());
        assert!(parse_path_data::<f64>("M - 2").is_err());
    }

    #[test]
    fn test_parse_error_overflow() {
        let err = parse_path_data::<f64>("M 1e400 0").unwrap_err();
        assert!(matches!(
            err,
            PathError::MalformedPathData {
                reason: "number out of range",
                ..
            }
        ));

        // Fits an f64 but not an f32
        assert!(parse_path_data::<f64>("M 1e39 0").is_ok());
        let err = parse_path_data::<f32>("M 1e39 0").unwrap_err();
        assert!(matches!(
            err,
            PathError::MalformedPathData {
                reason: "number out of range",
                ..
            }
        ));
    }

    #[test]
    fn test_f32_support() {
        let path = parse_path_data::<f32>("M 0.5 0.5 L 10.25 0.75").unwrap();
        assert_eq!(path.current_point(), Point2::new(10.25f32, 0.75));
    }

    #[test]
    fn test_write_path_data() {
        let path = parse("M0,0 C20,0 50,30 50,50 L0,50");
        assert_eq!(to_path_data(&path), "M 0 0 C 20 0 50 30 50 50 L 0 50");
        assert_eq!(to_path_data(&Path::<f64>::new()), "M 0 0");
    }

    #[test]
    fn test_write_quadratic() {
        let mut path: Path<f64> = Path::new();
        path.append(Segment::QuadraticTo {
            control: p(5.0, 5.0),
            to: p(10.0, 0.0),
        });
        assert_eq!(to_path_data(&path), "M 0 0 Q 5 5 10 0");
    }

    #[test]
    fn test_roundtrip() {
        let source = parse("m50,0 c50,0 50,100 0,100 s-50,0 -50,-50 z");
        let written = to_path_data(&source);
        assert_eq!(parse(&written).segments(), source.segments());
    }
}
