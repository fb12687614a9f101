//! Known-answer vectors and structural checks for [`crate::window::generate`].
//!
//! Vector files hold one case per line:
//!
//! ```text
//! # page total offset => expected (0 marks a gap)
//! 5 10 1 => 1,0,4,5,6,0,10
//! ```

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;
use thiserror::Error;

use crate::window::{self, Marker, Window};

static VECTOR_LINE_RE: OnceLock<Regex> = OnceLock::new();

fn vector_line_re() -> &'static Regex {
    VECTOR_LINE_RE.get_or_init(|| {
        Regex::new(r"^\s*(-?\d+)[\s,]+(-?\d+)[\s,]+(\d+)\s*=>\s*(.*?)\s*$").unwrap()
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector {
    pub page: i64,
    pub total_pages: i64,
    pub neighbor_offset: u32,
    pub expected: Vec<i64>,
}

impl Vector {
    pub fn new(page: i64, total_pages: i64, neighbor_offset: u32, expected: &[i64]) -> Self {
        Self {
            page,
            total_pages,
            neighbor_offset,
            expected: expected.to_vec(),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generate({}, {}, {}) = [{}]",
            self.page,
            self.total_pages,
            self.neighbor_offset,
            self.expected.iter().join(",")
        )
    }
}

fn full_range(total_pages: i64) -> Vec<i64> {
    (1..=total_pages).collect()
}

/// The reference table the pagination control shipped with.
pub fn builtin_vectors() -> Vec<Vector> {
    let mut vectors = Vec::new();

    for page in [-11, 1, 2, 3, 4, 5, 11] {
        vectors.push(Vector::new(page, 5, 1, &[1, 2, 3, 4, 5]));
    }

    for page in [-111, 1, 2, 3, 4] {
        vectors.push(Vector::new(page, 10, 1, &[1, 2, 3, 4, 5, 0, 10]));
    }
    vectors.push(Vector::new(5, 10, 1, &[1, 0, 4, 5, 6, 0, 10]));
    vectors.push(Vector::new(6, 10, 1, &[1, 0, 5, 6, 7, 0, 10]));
    for page in [7, 8, 9, 10, 111] {
        vectors.push(Vector::new(page, 10, 1, &[1, 0, 6, 7, 8, 9, 10]));
    }

    for page in [-222, 1, 2, 3, 4, 5] {
        vectors.push(Vector::new(page, 20, 2, &[1, 2, 3, 4, 5, 6, 7, 0, 20]));
    }
    for page in 6..=15 {
        let mut expected = vec![1, 0];
        expected.extend(page - 2..=page + 2);
        expected.extend([0, 20]);
        vectors.push(Vector::new(page, 20, 2, &expected));
    }
    for page in [16, 17, 18, 19, 20, 222] {
        vectors.push(Vector::new(
            page,
            20,
            2,
            &[1, 0, 14, 15, 16, 17, 18, 19, 20],
        ));
    }

    vectors.push(Vector::new(1, 100, 100, &full_range(100)));

    vectors
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyViolation {
    NotEmpty { len: usize },
    NotFullRange,
    FirstNotPageOne { found: Option<Marker> },
    LastNotTotal { found: Option<Marker>, total_pages: i64 },
    ConsecutiveEllipsis { index: usize },
    PageOutOfRange { page: i64, total_pages: i64 },
    NotIncreasing { index: usize },
    TooLong { len: usize, max: usize },
}

impl fmt::Display for PropertyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEmpty { len } => {
                write!(f, "expected an empty window, got {len} markers")
            }
            Self::NotFullRange => f.write_str("short list does not enumerate every page"),
            Self::FirstNotPageOne { found } => write!(f, "first marker is {found:?}, not page 1"),
            Self::LastNotTotal { found, total_pages } => {
                write!(f, "last marker is {found:?}, not page {total_pages}")
            }
            Self::ConsecutiveEllipsis { index } => {
                write!(f, "two ellipsis markers in a row at index {index}")
            }
            Self::PageOutOfRange { page, total_pages } => {
                write!(f, "page {page} outside 1..={total_pages}")
            }
            Self::NotIncreasing { index } => {
                write!(f, "page numbers stop increasing at index {index}")
            }
            Self::TooLong { len, max } => write!(f, "window has {len} markers, limit is {max}"),
        }
    }
}

/// Structural properties every window must satisfy, independent of the
/// current page.
pub fn check_properties(
    window: &Window,
    total_pages: i64,
    neighbor_offset: u32,
) -> Vec<PropertyViolation> {
    let mut out = Vec::new();

    if total_pages <= 0 {
        if !window.is_empty() {
            out.push(PropertyViolation::NotEmpty { len: window.len() });
        }
        return out;
    }

    let max = window::max_len(neighbor_offset);
    if max as i64 >= total_pages {
        if window.to_sentinels() != full_range(total_pages) {
            out.push(PropertyViolation::NotFullRange);
        }
    } else {
        let first = window.markers().first().copied();
        if first != Some(Marker::Page(1)) {
            out.push(PropertyViolation::FirstNotPageOne { found: first });
        }
        let last = window.markers().last().copied();
        if last != Some(Marker::Page(total_pages)) {
            out.push(PropertyViolation::LastNotTotal {
                found: last,
                total_pages,
            });
        }
    }

    if window.len() > max {
        out.push(PropertyViolation::TooLong {
            len: window.len(),
            max,
        });
    }

    for (index, (a, b)) in window.iter().tuple_windows().enumerate() {
        if a.is_ellipsis() && b.is_ellipsis() {
            out.push(PropertyViolation::ConsecutiveEllipsis { index: index + 1 });
        }
    }

    for page in window.pages() {
        if page < 1 || page > total_pages {
            out.push(PropertyViolation::PageOutOfRange { page, total_pages });
        }
    }

    let mut previous: Option<i64> = None;
    for (index, marker) in window.iter().enumerate() {
        if let Marker::Page(page) = *marker {
            if previous.map_or(false, |p| page <= p) {
                out.push(PropertyViolation::NotIncreasing { index });
            }
            previous = Some(page);
        }
    }

    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckFailure {
    pub vector: Vector,
    pub actual: Vec<i64>,
    pub violations: Vec<PropertyViolation>,
}

impl CheckFailure {
    pub fn mismatched(&self) -> bool {
        self.actual != self.vector.expected
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub total: usize,
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    pub fn passed(&self) -> usize {
        self.total - self.failures.len()
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn check_vector(vector: &Vector) -> Option<CheckFailure> {
    let window = window::generate(vector.page, vector.total_pages, vector.neighbor_offset);
    let actual = window.to_sentinels();
    let violations = check_properties(&window, vector.total_pages, vector.neighbor_offset);
    if actual == vector.expected && violations.is_empty() {
        return None;
    }
    Some(CheckFailure {
        vector: vector.clone(),
        actual,
        violations,
    })
}

pub fn run(vectors: &[Vector]) -> CheckReport {
    CheckReport {
        total: vectors.len(),
        failures: vectors.iter().filter_map(check_vector).collect(),
    }
}

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read vector file: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}: '{content}'")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("vector file has no vectors: {path}")]
    Empty { path: String },
}

fn parse_line(line_no: usize, line: &str) -> Result<Vector, VectorError> {
    let parse_err = |reason: &str| VectorError::Parse {
        line: line_no,
        content: line.trim().to_string(),
        reason: reason.to_string(),
    };

    let caps = vector_line_re()
        .captures(line)
        .ok_or_else(|| parse_err("expected 'PAGE TOTAL OFFSET => E1,E2,...'"))?;

    let page: i64 = caps[1].parse().map_err(|_| parse_err("invalid page"))?;
    let total_pages: i64 = caps[2].parse().map_err(|_| parse_err("invalid total"))?;
    let neighbor_offset: u32 = caps[3].parse().map_err(|_| parse_err("invalid offset"))?;
    if neighbor_offset > window::MAX_NEIGHBOR_OFFSET {
        return Err(parse_err(&format!(
            "offset exceeds {}",
            window::MAX_NEIGHBOR_OFFSET
        )));
    }

    let expected = caps[4]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| parse_err("invalid expected marker"))?;

    Ok(Vector {
        page,
        total_pages,
        neighbor_offset,
        expected,
    })
}

pub fn parse_vectors(text: &str) -> Result<Vec<Vector>, VectorError> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.push(parse_line(idx + 1, line)?);
    }
    Ok(out)
}

pub fn load_vectors(path: &Path) -> Result<Vec<Vector>, VectorError> {
    let text = std::fs::read_to_string(path).map_err(|e| VectorError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let vectors = parse_vectors(&text)?;
    if vectors.is_empty() {
        return Err(VectorError::Empty {
            path: path.display().to_string(),
        });
    }
    Ok(vectors)
}
