//! Radial corridor geometry.
//!
//! A radial is a single polyline read from SVG path data. Only straight
//! segment commands are understood (`M L H V Z`, absolute and relative);
//! curves are rejected so the caller can skip the path.

use glam::DVec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathDataError {
    #[error("path data is empty")]
    Empty,
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
    #[error("invalid number '{text}' at offset {offset}")]
    InvalidNumber { text: String, offset: usize },
    #[error("path data must start with a moveto command (offset {offset})")]
    MissingMoveTo { offset: usize },
    #[error("coordinates at offset {offset} have no preceding command")]
    DanglingCoordinates { offset: usize },
    #[error("unsupported path command '{command}' at offset {offset}")]
    UnsupportedCommand { command: char, offset: usize },
    #[error("command '{command}' at offset {offset} expects {expected} coordinate(s)")]
    MissingCoordinates {
        command: char,
        offset: usize,
        expected: usize,
    },
    #[error("second subpath at offset {offset}; a radial must be a single polyline")]
    DisjointSubpath { offset: usize },
}

/// A predefined approach/departure corridor.
#[derive(Debug, Clone, PartialEq)]
pub struct Radial {
    id: String,
    points: Vec<DVec2>,
    /// Arc length from the first point to each point.
    cumulative: Vec<f64>,
}

impl Radial {
    /// Build from explicit vertices. At least one point is required.
    pub fn from_points(id: impl Into<String>, points: Vec<DVec2>) -> Result<Self, PathDataError> {
        if points.is_empty() {
            return Err(PathDataError::Empty);
        }
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in points.windows(2) {
            total += pair[0].distance(pair[1]);
            cumulative.push(total);
        }
        Ok(Self {
            id: id.into(),
            points,
            cumulative,
        })
    }

    /// Build from an SVG path `d` attribute.
    pub fn from_path_data(id: impl Into<String>, d: &str) -> Result<Self, PathDataError> {
        let points = parse_path_data(d)?;
        Self::from_points(id, points)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start(&self) -> DVec2 {
        self.points[0]
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Point at arc length `distance` from the start, clamped to the path.
    pub fn point_at_length(&self, distance: f64) -> DVec2 {
        let distance = distance.clamp(0.0, self.length());
        let idx = self.cumulative.partition_point(|c| *c < distance);
        if idx == 0 {
            return self.points[0];
        }
        let seg_start = self.cumulative[idx - 1];
        let seg_len = self.cumulative[idx] - seg_start;
        if seg_len <= 0.0 {
            return self.points[idx];
        }
        let t = (distance - seg_start) / seg_len;
        self.points[idx - 1].lerp(self.points[idx], t)
    }
}

// ---- Path data parsing ----

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    peeked: Option<(usize, Token)>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            peeked: None,
        }
    }

    fn peek(&mut self) -> Result<Option<(usize, Token)>, PathDataError> {
        if self.peeked.is_none() {
            self.peeked = self.scan()?;
        }
        Ok(self.peeked)
    }

    fn next(&mut self) -> Result<Option<(usize, Token)>, PathDataError> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.scan(),
        }
    }

    fn scan(&mut self) -> Result<Option<(usize, Token)>, PathDataError> {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len()
            && (bytes[self.pos].is_ascii_whitespace() || bytes[self.pos] == b',')
        {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return Ok(None);
        }

        let start = self.pos;
        let b = bytes[start];
        if b.is_ascii_alphabetic() {
            self.pos += 1;
            return Ok(Some((start, Token::Command(b as char))));
        }
        if !(b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+') {
            let ch = self.src[start..].chars().next().unwrap_or('?');
            return Err(PathDataError::UnexpectedChar { ch, offset: start });
        }

        let mut end = start;
        if bytes[end] == b'-' || bytes[end] == b'+' {
            end += 1;
        }
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end < bytes.len() && bytes[end] == b'.' {
            end += 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }
        // exponent, only when followed by a digit (optionally signed)
        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp = end + 1;
            if exp < bytes.len() && (bytes[exp] == b'-' || bytes[exp] == b'+') {
                exp += 1;
            }
            if exp < bytes.len() && bytes[exp].is_ascii_digit() {
                while exp < bytes.len() && bytes[exp].is_ascii_digit() {
                    exp += 1;
                }
                end = exp;
            }
        }

        let text = &self.src[start..end];
        self.pos = end;
        text.parse::<f64>()
            .map(|n| Some((start, Token::Number(n))))
            .map_err(|_| PathDataError::InvalidNumber {
                text: text.to_string(),
                offset: start,
            })
    }

    fn expect_number(
        &mut self,
        command: char,
        offset: usize,
        expected: usize,
    ) -> Result<f64, PathDataError> {
        match self.next()? {
            Some((_, Token::Number(n))) => Ok(n),
            _ => Err(PathDataError::MissingCoordinates {
                command,
                offset,
                expected,
            }),
        }
    }

    fn expect_pair(&mut self, command: char, offset: usize) -> Result<DVec2, PathDataError> {
        let x = self.expect_number(command, offset, 2)?;
        let y = self.expect_number(command, offset, 2)?;
        Ok(DVec2::new(x, y))
    }
}

/// Parse SVG path data into polyline vertices.
pub fn parse_path_data(d: &str) -> Result<Vec<DVec2>, PathDataError> {
    let mut lexer = Lexer::new(d);
    let mut points: Vec<DVec2> = Vec::new();
    let mut current = DVec2::ZERO;
    let mut subpath_start = DVec2::ZERO;
    // Command repeated by bare coordinates that follow it.
    let mut implicit: Option<char> = None;

    while let Some((offset, token)) = lexer.peek()? {
        let command = match token {
            Token::Command(c) => {
                lexer.next()?;
                c
            }
            Token::Number(_) => match implicit {
                Some(c) => c,
                None if points.is_empty() => return Err(PathDataError::MissingMoveTo { offset }),
                None => return Err(PathDataError::DanglingCoordinates { offset }),
            },
        };

        if points.is_empty() && !matches!(command, 'M' | 'm') {
            return Err(PathDataError::MissingMoveTo { offset });
        }

        match command {
            'M' | 'm' => {
                if !points.is_empty() {
                    return Err(PathDataError::DisjointSubpath { offset });
                }
                let p = lexer.expect_pair(command, offset)?;
                current = if command == 'm' { current + p } else { p };
                subpath_start = current;
                points.push(current);
                implicit = Some(if command == 'M' { 'L' } else { 'l' });
            }
            'L' | 'l' => {
                let p = lexer.expect_pair(command, offset)?;
                current = if command == 'l' { current + p } else { p };
                points.push(current);
                implicit = Some(command);
            }
            'H' | 'h' => {
                let x = lexer.expect_number(command, offset, 1)?;
                current.x = if command == 'h' { current.x + x } else { x };
                points.push(current);
                implicit = Some(command);
            }
            'V' | 'v' => {
                let y = lexer.expect_number(command, offset, 1)?;
                current.y = if command == 'v' { current.y + y } else { y };
                points.push(current);
                implicit = Some(command);
            }
            'Z' | 'z' => {
                if current != subpath_start {
                    points.push(subpath_start);
                }
                current = subpath_start;
                implicit = None;
            }
            'C' | 'c' | 'S' | 's' | 'Q' | 'q' | 'T' | 't' | 'A' | 'a' => {
                return Err(PathDataError::UnsupportedCommand { command, offset });
            }
            other => {
                return Err(PathDataError::UnexpectedChar { ch: other, offset });
            }
        }
    }

    if points.is_empty() {
        return Err(PathDataError::Empty);
    }
    Ok(points)
}
