use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel dimensions of one drawing surface, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Point in scene coordinates, interpreted through the scene transform at
/// paint time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One observation: a value recorded at a Unix-seconds timestamp.
///
/// The wire form is the two-element array `[value, time]`, so a dataset
/// payload deserializes straight into `Vec<Sample>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Sample {
    pub value: f64,
    pub time: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(value: f64, time: f64) -> Self {
        Self { value, time }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((value, time): (f64, f64)) -> Self {
        Self { value, time }
    }
}

impl From<Sample> for (f64, f64) {
    fn from(sample: Sample) -> Self {
        (sample.value, sample.time)
    }
}

/// Axis identity carried in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Value,
    Time,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("value"),
            Self::Time => f.write_str("time"),
        }
    }
}
