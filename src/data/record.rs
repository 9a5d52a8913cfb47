//! The saved canvas: what survives a restart
//!
//! One JSON object under a single storage key:
//!
//! ```json
//! { "points": [{"x": 10, "y": 10}, ...], "pathPoints": [0, 1, 2],
//!   "firstPointIndex": 0, "secondPointIndex": 2, "clockwise": true }
//! ```
//!
//! Both the workspace and the control panel rebuild their view from the
//! same record, so a record is only accepted when it is self-consistent.

use crate::geometry::{build_path, is_drawable_count, CanvasPoint};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot of the workspace, written after every successful path build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCanvas {
    pub points: Vec<CanvasPoint>,
    pub path_points: Vec<usize>,
    pub first_point_index: Option<usize>,
    pub second_point_index: Option<usize>,
    pub clockwise: bool,
}

/// Why a stored record could not be used
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not JSON, or not the expected shape.
    #[error("malformed canvas record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record is only written once a polygon has been drawn.
    #[error("saved polygon has {count} points, outside the drawable range")]
    PolygonSize { count: usize },

    /// An endpoint does not index into the saved points.
    #[error("endpoint index {index} out of range for {count} points")]
    EndpointOutOfRange { index: usize, count: usize },

    /// A path entry does not index into the saved points.
    #[error("path index {index} out of range for {count} points")]
    PathOutOfRange { index: usize, count: usize },

    /// Both endpoints name the same point.
    #[error("first and second endpoint are both point {index}")]
    SameEndpoints { index: usize },

    /// The stored path is not the walk its endpoints and direction give.
    #[error("saved path {stored:?} does not match the rebuilt path {expected:?}")]
    PathMismatch {
        stored: Vec<usize>,
        expected: Vec<usize>,
    },
}

impl SavedCanvas {
    /// Parses and validates a stored record
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let record: SavedCanvas = serde_json::from_str(raw)?;
        record.validate()?;
        Ok(record)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Checks that every index refers to a saved point and that the saved
    /// path is exactly the one its endpoints and direction produce
    pub fn validate(&self) -> Result<(), DecodeError> {
        let count = self.points.len();
        if !is_drawable_count(count) {
            return Err(DecodeError::PolygonSize { count });
        }

        for index in [self.first_point_index, self.second_point_index]
            .into_iter()
            .flatten()
        {
            if index >= count {
                return Err(DecodeError::EndpointOutOfRange { index, count });
            }
        }

        if let Some(&index) = self.path_points.iter().find(|&&i| i >= count) {
            return Err(DecodeError::PathOutOfRange { index, count });
        }

        let (first, second) = (self.first_point_index, self.second_point_index);
        if let (Some(a), Some(b)) = (first, second) {
            if a == b {
                return Err(DecodeError::SameEndpoints { index: a });
            }
        }

        let expected =
            build_path(count, first, second, self.clockwise).unwrap_or_default();
        if self.path_points != expected {
            return Err(DecodeError::PathMismatch {
                stored: self.path_points.clone(),
                expected,
            });
        }

        Ok(())
    }
}
