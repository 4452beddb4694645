//! Error types for transform construction and operation lookup

use std::fmt;

use thiserror::Error;

/// Which pair of view-volume bounds collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// left/right
    Horizontal,
    /// bottom/top
    Vertical,
    /// near/far
    Depth,
}

impl fmt::Display for Extent {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        out.write_str(match self {
            Extent::Horizontal => "left/right",
            Extent::Vertical => "bottom/top",
            Extent::Depth => "near/far",
        })
    }
}

/// Invalid geometric parameters
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TransformError {
    /// Both bounds of one extent are equal, so the volume has no size
    #[error("Degenerate view volume: {extent} bounds are both {value}")]
    DegenerateVolume { extent: Extent, value: f32 },

    /// Rotation axis cannot be normalized
    #[error("Rotation axis has zero length")]
    ZeroAxis,
}

/// Errors from looking up and running a named operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpError {
    #[error("Unknown operation: {0}")]
    Unknown(String),

    #[error("Operation {name} takes {expected} arguments, got {found}")]
    Arity {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Config files that cannot be read or hold unusable values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0}")]
    Parse(String),

    #[error("Invalid value \"{value}\" for setting \"{setting}\" in section \"{section}\"")]
    Invalid {
        section: &'static str,
        setting: &'static str,
        value: String,
    },
}

pub type TransformResult<T> = Result<T, TransformError>;
