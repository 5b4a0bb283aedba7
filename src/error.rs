//! Error types for the unit-area pipeline.

use std::fmt;

use polars::error::PolarsError;

/// Errors that can occur while turning a raw Voronoi diagram into clipped
/// unit areas. All geometry errors are batch-fatal: the pipeline never
/// repairs geometry or persists partial output.
#[derive(Debug)]
pub enum Error {
    /// The input diagram is not 2-dimensional.
    InvalidDimension(usize),

    /// A ridge has both endpoints at infinity. This only arises from a
    /// degenerate input diagram and is unsupported.
    MalformedDiagram { site: usize },

    /// Clipping a region against the bounding box produced nothing.
    /// A data-quality condition, never dropped silently.
    EmptyClipResult { site: usize },

    /// No site is contained in the region's polygon.
    UnassignedRegion { site: usize },

    /// Reading or writing a tabular artifact failed.
    Table(PolarsError),

    /// Filesystem error while persisting an artifact.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimension(dim) => {
                write!(f, "requires a 2D diagram, got {}D", dim)
            }
            Error::MalformedDiagram { site } => {
                write!(f, "ridge with two endpoints at infinity at site {}", site)
            }
            Error::EmptyClipResult { site } => {
                write!(f, "clipping the region of site {} left no polygon", site)
            }
            Error::UnassignedRegion { site } => {
                write!(f, "no site contained in the region polygon of site {}", site)
            }
            Error::Table(e) => write!(f, "tabular artifact error: {}", e),
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Table(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PolarsError> for Error {
    fn from(e: PolarsError) -> Self {
        Error::Table(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
