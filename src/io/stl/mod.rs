//! Writing ASCII STL files.
//!
//! Only the ASCII flavor of STL is supported. The layout of the written file
//! is fixed and matches what other tools of the VCG family write, including
//! the solid name (see [`DEFAULT_SOLID_NAME`]).

use std::io;

use failure::Fail;

use crate::FaceHandle;


mod write;


pub use self::write::{Config, Writer};


/// The solid name used when the user didn't specify one.
pub const DEFAULT_SOLID_NAME: &str = "vcg";

/// Number of digits after the decimal point of every written number.
pub const FLOAT_PRECISION: usize = 6;

/// What to do with facets whose normal can't be computed (because the
/// triangle has no area).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateFacets {
    /// Write the facet anyway. The normal components are written as `nan`
    /// (or `inf`), which many tools accept and recompute.
    Propagate,

    /// Abort writing with [`Error::DegenerateFacet`].
    Reject,
}

impl Default for DegenerateFacets {
    fn default() -> Self {
        DegenerateFacets::Propagate
    }
}

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "IO error: {}", _0)]
    Io(io::Error),

    #[fail(display = "triangle {:?} is degenerate, its normal is undefined", face)]
    DegenerateFacet {
        face: FaceHandle,
    },
}

impl From<io::Error> for Error {
    fn from(src: io::Error) -> Self {
        Error::Io(src)
    }
}
