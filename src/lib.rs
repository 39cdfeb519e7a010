//! Converting triangle meshes from the Object File Format (OFF) into ASCII
//! STL.
//!
//! The conversion is a single pass: [`io::off::Reader`] parses and validates
//! the OFF file into a [`Mesh`], [`io::stl::Writer`] streams the facets of
//! that mesh (computing every facet normal right before it is written) and
//! [`convert`] ties both together.
//!
//! ```no_run
//! use offstl::convert::{self, Options};
//!
//! let summary = convert::convert_file("bunny.off", std::io::stdout(), &Options::default())?;
//! eprintln!("{} triangles read", summary.num_triangles);
//! # Ok::<(), failure::Error>(())
//! ```

pub use cgmath;

// Needs to be first so that the macros are visible in all other modules.
#[cfg(test)]
#[macro_use]
mod test_utils;

pub mod convert;
pub mod handle;
pub mod io;
pub mod math;
mod mesh;

pub use self::{
    handle::{DefaultIndex, FaceHandle, VertexHandle},
    mesh::{Facet, Facets, InvalidIndex, Mesh, Point, Triangle, Vector},
};
