//! Reading OFF files.
//!
//! The supported dialect is the one produced by common mesh processing
//! tools for triangle meshes:
//!
//! ```text
//! OFF
//! <num_vertices> <num_faces> [<num_edges>]
//! <x> <y> <z>          (num_vertices times)
//! 3 <a> <b> <c>        (num_faces times)
//! ```
//!
//! The reader is lenient: the first line is not checked, vertex and face
//! lines that can't be parsed are skipped and a file ending early is not an
//! error (see [`ReadResults::is_truncated`]). The only data errors are a
//! broken counts line and faces referencing vertices that don't exist.
//!
//! Faces are always read as triangles: the vertex count at the start of each
//! face line is expected to be `3`, but it is only checked for a warning.
//! Whatever the first token is, the three tokens after it are the indices.

use std::{
    cmp,
    convert::TryFrom,
    collections::TryReserveError,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use failure::Fail;
use log::{debug, info, warn};

use crate::{
    handle::{DefaultIndex, VertexHandle},
    io::parse::{self, LineScanner},
    mesh::{Mesh, Point, Triangle},
};


#[cfg(test)]
mod tests;


#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "IO error: {}", _0)]
    Io(io::Error),

    #[fail(
        display = "expected vertex and face count on line {}, found {:?}",
        line, found
    )]
    InvalidCounts {
        line: usize,
        found: Option<String>,
    },

    #[fail(
        display = "face on line {} references vertex {}, but only {} vertices exist",
        line, index, num_vertices
    )]
    IndexOutOfBounds {
        line: usize,
        index: i64,
        num_vertices: usize,
    },

    #[fail(display = "failed to allocate memory for {} {}", count, what)]
    Alloc {
        what: &'static str,
        count: usize,
        #[fail(cause)]
        cause: TryReserveError,
    },
}

impl From<io::Error> for Error {
    fn from(src: io::Error) -> Self {
        Error::Io(src)
    }
}

impl From<parse::Error> for Error {
    fn from(src: parse::Error) -> Self {
        match src {
            parse::Error::Io(e) => Error::Io(e),
        }
    }
}

/// The element counts declared in the second line of an OFF file.
///
/// Negative counts are stored as 0, counts larger than [`DefaultIndex`] can
/// hold are saturated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub num_vertices: DefaultIndex,
    pub num_faces: DefaultIndex,
}

impl Header {
    /// Parses the counts line. The optional edge count is ignored.
    fn parse(line: &str) -> Option<Self> {
        let [num_vertices, num_faces] = parse::parse_fields::<i64, 2>(line, 0)?;
        Some(Self {
            num_vertices: clamp_count(num_vertices),
            num_faces: clamp_count(num_faces),
        })
    }
}

fn clamp_count(count: i64) -> DefaultIndex {
    DefaultIndex::try_from(cmp::max(count, 0)).unwrap_or(DefaultIndex::max_value())
}

/// Everything read from an OFF file.
#[derive(Debug, Clone)]
pub struct ReadResults {
    pub mesh: Mesh,
    pub header: Header,
}

impl ReadResults {
    /// Returns `true` if the file contained fewer usable vertex or face lines
    /// than declared in its header.
    ///
    /// This is not treated as an error: the mesh simply contains what was
    /// found.
    pub fn is_truncated(&self) -> bool {
        self.mesh.num_vertices() < self.header.num_vertices as usize
            || self.mesh.num_triangles() < self.header.num_faces as usize
    }
}

/// A reader for OFF files.
#[derive(Debug)]
pub struct Reader<R: BufRead> {
    scanner: LineScanner<R>,
}

impl Reader<BufReader<File>> {
    /// Creates a new `Reader` from the given file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Reader<R> {
    /// Creates a new `Reader` from the given `BufRead` instance. If you want
    /// to open a file, rather use [`Reader::open`].
    pub fn new(reader: R) -> Self {
        Self {
            scanner: LineScanner::new(reader),
        }
    }

    /// Reads the whole file.
    ///
    /// On error, nothing read so far is returned.
    pub fn read(mut self) -> Result<ReadResults, Error> {
        let header = self.read_header()?;
        info!(
            "nvertices = {}, ntriangles = {}",
            header.num_vertices,
            header.num_faces,
        );

        let mut vertices = Vec::new();
        reserve(&mut vertices, header.num_vertices as usize, "vertices")?;
        let mut triangles = Vec::new();
        reserve(&mut triangles, header.num_faces as usize, "triangles")?;

        // ----- Vertices -------------------------------------------------
        while vertices.len() < header.num_vertices as usize {
            match self.scanner.next_record::<f64, 3>(0)? {
                Some([x, y, z]) => push(&mut vertices, Point::new(x, y, z), "vertices")?,
                None => break,
            }
        }

        // ----- Faces ----------------------------------------------------
        // The first token of a face line is the number of vertices of that
        // face. It is not required to be a number. We only read triangles:
        // for larger faces, only the first three indices are used.
        while triangles.len() < header.num_faces as usize {
            let (arity, [a, b, c]) = match self.next_face()? {
                Some(face) => face,
                None => break,
            };
            let line = self.scanner.line_number();
            if let Some(arity) = arity.filter(|&n| n != 3) {
                warn!("face on line {} has {} vertices, only the first three are used", line, arity);
            }

            let to_handle = |index: i64| {
                if index >= 0 && (index as u64) < vertices.len() as u64 {
                    Ok(VertexHandle::new(index as DefaultIndex))
                } else {
                    Err(Error::IndexOutOfBounds {
                        line,
                        index,
                        num_vertices: vertices.len(),
                    })
                }
            };
            let triangle = Triangle::new(to_handle(a)?, to_handle(b)?, to_handle(c)?);

            if triangle.is_degenerate() {
                debug!("face on line {} references a vertex more than once", line);
            }
            push(&mut triangles, triangle, "triangles")?;
        }

        let out = ReadResults {
            mesh: Mesh::from_validated(vertices, triangles),
            header,
        };

        if out.is_truncated() {
            warn!(
                "file ended early: read {} of {} vertices and {} of {} faces",
                out.mesh.num_vertices(),
                header.num_vertices,
                out.mesh.num_triangles(),
                header.num_faces,
            );
        }

        Ok(out)
    }

    /// Reads lines until one contains three vertex indices after its first
    /// token. Returns the first token (if it is a number) and the indices.
    fn next_face(&mut self) -> Result<Option<(Option<i64>, [i64; 3])>, Error> {
        while let Some(line) = self.scanner.next_line()? {
            if let Some(indices) = parse::parse_fields::<i64, 3>(&line, 1) {
                let arity = line.split_whitespace().next().and_then(|t| t.parse().ok());
                return Ok(Some((arity, indices)));
            }
        }

        Ok(None)
    }

    fn read_header(&mut self) -> Result<Header, Error> {
        // The first line usually contains "OFF", but we don't care.
        let missing = |line| Error::InvalidCounts { line, found: None };
        if self.scanner.next_line()?.is_none() {
            return Err(missing(2));
        }

        let line = self.scanner.next_line()?.ok_or_else(|| missing(2))?;
        match Header::parse(&line) {
            Some(header) => Ok(header),
            None => Err(Error::InvalidCounts {
                line: 2,
                found: Some(line.into_owned()),
            }),
        }
    }
}

/// Upper bound of elements reserved up front. The counts come from the file
/// and can be arbitrarily large, so beyond this the vectors grow as elements
/// are actually read.
const MAX_PREALLOCATION: usize = 1 << 20;

/// Reserves space for `count` elements (at most [`MAX_PREALLOCATION`]),
/// failing gracefully if that's not possible.
fn reserve<T>(v: &mut Vec<T>, count: usize, what: &'static str) -> Result<(), Error> {
    let count = cmp::min(count, MAX_PREALLOCATION);
    v.try_reserve_exact(count).map_err(|cause| Error::Alloc { what, count, cause })
}

/// Like `Vec::push`, but returns an error instead of aborting if the vector
/// can't grow.
fn push<T>(v: &mut Vec<T>, elem: T, what: &'static str) -> Result<(), Error> {
    if v.len() == v.capacity() {
        let count = v.len() + 1;
        v.try_reserve(1).map_err(|cause| Error::Alloc { what, count, cause })?;
    }
    v.push(elem);

    Ok(())
}
