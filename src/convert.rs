//! Converting an OFF file into an ASCII STL file.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use failure::Fail;
use log::{info, warn};

use crate::io::{
    MeshWriter,
    off::{self, Header},
    stl,
};


#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "failed to read OFF file")]
    Read(#[fail(cause)] off::Error),

    #[fail(display = "failed to write STL file")]
    Write(#[fail(cause)] stl::Error),

    #[fail(
        display = "file declares {} vertices and {} faces, but only {} vertices and {} faces \
            could be read",
        declared_vertices, declared_faces, num_vertices, num_triangles
    )]
    Truncated {
        declared_vertices: usize,
        declared_faces: usize,
        num_vertices: usize,
        num_triangles: usize,
    },
}

impl From<off::Error> for Error {
    fn from(src: off::Error) -> Self {
        Error::Read(src)
    }
}

impl From<stl::Error> for Error {
    fn from(src: stl::Error) -> Self {
        Error::Write(src)
    }
}

/// Settings for [`convert`].
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub stl: stl::Config,

    /// If set, an input file with fewer vertices or faces than declared in
    /// its header is an error ([`Error::Truncated`]). Otherwise, whatever
    /// could be read is converted.
    pub strict: bool,
}

/// Some numbers about a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// The counts declared by the OFF file.
    pub header: Header,
    pub num_vertices: usize,
    pub num_triangles: usize,

    /// Triangles referencing one vertex more than once.
    pub num_degenerate: usize,

    /// Whether the file contained fewer vertices or faces than declared (see
    /// [`off::ReadResults::is_truncated`]).
    pub truncated: bool,
}

/// Reads an OFF file from `input` and writes it as STL to `output`.
///
/// The STL document is completely generated in memory before anything is
/// written to `output`. So if this function fails, nothing was written.
pub fn convert(
    input: impl BufRead,
    output: impl Write,
    options: &Options,
) -> Result<Summary, Error> {
    run(off::Reader::new(input), output, options)
}

/// Like [`convert`], but reads the OFF file at `path`.
pub fn convert_file(
    path: impl AsRef<Path>,
    output: impl Write,
    options: &Options,
) -> Result<Summary, Error> {
    let reader = off::Reader::open(path).map_err(off::Error::Io)?;
    run(reader, output, options)
}

/// Converts `input` and returns the STL document.
pub fn convert_to_memory(input: impl BufRead, options: &Options) -> Result<Vec<u8>, Error> {
    render(off::Reader::new(input), options).map(|(_, data)| data)
}

/// Like [`convert_to_memory`], but reads the OFF file at `path`.
pub fn convert_file_to_memory(
    path: impl AsRef<Path>,
    options: &Options,
) -> Result<Vec<u8>, Error> {
    let reader = off::Reader::open(path).map_err(off::Error::Io)?;
    render(reader, options).map(|(_, data)| data)
}

fn run<R: BufRead>(
    reader: off::Reader<R>,
    mut output: impl Write,
    options: &Options,
) -> Result<Summary, Error> {
    let (summary, data) = render(reader, options)?;
    output.write_all(&data).and_then(|_| output.flush()).map_err(stl::Error::Io)?;

    Ok(summary)
}

/// Reads the whole mesh and generates the complete STL document.
fn render<R: BufRead>(
    reader: off::Reader<R>,
    options: &Options,
) -> Result<(Summary, Vec<u8>), Error> {
    let res = reader.read()?;
    let mesh = &res.mesh;

    let summary = Summary {
        header: res.header,
        num_vertices: mesh.num_vertices(),
        num_triangles: mesh.num_triangles(),
        num_degenerate: mesh.num_degenerate_triangles(),
        truncated: res.is_truncated(),
    };
    info!("{} triangles read", summary.num_triangles);

    if summary.truncated && options.strict {
        return Err(Error::Truncated {
            declared_vertices: summary.header.num_vertices as usize,
            declared_faces: summary.header.num_faces as usize,
            num_vertices: summary.num_vertices,
            num_triangles: summary.num_triangles,
        });
    }
    if summary.num_degenerate > 0 {
        warn!(
            "{} triangles reference a vertex more than once, their normals are undefined",
            summary.num_degenerate,
        );
    }

    let data = options.stl.clone().into_writer(mesh).write_to_memory()?;

    Ok((summary, data))
}
