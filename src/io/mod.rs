//! Reading OFF files and writing STL files.

use std::io::{self, Cursor, Write};


pub mod off;
pub mod parse;
pub mod stl;


/// Types that can serialize a mesh. The mesh (and everything else needed to
/// write it) is already stored within the type.
///
/// The main method of this trait is `write_to` which writes the mesh to a
/// given `io::Write` destination.
pub trait MeshWriter {
    type Error: From<io::Error>;

    /// Writes the mesh into the given `Write` instance.
    fn write_to(&self, writer: impl Write) -> Result<(), Self::Error>;

    /// Writes the mesh into a `Vec<u8>` which is returned on success.
    fn write_to_memory(&self) -> Result<Vec<u8>, Self::Error> {
        let mut w = Cursor::new(Vec::new());
        self.write_to(&mut w)?;
        Ok(w.into_inner())
    }
}
