//! Handles referring to vertices and faces of a [`Mesh`][crate::Mesh] by
//! position.

use std::fmt;


/// The integer type used to store vertex and face indices.
///
/// OFF files declare their element counts as plain integers; counts that
/// don't fit into this type are saturated by the reader.
pub type DefaultIndex = u32;

macro_rules! make_handle_type {
    ($name:ident, $short:expr, $elem:literal) => {
        #[doc = concat!("A handle referring to a ", $elem, " by its position in the mesh.")]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(DefaultIndex);

        impl $name {
            /// Creates a handle from the given raw index.
            pub fn new(idx: DefaultIndex) -> Self {
                $name(idx)
            }

            /// Returns the raw index.
            pub fn idx(&self) -> DefaultIndex {
                self.0
            }

            /// Returns the raw index as `usize`, ready to index a slice.
            pub fn to_usize(&self) -> usize {
                self.0 as usize
            }
        }

        impl From<usize> for $name {
            /// Panics if `raw` does not fit into [`DefaultIndex`].
            fn from(raw: usize) -> Self {
                assert!(raw <= DefaultIndex::max_value() as usize);
                $name(raw as DefaultIndex)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}{}", $short, self.0)
            }
        }
    }
}

make_handle_type!(FaceHandle, "F", "face");
make_handle_type!(VertexHandle, "V", "vertex");
