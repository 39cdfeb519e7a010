use std::{iter::FusedIterator, slice};

use cgmath::{Point3, Vector3};
use failure::Fail;

use crate::{
    handle::{FaceHandle, VertexHandle},
    math,
};


/// A vertex position.
pub type Point = Point3<f64>;

/// A direction, e.g. a facet normal.
pub type Vector = Vector3<f64>;

/// A triangular face referencing three vertices of its mesh by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [VertexHandle; 3],
}

impl Triangle {
    pub fn new(a: VertexHandle, b: VertexHandle, c: VertexHandle) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Returns `true` if at least two corners reference the same vertex.
    ///
    /// Such a triangle has no area and thus no well defined normal. OFF does
    /// not forbid them, so they are only flagged and not rejected.
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.vertices;
        a == b || b == c || a == c
    }
}

/// Returned by [`Mesh::new`] if a triangle references a vertex that does not
/// exist.
#[derive(Debug, Clone, Fail)]
#[fail(
    display = "triangle {:?} references {:?}, but the mesh only has {} vertices",
    face, vertex, num_vertices
)]
pub struct InvalidIndex {
    pub face: FaceHandle,
    pub vertex: VertexHandle,
    pub num_vertices: usize,
}

/// A triangle mesh: vertex positions and triangles referencing them.
///
/// Every vertex handle stored in a triangle is guaranteed to be valid. That
/// is checked once when the mesh is created; the mesh can't be mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point>,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates a mesh, checking that all triangles only reference existing
    /// vertices.
    pub fn new(vertices: Vec<Point>, triangles: Vec<Triangle>) -> Result<Self, InvalidIndex> {
        let num_vertices = vertices.len();
        for (i, triangle) in triangles.iter().enumerate() {
            let invalid = triangle.vertices.iter().find(|v| v.to_usize() >= num_vertices);
            if let Some(&vertex) = invalid {
                return Err(InvalidIndex {
                    face: FaceHandle::from(i),
                    vertex,
                    num_vertices,
                });
            }
        }

        Ok(Self::from_validated(vertices, triangles))
    }

    /// Creates a mesh from triangles the caller already checked.
    pub(crate) fn from_validated(vertices: Vec<Point>, triangles: Vec<Triangle>) -> Self {
        debug_assert!(triangles.iter().all(|t| {
            t.vertices.iter().all(|v| v.to_usize() < vertices.len())
        }));

        Self { vertices, triangles }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the positions of the three corners of `triangle`.
    ///
    /// Panics if `triangle` is not part of this mesh (i.e. references
    /// vertices this mesh does not have).
    pub fn positions_of(&self, triangle: &Triangle) -> [Point; 3] {
        let [a, b, c] = triangle.vertices;
        [
            self.vertices[a.to_usize()],
            self.vertices[b.to_usize()],
            self.vertices[c.to_usize()],
        ]
    }

    /// Number of triangles referencing the same vertex more than once.
    pub fn num_degenerate_triangles(&self) -> usize {
        self.triangles.iter().filter(|t| t.is_degenerate()).count()
    }

    /// Returns an iterator over all facets in triangle order.
    ///
    /// The normal of each facet is calculated when the facet is yielded.
    pub fn facets(&self) -> Facets<'_> {
        Facets {
            mesh: self,
            triangles: self.triangles.iter().enumerate(),
        }
    }
}

/// A triangle of a mesh together with its unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub face: FaceHandle,
    pub positions: [Point; 3],

    /// Has NaN components if the triangle is degenerate.
    pub normal: Vector,
}

/// Iterator over the facets of a mesh, see [`Mesh::facets`].
#[derive(Debug, Clone)]
pub struct Facets<'a> {
    mesh: &'a Mesh,
    triangles: std::iter::Enumerate<slice::Iter<'a, Triangle>>,
}

impl Iterator for Facets<'_> {
    type Item = Facet;

    fn next(&mut self) -> Option<Self::Item> {
        let (i, triangle) = self.triangles.next()?;
        let positions = self.mesh.positions_of(triangle);
        let [a, b, c] = positions;

        Some(Facet {
            face: FaceHandle::from(i),
            positions,
            normal: math::facet_normal(a, b, c),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.triangles.size_hint()
    }
}

impl ExactSizeIterator for Facets<'_> {}
impl FusedIterator for Facets<'_> {}
