use std::io::{self, Write};

use crate::{
    io::MeshWriter,
    math,
    mesh::{Facet, Mesh, Point, Vector},
};
use super::{DegenerateFacets, Error, DEFAULT_SOLID_NAME, FLOAT_PRECISION};


// ===============================================================================================
// ===== STL Config
// ===============================================================================================

/// Used to configure and create a [`Writer`].
#[derive(Clone, Debug)]
pub struct Config {
    solid_name: String,
    degenerate_facets: DegenerateFacets,
}

impl Config {
    pub fn new() -> Self {
        Self {
            solid_name: DEFAULT_SOLID_NAME.into(),
            degenerate_facets: DegenerateFacets::default(),
        }
    }

    /// Sets the solid name for this file.
    ///
    /// The given name must be an ASCII string without line breaks (otherwise
    /// the function panics).
    pub fn with_solid_name(self, name: impl Into<String>) -> Self {
        let solid_name = name.into();
        assert!(solid_name.is_ascii());
        assert!(!solid_name.contains(|c: char| c == '\n' || c == '\r'));

        Self {
            solid_name,
            .. self
        }
    }

    /// Sets how facets without a well defined normal are handled.
    pub fn with_degenerate_facets(self, degenerate_facets: DegenerateFacets) -> Self {
        Self {
            degenerate_facets,
            .. self
        }
    }

    pub fn solid_name(&self) -> &str {
        &self.solid_name
    }

    pub fn degenerate_facets(&self) -> DegenerateFacets {
        self.degenerate_facets
    }

    /// Creates a [`Writer`] for the given mesh with `self` as config.
    pub fn into_writer(self, mesh: &Mesh) -> Writer<'_> {
        Writer::new(self, mesh)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}


// ===============================================================================================
// ===== STL Writer
// ===============================================================================================

/// A writer able to write a [`Mesh`] as ASCII STL file.
#[derive(Debug)]
pub struct Writer<'a> {
    config: Config,
    mesh: &'a Mesh,
}

impl<'a> Writer<'a> {
    pub fn new(config: Config, mesh: &'a Mesh) -> Self {
        Self { config, mesh }
    }
}

impl MeshWriter for Writer<'_> {
    type Error = Error;

    fn write_to(&self, mut w: impl Write) -> Result<(), Self::Error> {
        writeln!(w, "solid {}", self.config.solid_name)?;

        for facet in self.mesh.facets() {
            if self.config.degenerate_facets == DegenerateFacets::Reject
                && math::is_degenerate_normal(facet.normal)
            {
                return Err(Error::DegenerateFacet { face: facet.face });
            }

            write_facet(&mut w, &facet)?;
        }

        writeln!(w, "endsolid {}", self.config.solid_name)?;
        w.flush()?;

        Ok(())
    }
}


// ===============================================================================================
// ===== Functions for body writing
// ===============================================================================================

fn write_facet(w: &mut impl Write, facet: &Facet) -> Result<(), io::Error> {
    write!(w, " facet normal")?;
    write_ascii_normal(w, facet.normal)?;
    writeln!(w)?;

    writeln!(w, "   outer loop")?;
    for &pos in &facet.positions {
        write!(w, "     vertex")?;
        write_ascii_position(w, pos)?;
        writeln!(w)?;
    }
    writeln!(w, "   endloop")?;
    writeln!(w, " endfacet")?;

    Ok(())
}

/// Each component is preceded by one space and a sign slot (space or `-`),
/// so that the columns line up.
fn write_ascii_normal(w: &mut impl Write, n: Vector) -> Result<(), io::Error> {
    for &v in &[n.x, n.y, n.z] {
        write!(w, " ")?;
        if !v.is_sign_negative() {
            write!(w, " ")?;
        }
        write_ascii_f64(w, v)?;
    }

    Ok(())
}

/// Each coordinate is preceded by two spaces.
fn write_ascii_position(w: &mut impl Write, p: Point) -> Result<(), io::Error> {
    for &v in &[p.x, p.y, p.z] {
        write!(w, "  ")?;
        write_ascii_f64(w, v)?;
    }

    Ok(())
}

/// Writes the given `f64` in scientific notation, e.g. `-1.234560e+02`.
///
/// The STL "specification" only says that numbers look like `1.23456E+789`.
/// We write [`FLOAT_PRECISION`] digits after the decimal point and an
/// exponent with explicit sign and at least two digits (the `%e` format of C,
/// which most STL readers are tested against). NaN and infinity are written
/// as `nan` and `inf` (with `-` if the sign bit is set).
pub(crate) fn write_ascii_f64(w: &mut impl Write, v: f64) -> Result<(), io::Error> {
    if !v.is_finite() {
        let sign = if v.is_sign_negative() { "-" } else { "" };
        let name = if v.is_nan() { "nan" } else { "inf" };
        return write!(w, "{}{}", sign, name);
    }

    // Rust writes the exponent without sign and padding, e.g. `1.5e2`.
    let formatted = format!("{:.*e}", FLOAT_PRECISION, v);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let exp_sign = if exponent < 0 { '-' } else { '+' };

    write!(w, "{}e{}{:02}", mantissa, exp_sign, exponent.abs())
}
