//! Defines `Args` which is used to parse command line arguments.

use std::path::PathBuf;

use structopt::StructOpt;


/// Converts a triangle mesh from OFF into ASCII STL. The STL file is written
/// to stdout unless `--output` is given; diagnostics go to stderr.
#[derive(StructOpt, Debug)]
#[structopt(name = "off2stl")]
pub struct Args {
    /// Path to the OFF file. If not given, this help message is printed.
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Write the STL file to this path instead of stdout. Existing files are
    /// overwritten. Nothing is written if the conversion fails.
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Fail if a triangle has no area (and thus no normal) instead of
    /// writing `nan` normal components.
    #[structopt(long = "reject-degenerate")]
    pub reject_degenerate: bool,

    /// Fail if the OFF file contains fewer vertices or faces than its header
    /// declares.
    #[structopt(long = "strict")]
    pub strict: bool,

    /// Only print warnings and errors.
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,
}
