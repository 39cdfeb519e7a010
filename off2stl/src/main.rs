use std::{
    fs,
    io,
    path::Path,
};

use failure::{Error, ResultExt};
use log::{error, info, LevelFilter};
use structopt::StructOpt;

use offstl::{
    convert::{self, Options},
    io::stl::{self, DegenerateFacets},
};

mod args;

use crate::args::Args;


/// We just catch potential errors here and print them. The actual useful
/// code is in `run()`.
fn main() {
    let args = Args::from_args();
    init_logger(&args);

    if let Err(e) = run(&args) {
        error!("An error occured: {}", e);

        for cause in e.iter_causes() {
            error!("  ... caused by: {}", cause);
        }

        std::process::exit(1);
    }
}

/// All diagnostics go to stderr: stdout is reserved for the STL file.
fn init_logger(args: &Args) {
    let level = if args.quiet { LevelFilter::Warn } else { LevelFilter::Info };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Error> {
    let input = match &args.input {
        Some(input) => input,
        None => {
            // Without input there is nothing to do. That's not an error.
            Args::clap().write_help(&mut io::stderr())?;
            eprintln!();
            return Ok(());
        }
    };

    let degenerate_facets = if args.reject_degenerate {
        DegenerateFacets::Reject
    } else {
        DegenerateFacets::Propagate
    };
    let options = Options {
        stl: stl::Config::new().with_degenerate_facets(degenerate_facets),
        strict: args.strict,
    };

    // The library only writes once the whole document is generated, so on
    // error nothing reaches stdout. The output file is only created after a
    // successful conversion.
    let context = || format!("could not convert '{}'", input.display());
    match &args.output {
        Some(path) => {
            let data = convert::convert_file_to_memory(input, &options).with_context(|_| context())?;
            write_file(path, &data)?;
        }
        None => {
            let stdout = io::stdout();
            convert::convert_file(input, stdout.lock(), &options).with_context(|_| context())?;
        }
    }

    Ok(())
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), Error> {
    fs::write(path, data).context(format!("failed to write '{}'", path.display()))?;
    info!("STL file written to '{}'", path.display());

    Ok(())
}
