#![no_main]

use libfuzzer_sys::fuzz_target;
use offstl::{
    convert::{self, Options},
    io::stl::{Config, DegenerateFacets},
};

fuzz_target!(|data: &[u8]| {
    // The result doesn't matter, it just must not panic.
    let _ = convert::convert_to_memory(data, &Options::default());

    let options = Options {
        stl: Config::new().with_degenerate_facets(DegenerateFacets::Reject),
        strict: true,
    };
    let _ = convert::convert_to_memory(data, &options);
});
