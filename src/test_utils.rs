//! Helpers for unit tests.

/// Panics, pointing at the first line where the generated STL document
/// differs from the expected one. The whole document is written to
/// `dump.stl`.
pub(crate) fn stl_mismatch(actual: &[u8], expected: &[u8], filename: &str) {
    std::fs::write("dump.stl", actual).expect("failed to dump actual data");

    let actual = String::from_utf8_lossy(actual);
    let expected = String::from_utf8_lossy(expected);
    let line = expected.lines()
        .zip(actual.lines())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| std::cmp::min(expected.lines().count(), actual.lines().count()));

    panic!(
        "output differs from '{}' in line {} (written to 'dump.stl')\n  \
            expected: {:?}\n  actual:   {:?}",
        filename,
        line + 1,
        expected.lines().nth(line),
        actual.lines().nth(line),
    );
}

/// Asserts that `$actual` equals the file `$filename` in the `test_files/`
/// directory next to the calling module.
macro_rules! assert_eq_file {
    ($actual:expr, $filename:expr) => {
        let actual: &[u8] = $actual;
        let expected = include_bytes!(concat!("test_files/", $filename)) as &[u8];
        if actual != expected {
            crate::test_utils::stl_mismatch(actual, expected, $filename);
        }
    }
}

#[test]
#[should_panic(expected = "in line 2")]
fn mismatch_names_first_differing_line() {
    stl_mismatch(b"solid vcg\n facet normal\n", b"solid vcg\nendsolid vcg\n", "x.stl");
}
