//! Generates test meshes for benchmarks.

/// Returns an OFF file describing a `n` x `n` grid of quads in the xy-plane
/// (with a bit of noise in z), each split into two triangles.
pub fn grid_off(n: u32) -> Vec<u8> {
    let side = n + 1;
    let mut out = format!("OFF\n{} {} 0\n", side * side, 2 * n * n);

    for y in 0..side {
        for x in 0..side {
            let z = ((x * 7 + y * 13) % 10) as f64 * 0.01;
            out += &format!("{} {} {}\n", x as f64 * 0.5, y as f64 * 0.5, z);
        }
    }

    for y in 0..n {
        for x in 0..n {
            let v = y * side + x;
            out += &format!("3 {} {} {}\n", v, v + 1, v + side + 1);
            out += &format!("3 {} {} {}\n", v, v + side + 1, v + side);
        }
    }

    out.into_bytes()
}
