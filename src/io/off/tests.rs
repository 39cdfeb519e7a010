use crate::{
    Point, Triangle, VertexHandle,
};
use super::{Error, Header, Reader, ReadResults, MAX_PREALLOCATION};


fn read(data: &[u8]) -> Result<ReadResults, Error> {
    Reader::new(data).read()
}

fn tri(a: u32, b: u32, c: u32) -> Triangle {
    Triangle::new(VertexHandle::new(a), VertexHandle::new(b), VertexHandle::new(c))
}


#[test]
fn read_tetrahedron() -> Result<(), Error> {
    let res = read(include_bytes!("test_files/tetrahedron.off"))?;

    assert_eq!(res.header, Header { num_vertices: 4, num_faces: 4 });
    assert!(!res.is_truncated());
    assert_eq!(res.mesh.vertices(), &[
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ]);
    assert_eq!(res.mesh.triangles(), &[
        tri(0, 2, 1),
        tri(0, 1, 3),
        tri(0, 3, 2),
        tri(1, 2, 3),
    ]);

    Ok(())
}

#[test]
fn skip_malformed_lines() -> Result<(), Error> {
    let res = read(include_bytes!("test_files/messy.off"))?;

    assert_eq!(res.header, Header { num_vertices: 5, num_faces: 3 });
    assert!(!res.is_truncated());
    assert_eq!(res.mesh.vertices(), &[
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.5, 0.0, 0.0),
        Point::new(0.0, 2.5, 0.0),
        Point::new(-10.0, 0.2, 3.0),
        Point::new(4.0, 4.0, 4.0),
    ]);
    assert_eq!(res.mesh.triangles(), &[
        tri(0, 1, 2),
        tri(2, 3, 4),
        tri(1, 3, 4),
    ]);

    Ok(())
}

#[test]
fn header_line_is_ignored() -> Result<(), Error> {
    let res = read(b"this is not OFF\n1 0\n1 2 3\n")?;
    assert_eq!(res.mesh.vertices(), &[Point::new(1.0, 2.0, 3.0)]);

    Ok(())
}

#[test]
fn negative_counts_are_clamped() -> Result<(), Error> {
    let res = read(b"OFF\n-3 -1 0\n1 2 3\n3 0 0 0\n")?;

    assert_eq!(res.header, Header { num_vertices: 0, num_faces: 0 });
    assert_eq!(res.mesh.num_vertices(), 0);
    assert_eq!(res.mesh.num_triangles(), 0);
    assert!(!res.is_truncated());

    Ok(())
}

#[test]
fn huge_counts_are_saturated() {
    let header = Header::parse("99999999999 12").unwrap();
    assert_eq!(header.num_vertices, u32::max_value());
    assert_eq!(header.num_faces, 12);
}

#[test]
fn huge_counts_with_short_input() -> Result<(), Error> {
    let res = read(b"OFF\n4294967295 4294967295 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n")?;

    assert_eq!(res.header, Header {
        num_vertices: u32::max_value(),
        num_faces: u32::max_value(),
    });
    assert!(res.is_truncated());

    // The face line is still part of the vertex section.
    assert_eq!(res.mesh.num_vertices(), 4);
    assert_eq!(res.mesh.vertices()[3], Point::new(3.0, 0.0, 1.0));
    assert_eq!(res.mesh.num_triangles(), 0);

    Ok(())
}

#[test]
fn more_vertices_than_preallocated() -> Result<(), Error> {
    let count = MAX_PREALLOCATION + 3;
    let mut input = format!("OFF\n{} 1 0\n", count).into_bytes();
    for i in 0..count {
        input.extend_from_slice(format!("{} 0 0\n", i).as_bytes());
    }
    input.extend_from_slice(format!("3 0 {} {}\n", count - 2, count - 1).as_bytes());

    let res = read(&input)?;
    assert!(!res.is_truncated());
    assert_eq!(res.mesh.num_vertices(), count);
    assert_eq!(res.mesh.vertices()[count - 1], Point::new((count - 1) as f64, 0.0, 0.0));
    assert_eq!(res.mesh.triangles(), &[
        tri(0, (count - 2) as u32, (count - 1) as u32),
    ]);

    Ok(())
}

#[test]
fn short_vertex_section() -> Result<(), Error> {
    let res = read(b"OFF\n4 1 0\n0 0 0\n1 0 0\n")?;

    assert!(res.is_truncated());
    assert_eq!(res.mesh.num_vertices(), 2);
    assert_eq!(res.mesh.num_triangles(), 0);
    assert_eq!(res.header, Header { num_vertices: 4, num_faces: 1 });

    Ok(())
}

#[test]
fn short_face_section() -> Result<(), Error> {
    let res = read(b"OFF\n3 5 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n3 2 1 0\n")?;

    assert!(res.is_truncated());
    assert_eq!(res.mesh.triangles(), &[tri(0, 1, 2), tri(2, 1, 0)]);

    Ok(())
}

#[test]
fn extra_lines_are_ignored() -> Result<(), Error> {
    let res = read(b"OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n3 0 1 7\n")?;
    assert_eq!(res.mesh.triangles(), &[tri(0, 1, 2)]);

    Ok(())
}

#[test]
fn index_out_of_bounds() {
    let res = read(b"OFF\n4 2 0\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n3 0 1 2\n3 0 1 9\n");

    match res {
        Err(Error::IndexOutOfBounds { line, index, num_vertices }) => {
            assert_eq!(line, 8);
            assert_eq!(index, 9);
            assert_eq!(num_vertices, 4);
        }
        other => panic!("expected index error, got {:?}", other),
    }
}

#[test]
fn negative_index() {
    let res = read(b"OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 -1 2\n");
    assert!(matches!(res, Err(Error::IndexOutOfBounds { index: -1, .. })));
}

#[test]
fn index_equal_to_vertex_count() {
    let res = read(b"OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 3\n");
    assert!(matches!(res, Err(Error::IndexOutOfBounds { index: 3, .. })));
}

#[test]
fn degenerate_face_is_accepted() -> Result<(), Error> {
    let res = read(b"OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 1\n")?;
    assert_eq!(res.mesh.num_degenerate_triangles(), 1);

    Ok(())
}

#[test]
fn invalid_counts() {
    let res = read(b"OFF\nfour two\n0 0 0\n");
    match res {
        Err(Error::InvalidCounts { line: 2, found: Some(found) }) => {
            assert_eq!(found, "four two");
        }
        other => panic!("expected counts error, got {:?}", other),
    }

    assert!(matches!(read(b"OFF\n4\n"), Err(Error::InvalidCounts { found: Some(_), .. })));
}

#[test]
fn missing_counts() {
    assert!(matches!(read(b""), Err(Error::InvalidCounts { found: None, .. })));
    assert!(matches!(read(b"OFF\n"), Err(Error::InvalidCounts { found: None, .. })));
}

#[test]
fn crlf_line_endings() -> Result<(), Error> {
    let res = read(b"OFF\r\n3 1 0\r\n0 0 0\r\n1 0 0\r\n0 1 0\r\n3 0 1 2\r\n")?;

    assert_eq!(res.mesh.num_vertices(), 3);
    assert_eq!(res.mesh.triangles(), &[tri(0, 1, 2)]);

    Ok(())
}

#[test]
fn larger_faces_use_first_three_indices() -> Result<(), Error> {
    let res = read(b"OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n")?;
    assert_eq!(res.mesh.triangles(), &[tri(0, 1, 2)]);

    Ok(())
}

#[test]
fn face_arity_token_is_not_parsed() -> Result<(), Error> {
    let res = read(b"OFF\n3 2 0\n0 0 0\n1 0 0\n0 1 0\nf 0 1 2\n3.0 2 1 0\n")?;
    assert_eq!(res.mesh.triangles(), &[tri(0, 1, 2), tri(2, 1, 0)]);

    Ok(())
}
