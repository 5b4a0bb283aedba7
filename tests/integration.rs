use voroarea::{
    AreaOptions, BoundingBox, Error, RawDiagram, Ridge, VertexRef, compute_areas, owner_site,
};

/// The four unit-square corners share a single Voronoi vertex at the center;
/// every region is unbounded. Built by hand because the degenerate cocircular
/// layout defeats brute-force construction.
fn corner_diagram() -> RawDiagram {
    let f = VertexRef::Finite(0);
    let inf = VertexRef::AtInfinity;
    RawDiagram {
        dim: 2,
        sites: vec![
            0.0, 0.0,
            0.0, 1.0,
            1.0, 0.0,
            1.0, 1.0,
        ],
        vertices: vec![0.5, 0.5],
        regions: vec![vec![f, inf], vec![f, inf], vec![f, inf], vec![f, inf]],
        ridges: vec![
            Ridge { sites: [0, 1], vertices: [inf, f] },
            Ridge { sites: [0, 2], vertices: [inf, f] },
            Ridge { sites: [1, 3], vertices: [inf, f] },
            Ridge { sites: [2, 3], vertices: [inf, f] },
        ],
    }
}

#[test]
fn test_four_corners_yield_quadrants() {
    let diagram = corner_diagram();
    let areas = compute_areas(&diagram, &AreaOptions::default()).expect("pipeline should succeed");

    assert_eq!(areas.len(), 4);
    let units: Vec<usize> = areas.iter().map(|a| a.unit).collect();
    assert_eq!(units, vec![0, 1, 2, 3], "one area per corner, keyed by site index");

    // Quadrant midpoints; area i must contain its own midpoint and no other.
    let midpoints = [
        [0.25, 0.25],
        [0.25, 0.75],
        [0.75, 0.25],
        [0.75, 0.75],
    ];
    for (i, area) in areas.iter().enumerate() {
        assert!(
            (area.polygon.area() - 0.25).abs() < 1e-9,
            "quadrant {} area was {}",
            i,
            area.polygon.area()
        );
        for (m, midpoint) in midpoints.iter().enumerate() {
            assert_eq!(
                area.polygon.contains(midpoint[0], midpoint[1]),
                m == i,
                "quadrant {} vs midpoint {}",
                i,
                m
            );
        }
    }
}

#[test]
fn test_single_site_fills_viewport() {
    let diagram = RawDiagram {
        dim: 2,
        sites: vec![0.4, 0.6],
        regions: vec![Vec::new()],
        ..Default::default()
    };
    let viewport = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
    let options = AreaOptions { bounds: Some(viewport), ..Default::default() };

    let areas = compute_areas(&diagram, &options).expect("single site should succeed");
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].unit, 0);
    assert_eq!(areas[0].polygon.vertices(), viewport.corners().as_slice());
}

#[test]
fn test_assignment_is_first_match_not_nearest() {
    // Two candidate polygons both contain site 2's coordinate; the pipeline
    // policy must pick the lowest containing index, not the nearest site.
    let wide = voroarea::Polygon::new(vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
    let sites = vec![
        5.0, 5.0, // outside
        0.9, 0.9, // contained, far from the centroid
        0.5, 0.5, // contained, dead center
    ];
    assert_eq!(owner_site(&wide, &sites), Some(1));
}

#[test]
fn test_non_planar_input_is_rejected() {
    let diagram = RawDiagram {
        dim: 3,
        sites: vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        ..Default::default()
    };
    let err = compute_areas(&diagram, &AreaOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidDimension(3)), "got {:?}", err);
}

#[test]
fn test_malformed_ridge_reports_site() {
    let mut diagram = corner_diagram();
    diagram.ridges[1].vertices = [VertexRef::AtInfinity, VertexRef::AtInfinity];
    let err = compute_areas(&diagram, &AreaOptions::default()).unwrap_err();
    match err {
        Error::MalformedDiagram { site } => assert!(site == 0 || site == 2),
        other => panic!("expected MalformedDiagram, got {:?}", other),
    }
}
