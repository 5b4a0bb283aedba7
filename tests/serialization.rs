use rand::prelude::*;
use rand::rngs::StdRng;

use voroarea::{AreaOptions, AreaTable, adapter, compute_areas, parse_loop, read_sites};

fn sample_sites(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sites = Vec::new();
    for x in 0..4 {
        for y in 0..4 {
            sites.push(x as f64 + rng.gen_range(-0.2..0.2));
            sites.push(y as f64 + rng.gen_range(-0.2..0.2));
        }
    }
    sites
}

#[test]
fn test_round_trip_through_csv() {
    let sites = sample_sites(5);
    let diagram = adapter::naive_diagram(&sites);
    let areas = compute_areas(&diagram, &AreaOptions::default()).unwrap();
    let table = AreaTable::from_areas(&areas);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("areas.csv");
    let path = path.to_str().unwrap();

    table.write_csv(path).expect("write should succeed");
    let restored = AreaTable::read_csv(path).expect("read should succeed");

    assert_eq!(restored.count_rows(), areas.len());
    assert_eq!(restored.units(), table.units());

    for (row, area) in areas.iter().enumerate() {
        let loop_vertices = area.polygon.closed_loop();
        let xs = restored.x_loop(row).expect("X loop must parse");
        let ys = restored.y_loop(row).expect("Y loop must parse");
        assert_eq!(xs.len() * 2, loop_vertices.len());
        for i in 0..xs.len() {
            // Exact, not approximate: the joined strings are shortest
            // round-trip representations.
            assert_eq!(xs[i], loop_vertices[i * 2], "row {} x {}", row, i);
            assert_eq!(ys[i], loop_vertices[i * 2 + 1], "row {} y {}", row, i);
        }
    }
}

#[test]
fn test_loops_are_closed_in_artifact() {
    let sites = sample_sites(9);
    let diagram = adapter::naive_diagram(&sites);
    let areas = compute_areas(&diagram, &AreaOptions::default()).unwrap();
    let table = AreaTable::from_areas(&areas);

    for row in 0..table.count_rows() {
        let xs = table.x_loop(row).unwrap();
        let ys = table.y_loop(row).unwrap();
        assert_eq!(xs.first(), xs.last(), "row {} X loop not closed", row);
        assert_eq!(ys.first(), ys.last(), "row {} Y loop not closed", row);
    }
}

#[test]
fn test_read_sites_filters_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("centers.csv");
    let csv = "\
X,Y,src_vocab,src_unit
0.5,0.25,100,0
1.5,0.75,100,1
9.0,9.0,200,0
2.5,1.25,100,2
";
    std::fs::write(&path, csv).unwrap();

    let sites = read_sites(path.to_str().unwrap(), 100).expect("read should succeed");
    assert_eq!(sites, vec![0.5, 0.25, 1.5, 0.75, 2.5, 1.25]);

    let other = read_sites(path.to_str().unwrap(), 200).unwrap();
    assert_eq!(other, vec![9.0, 9.0]);
}

#[test]
fn test_parse_loop_matches_join() {
    let values = vec![0.1, -2.5, 3.25, 1e-7];
    let joined = values.iter().map(f64::to_string).collect::<Vec<_>>().join(",");
    assert_eq!(parse_loop(&joined).unwrap(), values);
}
