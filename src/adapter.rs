//! Reference diagram adapter.
//!
//! Production diagrams come from an external construction (Fortune's
//! algorithm or equivalent); this adapter exists so tests, benches and small
//! inputs have an in-tree collaborator. It computes the Delaunay
//! triangulation by the brute-force empty-circumcircle test and emits its
//! dual: circumcenters as Voronoi vertices, shared triangle edges as ridges,
//! hull edges as rays with one endpoint at infinity.
//!
//! Complexity is O(n^4); use it for test-scale site sets only. Input must be
//! in general position (no duplicates, no three collinear sites) with one
//! site or at least three.

use std::collections::BTreeMap;

use crate::diagram::{RawDiagram, Ridge, VertexRef};

const DEGENERATE_EPS: f64 = 1e-12;
const INCIRCLE_EPS: f64 = 1e-9;

/// Builds the raw Voronoi diagram of a flat `[x, y, ...]` site array.
pub fn naive_diagram(sites: &[f64]) -> RawDiagram {
    let n = sites.len() / 2;

    let mut vertices: Vec<f64> = Vec::new();
    let mut triangles: Vec<[usize; 3]> = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let Some((cx, cy)) = circumcenter(sites, i, j, k) else { continue };

                let dx = sites[i * 2] - cx;
                let dy = sites[i * 2 + 1] - cy;
                let r2 = dx * dx + dy * dy;

                let empty = (0..n).all(|m| {
                    if m == i || m == j || m == k {
                        return true;
                    }
                    let mx = sites[m * 2] - cx;
                    let my = sites[m * 2 + 1] - cy;
                    mx * mx + my * my >= r2 - INCIRCLE_EPS
                });

                if empty {
                    triangles.push([i, j, k]);
                    vertices.push(cx);
                    vertices.push(cy);
                }
            }
        }
    }

    // Group triangles by shared edge. One triangle means the edge lies on the
    // convex hull and its dual ridge is a ray.
    let mut edges: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
    for (t, tri) in triangles.iter().enumerate() {
        for e in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[0], tri[2])] {
            edges.entry(e).or_default().push(t);
        }
    }

    let mut ridges = Vec::with_capacity(edges.len());
    let mut region_triangles: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut unbounded = vec![false; n];

    for (t, tri) in triangles.iter().enumerate() {
        for &s in tri {
            region_triangles[s].push(t);
        }
    }

    for (&(a, b), tris) in &edges {
        if tris.len() >= 2 {
            ridges.push(Ridge {
                sites: [a, b],
                vertices: [VertexRef::Finite(tris[0]), VertexRef::Finite(tris[1])],
            });
        } else {
            ridges.push(Ridge {
                sites: [a, b],
                vertices: [VertexRef::AtInfinity, VertexRef::Finite(tris[0])],
            });
            unbounded[a] = true;
            unbounded[b] = true;
        }
    }

    // Bounded regions are consumed downstream in their given order, so emit
    // them in boundary-traversal order: a convex cell contains its own site,
    // hence sorting its vertices by angle about the site walks the boundary
    // counterclockwise. Unbounded regions get re-ordered during
    // reconstruction anyway.
    let regions = region_triangles
        .into_iter()
        .enumerate()
        .map(|(s, mut tris)| {
            let sx = sites[s * 2];
            let sy = sites[s * 2 + 1];
            tris.sort_by(|&a, &b| {
                let aa = (vertices[a * 2 + 1] - sy).atan2(vertices[a * 2] - sx);
                let ab = (vertices[b * 2 + 1] - sy).atan2(vertices[b * 2] - sx);
                aa.partial_cmp(&ab).unwrap_or(std::cmp::Ordering::Equal)
            });

            let mut region: Vec<VertexRef> = tris.into_iter().map(VertexRef::Finite).collect();
            if unbounded[s] {
                region.push(VertexRef::AtInfinity);
            }
            region
        })
        .collect();

    RawDiagram {
        dim: 2,
        sites: sites.to_vec(),
        vertices,
        regions,
        ridges,
    }
}

fn circumcenter(sites: &[f64], i: usize, j: usize, k: usize) -> Option<(f64, f64)> {
    let ax = sites[i * 2];
    let ay = sites[i * 2 + 1];
    let bx = sites[j * 2];
    let by = sites[j * 2 + 1];
    let cx = sites[k * 2];
    let cy = sites[k * 2 + 1];

    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if d.abs() < DEGENERATE_EPS {
        return None;
    }

    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let uy = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;
    Some((ux, uy))
}
