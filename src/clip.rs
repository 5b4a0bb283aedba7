//! Clipping of convex region polygons against the bounding rectangle.

use crate::bounds::BoundingBox;
use crate::polygon::Polygon;

const CLIP_EPS: f64 = 1e-9;

/// Scratch buffers to reuse allocations across per-site clips.
#[derive(Default, Clone)]
pub struct ClipScratch {
    vertices: Vec<f64>,
    dists: Vec<f64>,
}

/// Intersects a convex polygon with the bounding rectangle.
///
/// The rectangle is applied as four successive half-plane clips, each keeping
/// the side of the plane where the signed distance against the outward normal
/// is non-positive. Voronoi cells are convex, so the result is convex and
/// closed; it may be empty when the polygon lies entirely outside the bounds.
pub fn clip_to_bounds(polygon: &Polygon, bounds: &BoundingBox, scratch: &mut ClipScratch) -> Polygon {
    let mut vertices = polygon.vertices().to_vec();
    clip_halfplane(&mut vertices, [bounds.min_x, bounds.min_y], [-1.0, 0.0], scratch);
    clip_halfplane(&mut vertices, [bounds.max_x, bounds.max_y], [1.0, 0.0], scratch);
    clip_halfplane(&mut vertices, [bounds.min_x, bounds.min_y], [0.0, -1.0], scratch);
    clip_halfplane(&mut vertices, [bounds.max_x, bounds.max_y], [0.0, 1.0], scratch);
    Polygon::new(vertices)
}

/// Clips the vertex loop by the plane through `point` with outward `normal`,
/// keeping the half-plane the normal points away from.
fn clip_halfplane(vertices: &mut Vec<f64>, point: [f64; 2], normal: [f64; 2], scratch: &mut ClipScratch) {
    let px = point[0];
    let py = point[1];
    let nx = normal[0];
    let ny = normal[1];

    let num_verts = vertices.len() / 2;
    if num_verts < 3 {
        vertices.clear();
        return;
    }

    scratch.dists.clear();
    scratch.dists.reserve(num_verts);

    let mut all_inside = true;
    let mut all_outside = true;

    for i in 0..num_verts {
        let vx = vertices[i * 2];
        let vy = vertices[i * 2 + 1];
        let d = (vx - px) * nx + (vy - py) * ny;
        scratch.dists.push(d);

        if d > CLIP_EPS {
            all_inside = false;
        } else if d < -CLIP_EPS {
            all_outside = false;
        }
    }

    if all_inside { return; }
    if all_outside {
        vertices.clear();
        return;
    }

    scratch.vertices.clear();

    for i in 0..num_verts {
        let j = (i + 1) % num_verts;

        let d_i = scratch.dists[i];
        let d_j = scratch.dists[j];

        if d_i <= CLIP_EPS {
            // V_i is inside
            scratch.vertices.push(vertices[i * 2]);
            scratch.vertices.push(vertices[i * 2 + 1]);

            if d_j > CLIP_EPS {
                // V_j is outside: clip the edge at the plane
                let t = d_i / (d_i - d_j);
                let xi = vertices[i * 2];
                let yi = vertices[i * 2 + 1];
                let xj = vertices[j * 2];
                let yj = vertices[j * 2 + 1];

                scratch.vertices.push(xi + t * (xj - xi));
                scratch.vertices.push(yi + t * (yj - yi));
            }
        } else if d_j <= CLIP_EPS {
            // V_i is outside, V_j is inside: entering intersection
            let t = d_i / (d_i - d_j);
            let xi = vertices[i * 2];
            let yi = vertices[i * 2 + 1];
            let xj = vertices[j * 2];
            let yj = vertices[j * 2 + 1];

            scratch.vertices.push(xi + t * (xj - xi));
            scratch.vertices.push(yi + t * (yj - yi));
        }
        // Both outside: skip
    }

    std::mem::swap(vertices, &mut scratch.vertices);
}
