//! Reconstruction of finite region polygons from a raw Voronoi diagram.
//!
//! Regions of sites on the convex hull extend to infinity. For every ridge of
//! such a region that ends in a ray, a far vertex is synthesized on that ray
//! well outside the bounding box, and the augmented vertex set is ordered into
//! a counterclockwise polygon.

use crate::diagram::{DiagramContext, RawDiagram, VertexRef};
use crate::error::{Error, Result};
use crate::polygon::Polygon;

/// Three-valued sign: -1, 0 or +1. A zero dot product leaves the synthesized
/// point on the ridge's finite endpoint, matching the legacy behavior.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Builds the finite, counterclockwise pre-clip polygon for one site.
///
/// `ridges_by_site` is the shared ridge index from
/// [`RawDiagram::ridges_by_site`]; all inputs are read-only, so per-site
/// reconstruction can run in parallel.
pub fn reconstruct_region(
    diagram: &RawDiagram,
    site: usize,
    ctx: &DiagramContext,
    ridges_by_site: &[Vec<usize>],
) -> Result<Polygon> {
    let region = &diagram.regions[site];

    // A site with no vertices and no ridges owns the whole plane; its cell is
    // the full viewport. Only arises for single-site batches.
    if region.is_empty() && ridges_by_site[site].is_empty() {
        return Ok(Polygon::new(ctx.bounds.corners()));
    }

    if region.iter().all(|v| v.is_finite()) {
        // Already finite: copy the boundary unchanged, in its given order.
        let mut vertices = Vec::with_capacity(region.len() * 2);
        for v in region {
            if let VertexRef::Finite(i) = v {
                let p = diagram.vertex(*i);
                vertices.push(p[0]);
                vertices.push(p[1]);
            }
        }
        return Ok(Polygon::new(vertices));
    }

    // Keep the known finite vertices of the region.
    let mut points: Vec<[f64; 2]> = region
        .iter()
        .filter_map(|v| match v {
            VertexRef::Finite(i) => Some(diagram.vertex(*i)),
            VertexRef::AtInfinity => None,
        })
        .collect();

    // Synthesize the missing endpoint of every infinite ridge.
    for &r in &ridges_by_site[site] {
        let ridge = &diagram.ridges[r];
        let known = match ridge.vertices {
            [VertexRef::Finite(_), VertexRef::Finite(_)] => continue,
            [VertexRef::AtInfinity, VertexRef::Finite(v)] => v,
            [VertexRef::Finite(v), VertexRef::AtInfinity] => v,
            [VertexRef::AtInfinity, VertexRef::AtInfinity] => {
                return Err(Error::MalformedDiagram { site });
            }
        };

        let other = if ridge.sites[0] == site { ridge.sites[1] } else { ridge.sites[0] };
        let p1 = diagram.site(site);
        let p2 = diagram.site(other);

        // Tangent along the two sites, normal perpendicular to it.
        let mut tx = p2[0] - p1[0];
        let mut ty = p2[1] - p1[1];
        let norm = (tx * tx + ty * ty).sqrt();
        tx /= norm;
        ty /= norm;
        let nx = -ty;
        let ny = tx;

        // Orient the ray away from the diagram interior.
        let mx = (p1[0] + p2[0]) * 0.5;
        let my = (p1[1] + p2[1]) * 0.5;
        let s = sign((mx - ctx.center[0]) * nx + (my - ctx.center[1]) * ny);

        let endpoint = diagram.vertex(known);
        points.push([endpoint[0] + s * nx * ctx.radius, endpoint[1] + s * ny * ctx.radius]);
    }

    // Order counterclockwise by angle about the vertex centroid. The sort is
    // stable; exact atan2 ties keep their input order.
    let inv = 1.0 / points.len() as f64;
    let cx = points.iter().map(|p| p[0]).sum::<f64>() * inv;
    let cy = points.iter().map(|p| p[1]).sum::<f64>() * inv;
    points.sort_by(|a, b| {
        let aa = (a[1] - cy).atan2(a[0] - cx);
        let ab = (b[1] - cy).atan2(b[0] - cx);
        aa.partial_cmp(&ab).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut vertices = Vec::with_capacity(points.len() * 2);
    for p in &points {
        vertices.push(p[0]);
        vertices.push(p[1]);
    }
    Ok(Polygon::new(vertices))
}
