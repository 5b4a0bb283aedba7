//! Raw planar Voronoi diagram primitives, as produced by a diagram adapter.
//!
//! The adapter (Fortune's algorithm, a Delaunay dual, ...) is an external
//! collaborator; this module only fixes the shape of its output. Coordinates
//! use the flat `[x, y, x, y, ...]` convention throughout.

use crate::bounds::BoundingBox;

/// Reference to a Voronoi vertex of a region or ridge.
///
/// Replaces the `-1 = vertex at infinity` index convention used by common
/// diagram libraries with a tagged variant, so no reserved integer needs
/// special-casing downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexRef {
    /// Index into the diagram's finite vertex table.
    Finite(usize),
    /// The open end of a ray; never present in final output.
    AtInfinity,
}

impl VertexRef {
    /// Converts from the signed-index convention (negative = at infinity).
    pub fn from_index(index: i64) -> VertexRef {
        if index < 0 {
            VertexRef::AtInfinity
        } else {
            VertexRef::Finite(index as usize)
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, VertexRef::Finite(_))
    }
}

/// An edge shared by exactly two adjacent sites.
///
/// An `AtInfinity` endpoint marks a ray rather than a segment.
#[derive(Clone, Copy, Debug)]
pub struct Ridge {
    pub sites: [usize; 2],
    pub vertices: [VertexRef; 2],
}

/// Output of a planar Voronoi diagram construction.
#[derive(Clone, Debug, Default)]
pub struct RawDiagram {
    /// Dimensionality of the input points. The pipeline only accepts 2.
    pub dim: usize,
    /// Flat site coordinates; a site's identity is its index in this array.
    pub sites: Vec<f64>,
    /// Flat finite Voronoi vertex coordinates.
    pub vertices: Vec<f64>,
    /// Per site, the vertex references bounding its cell. Fully finite
    /// regions must already list their vertices in boundary-traversal order;
    /// they are passed through to the output as-is. Regions containing an
    /// [`VertexRef::AtInfinity`] reference may be in any order, since
    /// reconstruction re-sorts them angularly.
    pub regions: Vec<Vec<VertexRef>>,
    /// All ridges of the diagram.
    pub ridges: Vec<Ridge>,
}

impl RawDiagram {
    pub fn count_sites(&self) -> usize {
        if self.dim == 0 { 0 } else { self.sites.len() / self.dim }
    }

    pub fn site(&self, index: usize) -> [f64; 2] {
        [self.sites[index * 2], self.sites[index * 2 + 1]]
    }

    pub fn vertex(&self, index: usize) -> [f64; 2] {
        [self.vertices[index * 2], self.vertices[index * 2 + 1]]
    }

    /// Builds the ridge index: for each site, the ridges incident to it.
    pub fn ridges_by_site(&self) -> Vec<Vec<usize>> {
        let mut by_site = vec![Vec::new(); self.count_sites()];
        for (r, ridge) in self.ridges.iter().enumerate() {
            by_site[ridge.sites[0]].push(r);
            by_site[ridge.sites[1]].push(r);
        }
        by_site
    }
}

/// Read-only aggregates shared by all per-site work, computed once per batch.
#[derive(Clone, Copy, Debug)]
pub struct DiagramContext {
    /// Centroid of all sites; orients synthesized points away from the interior.
    pub center: [f64; 2],
    /// Distance used to push synthesized vertices safely outside the bounds.
    pub radius: f64,
    /// Bounding rectangle of the sites, the clip viewport.
    pub bounds: BoundingBox,
}

impl DiagramContext {
    /// Computes the batch aggregates from the site set.
    ///
    /// The default radius is twice the peak-to-peak span over all site
    /// coordinates; callers may override it (or the viewport) when the
    /// site-derived values are degenerate, e.g. a single-site batch.
    pub fn new(diagram: &RawDiagram, radius: Option<f64>, bounds: Option<BoundingBox>) -> DiagramContext {
        let count = diagram.count_sites();
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..count {
            cx += diagram.sites[i * 2];
            cy += diagram.sites[i * 2 + 1];
        }
        if count > 0 {
            cx /= count as f64;
            cy /= count as f64;
        }

        let radius = radius.unwrap_or_else(|| {
            let mut lo = f64::INFINITY;
            let mut hi = f64::NEG_INFINITY;
            for &v in &diagram.sites {
                lo = lo.min(v);
                hi = hi.max(v);
            }
            if count == 0 { 0.0 } else { (hi - lo) * 2.0 }
        });

        DiagramContext {
            center: [cx, cy],
            radius,
            bounds: bounds.unwrap_or_else(|| BoundingBox::from_sites(&diagram.sites)),
        }
    }
}
