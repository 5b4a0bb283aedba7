//! Assignment of reconstructed regions to their owning site.

use crate::polygon::Polygon;

/// Returns the first site index contained in the polygon.
///
/// FIRST-MATCH is the assignment policy: sites are tested in index order and
/// the first hit wins, even when clipping noise makes a boundary-sharing
/// neighbor test positive too. Downstream consumers depend on this exact
/// tie-break; do not replace it with a nearest-site heuristic.
///
/// The polygon must be the pre-clip region boundary. Clipping moves vertices
/// onto the viewport edge, which can place sites exactly on the boundary and
/// make the containment test ambiguous.
pub fn owner_site(polygon: &Polygon, sites: &[f64]) -> Option<usize> {
    (0..sites.len() / 2).find(|&i| polygon.contains(sites[i * 2], sites[i * 2 + 1]))
}
