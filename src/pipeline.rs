//! The per-batch pipeline: reconstruct, assign, clip, gather.

use rayon::prelude::*;

use crate::assign::owner_site;
use crate::bounds::BoundingBox;
use crate::clip::{ClipScratch, clip_to_bounds};
use crate::diagram::{DiagramContext, RawDiagram};
use crate::error::{Error, Result};
use crate::polygon::Polygon;
use crate::reconstruct::reconstruct_region;

/// Per-batch overrides for the context aggregates.
#[derive(Clone, Copy, Debug, Default)]
pub struct AreaOptions {
    /// Distance used to push synthesized vertices out; defaults to twice the
    /// peak-to-peak coordinate span of the sites.
    pub radius: Option<f64>,
    /// Clip viewport; defaults to the bounding box of the sites. Required for
    /// meaningful output when that box is degenerate (single-site batches).
    pub bounds: Option<BoundingBox>,
}

/// One clipped cell of the final partition, keyed by the unit that owns it.
#[derive(Clone, Debug)]
pub struct UnitArea {
    pub unit: usize,
    pub polygon: Polygon,
}

/// Computes one clipped, site-assigned polygon per site of the diagram.
///
/// The batch runs synchronously: context aggregates are computed once, then
/// every site is processed independently on the rayon pool (reconstruct the
/// finite boundary, find the owning site on the pre-clip polygon, clip to the
/// bounds). Results are keyed by unit id, not completion order. Any error is
/// batch-fatal and reports the offending site; no partial output escapes.
pub fn compute_areas(diagram: &RawDiagram, options: &AreaOptions) -> Result<Vec<UnitArea>> {
    if diagram.dim != 2 {
        return Err(Error::InvalidDimension(diagram.dim));
    }

    let ctx = DiagramContext::new(diagram, options.radius, options.bounds);
    let ridges_by_site = diagram.ridges_by_site();

    tracing::debug!(
        sites = diagram.count_sites(),
        ridges = diagram.ridges.len(),
        radius = ctx.radius,
        "computing unit areas"
    );

    let mut areas = (0..diagram.count_sites())
        .into_par_iter()
        .map_init(ClipScratch::default, |scratch, site| {
            let boundary = reconstruct_region(diagram, site, &ctx, &ridges_by_site)?;
            let unit = owner_site(&boundary, &diagram.sites)
                .ok_or(Error::UnassignedRegion { site })?;

            let clipped = clip_to_bounds(&boundary, &ctx.bounds, scratch);
            if clipped.is_empty() {
                return Err(Error::EmptyClipResult { site });
            }

            Ok(UnitArea { unit, polygon: clipped })
        })
        .collect::<Result<Vec<UnitArea>>>()?;

    areas.sort_by_key(|a| a.unit);

    tracing::debug!(areas = areas.len(), "unit areas complete");
    Ok(areas)
}
