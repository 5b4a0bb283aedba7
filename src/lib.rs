//! # voroarea
//!
//! `voroarea` turns a raw planar Voronoi diagram into one finite, clipped
//! polygon per generator site. Raw diagrams are infinite at the periphery;
//! this crate synthesizes the missing far vertices along infinite rays, clips
//! every cell to the bounding rectangle of the sites, reattaches each polygon
//! to its originating site, and serializes the result as a tabular artifact
//! keyed by unit id.
//!
//! ## Features
//!
//! - **Finite reconstruction**: closes unbounded cells by pushing synthesized
//!   vertices along ridge rays, then orders each boundary counterclockwise.
//! - **Viewport clipping**: convex polygon against axis-aligned rectangle,
//!   with reusable scratch buffers.
//! - **Deterministic assignment**: first-match point-in-polygon site lookup.
//! - **Parallel batches**: per-site work runs on the `rayon` pool against
//!   read-only shared aggregates.
//! - **Tabular artifacts**: site input and unit-area output as CSV tables.
//!
//! ## Main Interface
//!
//! Feed a [`RawDiagram`] (from any diagram construction; [`adapter`] provides
//! a brute-force reference for small inputs) to [`compute_areas`], then
//! persist the result with [`AreaTable`].

pub mod adapter;
mod assign;
mod bounds;
mod clip;
mod diagram;
mod error;
mod pipeline;
mod polygon;
mod reconstruct;
mod table;

pub use assign::owner_site;
pub use bounds::BoundingBox;
pub use clip::ClipScratch;
pub use clip::clip_to_bounds;
pub use diagram::DiagramContext;
pub use diagram::RawDiagram;
pub use diagram::Ridge;
pub use diagram::VertexRef;
pub use error::Error;
pub use error::Result;
pub use pipeline::AreaOptions;
pub use pipeline::UnitArea;
pub use pipeline::compute_areas;
pub use polygon::Polygon;
pub use reconstruct::reconstruct_region;
pub use table::AreaTable;
pub use table::parse_loop;
pub use table::read_sites;
