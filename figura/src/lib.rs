//! Planar shapes (rectangle, diamond, triangle) with area, bounding box, move and scale
//! operations, collection reports, and a few word-processing helpers.

/// Geometric primitives, the [`Shape`](geometry::geo_traits::Shape) contract and pivot scaling
pub mod geometry;

/// Per-shape and aggregate reports over collections of shapes
pub mod report;

/// Word tokenization, Latin-letter merging and character replacement
pub mod text;

/// Helper functions which do not belong to any specific module
pub mod util;
