pub mod segment_geometry;
