//! Resolved path geometry: the segment model, command resolution,
//! measurement, and view transforms

pub mod measure;
pub mod resolve;
pub mod transform;
pub mod types;

pub use resolve::{resolve, Cursor};
pub use transform::ViewTransform;
pub use types::{GeometricPath, Point, Segment, ViewBox};
