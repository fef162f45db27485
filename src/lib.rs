//! Geometry layer of a charting library.
//!
//! Main features:
//!  - Line and rectangle value types
//!  - Cohen-Sutherland line clipping and line extension
//!  - Shape utilities (markers, anchoring, rotation)
//!  - Mapping of linear gradients onto item bounds
//!
mod clip;
mod color;
mod error;
mod geometry;
mod grad;
mod line;
mod shape;
mod utils;

pub use clip::{MAX_CLIP_STEPS, Outcode, clip_line, extend_line, outcode, try_clip_line};
pub use color::{ColorError, RGBA};
pub use error::Error;
pub use geometry::{
    EPSILON, PI, Point, Rect, RectAnchor, Scalar, Transform, center_x, center_y, scalar_fmt,
    union,
};
pub use grad::{
    GradSpread, GradStop, GradStops, GradientTransformType, GradientTransformer, LinearGradient,
};
pub use line::Line;
pub use shape::{Ellipse, Polygon, Shape};
pub use utils::clamp;
