pub mod bounds;
pub mod dataset;
pub mod scale;
pub mod transform;
pub mod types;

pub use bounds::{Bounds, time_bounds, value_bounds};
pub use dataset::{Dataset, DatasetMeta};
pub use scale::{DEFAULT_PADDING_FRACTION, PaddedScale};
pub use transform::Transform;
pub use types::{Axis, Point, Sample, Viewport};
