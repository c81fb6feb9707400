pub mod channel;
pub mod color;
pub mod debugger;
pub mod detection;
pub mod error;
pub mod ident;
pub mod primitive;

mod observation;

pub use channel::ChannelConfig;
pub use debugger::TrackDebugger;
pub use detection::DetectionSet;
pub use ident::TrackId;
pub use observation::ObservationRecord;
pub use primitive::{Action, Point, Primitive, Shape};

use nalgebra as na;

/// What the debugger needs from one live tracker: a stable identity,
/// a position query at the cycle time, and the existence probabilities.
/// State estimation itself stays with the tracking pipeline.
pub trait TrackState {
    fn id(&self) -> TrackId;
    fn position_at(&self, stamp: f64) -> na::Point3<f64>;
    fn existence_vector(&self) -> &[f64];
    fn total_existence_probability(&self) -> f64;
}
