use nalgebra as na;

use crate::ident::TrackId;

/// One tracker's state and association outcome against one channel,
/// captured by a single `collect` call. Read-only after creation;
/// discarded on `reset`.
#[derive(Debug, Clone)]
pub struct ObservationRecord {
    pub id: TrackId,
    pub id_display: String,
    pub stamp: f64,
    pub channel_id: usize,
    pub tracker_point: na::Point3<f64>,
    /// Equal to `tracker_point` when unassociated: the record carries a
    /// degenerate zero-length association rather than a missing value.
    pub detection_point: na::Point3<f64>,
    pub is_associated: bool,
    /// One entry per configured channel, each in [0, 1].
    pub existence_vector: Vec<f64>,
    pub total_existence_probability: f64,
}
