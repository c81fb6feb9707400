use nalgebra as na;

/// One channel's detections for the current cycle.
pub struct DetectionSet {
    pub channel_id: usize,
    pub points: Vec<na::Point3<f64>>,
}

impl DetectionSet {
    pub fn new(channel_id: usize, points: Vec<na::Point3<f64>>) -> Self {
        Self { channel_id, points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
