use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("assignment maps tracker {tracker} to detection {detection}, but the channel only has {len} detections")]
    DetectionIndexOutOfRange {
        tracker: usize,
        detection: usize,
        len: usize,
    },

    #[error("existence vector has {got} entries, expected {expected} (one per configured channel)")]
    ExistenceVectorLength { got: usize, expected: usize },
}
