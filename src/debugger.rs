use std::collections::HashMap;

use crate::color;
use crate::detection::DetectionSet;
use crate::error::Error;
use crate::observation::ObservationRecord;
use crate::primitive::{Action, Point, Primitive, Shape};
use crate::{ChannelConfig, TrackState};

const LIFETIME_SEC: f64 = 0.15;

const LABEL_Z_OFFSET: f64 = 2.5;
const LABEL_HEIGHT: f64 = 0.5;
const BOX_HEIGHT_OFFSET: f64 = 1.0;
const ASSIGN_HEIGHT_OFFSET: f64 = 0.6;

const TRACK_BOX_SIZE: f64 = 0.4;
const DETECT_BOX_SIZE: f64 = 0.2;
const LINE_WIDTH: f64 = 0.15;

/// Channel existence probabilities below this are left out of the label.
const EXISTENCE_DISPLAY_THRESHOLD: f64 = 0.00101;

/// Per-cycle debugging view of a multi-channel tracking pipeline.
///
/// Usage per processing cycle: `collect` once per input channel,
/// `process` once, then `output` any number of times; `reset` before
/// the next cycle's collections. Single-threaded; callers that overlap
/// cycles must serialize or use one debugger per context.
pub struct TrackDebugger {
    channels: Vec<ChannelConfig>,
    records: Vec<ObservationRecord>,
    groups: Vec<Vec<ObservationRecord>>,
    initialized: bool,
}

impl TrackDebugger {
    pub fn new(channels: Vec<ChannelConfig>) -> Self {
        Self {
            channels,
            records: Vec::new(),
            groups: Vec::new(),
            initialized: false,
        }
    }

    #[inline]
    pub fn channels(&self) -> &[ChannelConfig] {
        &self.channels
    }

    /// Records accumulated so far this cycle, in collection order until
    /// `process` reorders them by identity.
    #[inline]
    pub fn records(&self) -> &[ObservationRecord] {
        &self.records
    }

    /// Identity groups produced by the last `process` call.
    #[inline]
    pub fn groups(&self) -> &[Vec<ObservationRecord>] {
        &self.groups
    }

    /// Captures one observation record per tracker for one channel,
    /// appending to the cycle's accumulation (earlier channels' records
    /// are kept). Trackers mapped by `assignment` are marked associated
    /// with the mapped detection's position; the rest carry their own
    /// position as a zero-length association.
    pub fn collect<T: TrackState>(
        &mut self,
        stamp: f64,
        tracks: &[T],
        detections: &DetectionSet,
        assignment: &HashMap<usize, usize>,
    ) -> Result<(), Error> {
        let mut collected = Vec::with_capacity(tracks.len());

        for (tracker_idx, track) in tracks.iter().enumerate() {
            let id = track.id();
            let tracker_point = track.position_at(stamp);

            let (detection_point, is_associated) = match assignment.get(&tracker_idx) {
                Some(&det_idx) => {
                    let point = detections.points.get(det_idx).ok_or(
                        Error::DetectionIndexOutOfRange {
                            tracker: tracker_idx,
                            detection: det_idx,
                            len: detections.len(),
                        },
                    )?;
                    (*point, true)
                }
                None => (tracker_point, false),
            };

            let existence_vector = track.existence_vector().to_vec();
            if existence_vector.len() != self.channels.len() {
                return Err(Error::ExistenceVectorLength {
                    got: existence_vector.len(),
                    expected: self.channels.len(),
                });
            }

            collected.push(ObservationRecord {
                id,
                id_display: id.display_string(),
                stamp,
                channel_id: detections.channel_id,
                tracker_point,
                detection_point,
                is_associated,
                existence_vector,
                total_existence_probability: track.total_existence_probability(),
            });
        }

        self.records.append(&mut collected);
        self.initialized = true;

        Ok(())
    }

    /// Rebuilds the identity groups from the accumulated records: stable
    /// sort by the full 128-bit id ascending, then cut a group at every
    /// id change. The previous grouping is replaced wholesale.
    pub fn process(&mut self) {
        if !self.initialized || self.records.is_empty() {
            return;
        }

        self.records.sort_by(|a, b| a.id.cmp(&b.id));

        self.groups.clear();

        let mut group: Vec<ObservationRecord> = Vec::new();
        let mut previous_id = self.records[0].id;
        for record in &self.records {
            if record.id != previous_id {
                self.groups.push(std::mem::take(&mut group));
                previous_id = record.id;
            }
            group.push(record.clone());
        }
        self.groups.push(group);
    }

    /// Renders the finalized groups. Pure read: safe to call repeatedly.
    /// Empty until the first `collect` has happened.
    pub fn output(&self) -> Vec<Primitive> {
        if !self.initialized {
            return Vec::new();
        }

        self.draw(&self.groups)
    }

    fn draw(&self, groups: &[Vec<ObservationRecord>]) -> Vec<Primitive> {
        let mut out = Vec::new();

        for group in groups {
            let front = match group.first() {
                Some(front) => front,
                None => continue,
            };

            let key = front.id.display_key();
            let stamp = front.stamp;

            let mut label = Primitive {
                key,
                namespace: "existence_probability".to_string(),
                stamp,
                lifetime: LIFETIME_SEC,
                action: Action::Add,
                color: color::WHITE,
                shape: Shape::Text {
                    position: Point::from(front.tracker_point).raised(LABEL_Z_OFFSET),
                    height: LABEL_HEIGHT,
                    text: self.label_text(front),
                },
            };

            let mut track_boxes = Primitive {
                key,
                namespace: "track_boxes".to_string(),
                stamp,
                lifetime: LIFETIME_SEC,
                action: Action::Add,
                color: color::WHITE.with_alpha(0.9),
                shape: Shape::BoxList {
                    size: TRACK_BOX_SIZE,
                    points: Vec::new(),
                },
            };

            // per-channel association primitives, empty until filled below
            let mut detect_boxes: Vec<Primitive> = Vec::with_capacity(self.channels.len());
            let mut assoc_lines: Vec<Primitive> = Vec::with_capacity(self.channels.len());
            for channel in &self.channels {
                let channel_color = color::channel_color(channel.index).with_alpha(0.9);

                detect_boxes.push(Primitive {
                    key,
                    namespace: format!("detect_boxes_{}", channel.short_name),
                    stamp,
                    lifetime: LIFETIME_SEC,
                    action: Action::Add,
                    color: channel_color,
                    shape: Shape::BoxList {
                        size: DETECT_BOX_SIZE,
                        points: Vec::new(),
                    },
                });

                assoc_lines.push(Primitive {
                    key,
                    namespace: format!("association_lines_{}", channel.short_name),
                    stamp,
                    lifetime: LIFETIME_SEC,
                    action: Action::Add,
                    color: channel_color,
                    shape: Shape::LineList {
                        width: LINE_WIDTH,
                        points: Vec::new(),
                    },
                });
            }

            let mut group_associated = false;
            for record in group {
                let track_point = Point::from(record.tracker_point).raised(BOX_HEIGHT_OFFSET);
                if let Shape::BoxList { points, .. } = &mut track_boxes.shape {
                    points.push(track_point);
                }

                if !record.is_associated {
                    continue;
                }
                group_associated = true;

                let detect_point = Point::from(record.detection_point)
                    .raised(BOX_HEIGHT_OFFSET + ASSIGN_HEIGHT_OFFSET);

                if let Shape::BoxList { points, .. } = &mut detect_boxes[record.channel_id].shape {
                    points.push(detect_point);
                }
                if let Shape::LineList { points, .. } = &mut assoc_lines[record.channel_id].shape {
                    points.push(track_point);
                    points.push(detect_point);
                }
            }

            // channels that stayed empty are emitted as explicit tombstones
            // so a viewer clears whatever it drew for them last cycle
            for mut boxes in detect_boxes {
                if boxes.shape.is_empty() {
                    boxes.action = Action::Delete;
                }
                out.push(boxes);
            }
            for mut lines in assoc_lines {
                if lines.shape.is_empty() {
                    lines.action = Action::Delete;
                }
                out.push(lines);
            }

            if !group_associated {
                track_boxes.color = color::DIMMED.with_alpha(0.8);
                label.color = color::DIMMED.with_alpha(0.9);
            }
            out.push(label);
            out.push(track_boxes);
        }

        out
    }

    fn label_text(&self, front: &ObservationRecord) -> String {
        let mut text = format!(
            "total:{}\n",
            (front.total_existence_probability * 100.0) as i32
        );

        for channel in &self.channels {
            let p = front.existence_vector[channel.index];
            if p < EXISTENCE_DISPLAY_THRESHOLD {
                continue;
            }
            text += &format!("{}{}:", channel.short_name, (p * 100.0) as i32);
        }
        text.pop();

        text += "\n";
        text += &front.id_display[..6];
        text
    }

    /// Drops the cycle's accumulated records and groups. The next
    /// `output` is empty until a new `collect` happens.
    pub fn reset(&mut self) {
        self.records.clear();
        self.groups.clear();
    }
}
