use serde_derive::{Deserialize, Serialize};

/// Static description of one detection input channel.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChannelConfig {
    pub short_name: String,
    pub index: usize,
}

impl ChannelConfig {
    pub fn new(short_name: impl Into<String>, index: usize) -> Self {
        Self {
            short_name: short_name.into(),
            index,
        }
    }
}
