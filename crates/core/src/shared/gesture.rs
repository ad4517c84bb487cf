use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    Blink,
    MouthOpen,
    EyebrowRaise,
}

impl GestureKind {
    pub const ALL: &[GestureKind] = &[
        GestureKind::Blink,
        GestureKind::MouthOpen,
        GestureKind::EyebrowRaise,
    ];
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureKind::Blink => write!(f, "blink"),
            GestureKind::MouthOpen => write!(f, "mouth-open"),
            GestureKind::EyebrowRaise => write!(f, "eyebrow-raise"),
        }
    }
}

/// A single counted gesture occurrence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    /// Counter value after this event was recorded.
    pub count: u64,
    /// Stream time the event fired at.
    #[serde(with = "millis")]
    pub timestamp: Duration,
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64() * 1000.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(d)?;
        Ok(Duration::from_secs_f64(ms.max(0.0) / 1000.0))
    }
}
