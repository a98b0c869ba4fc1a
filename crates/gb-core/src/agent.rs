use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

/// A member of the agent roster.
///
/// The core only touches the tracks, skills and portrait. Everything else is
/// carried as-is, including fields this version does not know about. Every
/// field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identifier used by UI callbacks.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Cover profession.
    #[serde(default)]
    pub profession: String,
    /// Free-form physical description.
    #[serde(default)]
    pub description: String,
    /// Characteristic scores.
    #[serde(default)]
    pub stats: Stats,
    /// Derived resource tracks. Zeroed when a save omits them.
    #[serde(default)]
    pub derived: Derived,
    /// Skill lines such as `"Firearms 50%"`.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Carried equipment.
    #[serde(default)]
    pub gear: Vec<String>,
    /// Uploaded portrait image, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<Portrait>,
    /// Fields written by other versions, preserved untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The six characteristic scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Strength.
    #[serde(rename = "STR")]
    pub strength: i32,
    /// Constitution.
    #[serde(rename = "CON")]
    pub constitution: i32,
    /// Dexterity.
    #[serde(rename = "DEX")]
    pub dexterity: i32,
    /// Intelligence.
    #[serde(rename = "INT")]
    pub intelligence: i32,
    /// Power.
    #[serde(rename = "POW")]
    pub power: i32,
    /// Charisma.
    #[serde(rename = "CHA")]
    pub charisma: i32,
}

/// Derived tracks: hit points, willpower and sanity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derived {
    /// Hit points.
    pub hp: Track,
    /// Willpower points.
    pub wp: Track,
    /// Sanity, with its breaking point.
    pub san: Track,
}

/// A current/max pair. `current` stays within `0..=max` after any adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
    /// Sanity breaking point. Stored, never interpreted.
    #[serde(rename = "break", default, skip_serializing_if = "Option::is_none")]
    pub breaking_point: Option<i32>,
}

impl Track {
    /// Create a full track.
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            breaking_point: None,
        }
    }

    /// Create a sanity track with a breaking point.
    pub fn sanity(current: i32, max: i32, breaking_point: i32) -> Self {
        Self {
            current: current.clamp(0, max.max(0)),
            max,
            breaking_point: Some(breaking_point),
        }
    }

    /// Adjust by `delta`, clamping to `0..=max`. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = self.current.saturating_add(delta).clamp(0, self.max.max(0));
        self.current
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// Which derived track to adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    /// Hit points.
    Hp,
    /// Willpower points.
    Wp,
    /// Sanity.
    San,
}

impl std::str::FromStr for TrackKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hp" | "hit points" => Ok(Self::Hp),
            "wp" | "willpower" => Ok(Self::Wp),
            "san" | "sanity" => Ok(Self::San),
            _ => Err(CoreError::UnknownTrack(s.to_string())),
        }
    }
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hp => write!(f, "HP"),
            Self::Wp => write!(f, "WP"),
            Self::San => write!(f, "SAN"),
        }
    }
}

/// An agent portrait.
///
/// Images are written as `data:` URLs, the form the browser desk stores.
/// Older saves holding `{mediaType, bytes}` are still read. Any other value
/// is kept verbatim and written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Portrait {
    /// Decoded image data.
    Image {
        /// MIME type, sniffed on upload or taken from the data URL.
        media_type: String,
        /// Image bytes.
        bytes: Vec<u8>,
    },
    /// A value this version cannot decode, such as a remote URL.
    Opaque(Value),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImage {
    media_type: String,
    bytes: Vec<u8>,
}

impl Portrait {
    /// Wrap image bytes, sniffing the media type from the magic number.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let media_type = if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            "image/png"
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            "image/jpeg"
        } else if bytes.starts_with(b"GIF8") {
            "image/gif"
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            "image/webp"
        } else {
            "application/octet-stream"
        };
        Self::Image {
            media_type: media_type.to_string(),
            bytes,
        }
    }

    /// Decode a base64 `data:` URL.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let (meta, payload) = url.strip_prefix("data:")?.split_once(',')?;
        let media_type = meta.strip_suffix(";base64")?;
        let bytes = STANDARD.decode(payload.trim()).ok()?;
        Some(Self::Image {
            media_type: media_type.to_string(),
            bytes,
        })
    }

    /// The image's MIME type, if decoded.
    pub fn media_type(&self) -> Option<&str> {
        match self {
            Self::Image { media_type, .. } => Some(media_type),
            Self::Opaque(_) => None,
        }
    }

    /// The image bytes, if decoded.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Image { bytes, .. } => Some(bytes),
            Self::Opaque(_) => None,
        }
    }

    /// Render as a `data:` URL, if decoded.
    pub fn to_data_url(&self) -> Option<String> {
        match self {
            Self::Image { media_type, bytes } => Some(data_url(media_type, bytes)),
            Self::Opaque(_) => None,
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::String(url) => {
                Self::from_data_url(&url).unwrap_or(Self::Opaque(Value::String(url)))
            }
            Value::Object(_) => match serde_json::from_value::<RawImage>(value.clone()) {
                Ok(raw) => Self::Image {
                    media_type: raw.media_type,
                    bytes: raw.bytes,
                },
                Err(_) => Self::Opaque(value),
            },
            other => Self::Opaque(other),
        }
    }
}

fn data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

impl Serialize for Portrait {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Image { media_type, bytes } => {
                serializer.serialize_str(&data_url(media_type, bytes))
            }
            Self::Opaque(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Portrait {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl Agent {
    /// Borrow a derived track.
    pub fn track(&self, kind: TrackKind) -> &Track {
        match kind {
            TrackKind::Hp => &self.derived.hp,
            TrackKind::Wp => &self.derived.wp,
            TrackKind::San => &self.derived.san,
        }
    }

    /// Adjust a derived track by `delta`, clamped. Returns the new value.
    pub fn adjust_track(&mut self, kind: TrackKind, delta: i32) -> i32 {
        let track = match kind {
            TrackKind::Hp => &mut self.derived.hp,
            TrackKind::Wp => &mut self.derived.wp,
            TrackKind::San => &mut self.derived.san,
        };
        track.adjust(delta)
    }

    /// Append a skill line.
    pub fn add_skill(&mut self, skill: &str) -> CoreResult<()> {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(CoreError::Blank("skill"));
        }
        self.skills.push(skill.to_string());
        Ok(())
    }

    /// Replace the portrait.
    pub fn set_portrait(&mut self, bytes: Vec<u8>) {
        self.portrait = Some(Portrait::from_bytes(bytes));
    }

    /// Whether `key` names this agent by id or (case-insensitively) by name.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.id == key || self.name.eq_ignore_ascii_case(key)
    }
}
