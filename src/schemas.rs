use serde::{Deserialize, Deserializer, Serialize};

use crate::voice::Voice;

/// Body of `POST /generate_podcast/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodcastRequest {
    pub topic: String,
    pub voice_id: Voice,
}

/// Body of a successful `POST /generate_podcast/` response.
///
/// The backend sends empty strings for the field that does not apply, so empty values are
/// read as absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PodcastResponse {
    pub script: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub audio_base64: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub tts_error: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
