use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    backend::PodcastBackend,
    error::{SubmitError, ValidationError},
    schemas::{PodcastRequest, PodcastResponse},
    view::ViewState,
    voice::Voice,
};


pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// Decoded podcast audio, ready to be handed to a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl AudioClip {
    pub fn mpeg(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: AUDIO_MIME_TYPE,
        }
    }
}

/// Result of one submission
#[derive(Debug)]
pub enum Outcome {
    /// Rejected before any request was sent
    Validation(ValidationError),

    /// Transport, HTTP status or decode failure
    Failure(SubmitError),

    /// Script was generated but speech synthesis failed
    PartialFailure { script: String, tts_error: String },

    Success { script: String, audio: AudioClip },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Validation,
    Failure,
    PartialFailure,
    Success,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Validation(_) => OutcomeKind::Validation,
            Outcome::Failure(_) => OutcomeKind::Failure,
            Outcome::PartialFailure { .. } => OutcomeKind::PartialFailure,
            Outcome::Success { .. } => OutcomeKind::Success,
        }
    }
}

/// Validates user input and builds the request. Voice falls back to `default_voice`.
pub fn build_request(
    topic: &str,
    voice: Option<Voice>,
    default_voice: Voice,
) -> Result<PodcastRequest, ValidationError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(ValidationError::EmptyTopic);
    }

    Ok(PodcastRequest {
        topic: String::from(topic),
        voice_id: voice.unwrap_or(default_voice),
    })
}

/// Turn a successful backend response into an outcome, decoding the audio
pub fn interpret_response(resp: PodcastResponse) -> Result<Outcome, SubmitError> {
    if let Some(tts_error) = resp.tts_error {
        return Ok(Outcome::PartialFailure {
            script: resp.script,
            tts_error,
        });
    }

    let encoded = resp.audio_base64.ok_or(SubmitError::MissingAudio)?;
    let bytes = STANDARD.decode(encoded.trim())?;

    Ok(Outcome::Success {
        script: resp.script,
        audio: AudioClip::mpeg(bytes),
    })
}

/// Drives one podcast submission at a time against a backend
pub struct Orchestrator<B> {
    backend: B,
    default_voice: Voice,
}

impl<B: PodcastBackend> Orchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            default_voice: Voice::default(),
        }
    }

    pub fn with_default_voice(mut self, voice: Voice) -> Self {
        self.default_voice = voice;
        self
    }

    pub fn default_voice(&self) -> Voice {
        self.default_voice
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Submit a topic, updating `view` through the whole exchange.
    ///
    /// Invalid input never reaches the backend. Otherwise exactly one request is sent and the
    /// trigger control is restored before returning, whatever the result.
    #[cfg(test)]
    pub async fn submit(&self, view: &mut ViewState, topic: &str, voice: Option<Voice>) -> Outcome {
        self.submit_with(view, topic, voice, |_| {}).await
    }

    /// Submit a topic like `submit`, calling `on_busy` once the request is about to be sent so
    /// the busy state can be drawn.
    pub async fn submit_with<F>(
        &self,
        view: &mut ViewState,
        topic: &str,
        voice: Option<Voice>,
        mut on_busy: F,
    ) -> Outcome
    where
        F: FnMut(&ViewState),
    {
        if !view.is_ready() {
            let outcome = Outcome::Validation(ValidationError::Busy);
            view.apply(&outcome);
            return outcome;
        }

        let req = match build_request(topic, voice, self.default_voice) {
            Ok(req) => req,
            Err(e) => {
                let outcome = Outcome::Validation(e);
                view.apply(&outcome);
                return outcome;
            }
        };

        tracing::info!(
            "Generating podcast ({} chars topic, voice {})",
            req.topic.chars().count(),
            req.voice_id
        );

        view.begin_submit();
        on_busy(view);

        let outcome = match self
            .backend
            .generate_podcast(&req)
            .await
            .and_then(interpret_response)
        {
            Ok(outcome) => outcome,
            Err(e) => {
                match &e {
                    SubmitError::Status { status, .. } => {
                        tracing::warn!("Podcast backend returned {status}: {e}")
                    }
                    _ => tracing::warn!("Podcast generation failed: {e}"),
                }
                Outcome::Failure(e)
            }
        };

        view.apply(&outcome);
        view.settle();

        outcome
    }
}
