//! Display state of a podcast session, independent of where it is drawn.

use crate::orchestrator::{AudioClip, Outcome, OutcomeKind};

/// Resting label of the trigger control
pub const IDLE_LABEL: &str = "Generate Podcast";

/// Label while a podcast is being generated
pub const BUSY_LABEL: &str = "Generating...";

pub const TTS_ERROR_PREFIX: &str = "TTS Error: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerControl {
    pub enabled: bool,
    pub label: String,
}

impl Default for TriggerControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: String::from(IDLE_LABEL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub trigger: TriggerControl,
    pub busy: bool,
    pub results_visible: bool,
    pub script: String,
    /// Current audio player source
    pub audio: Option<AudioClip>,
    /// Error shown next to the audio player
    pub inline_error: Option<String>,
    /// Error surfaced to the user as a notification
    pub alert: Option<String>,
    /// Request to correct the input
    pub prompt: Option<String>,
    pub phase: Phase,
    pub last_outcome: Option<OutcomeKind>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a new submission may start
    pub fn is_ready(&self) -> bool {
        self.trigger.enabled && self.phase == Phase::Idle
    }

    /// Disable the trigger, show the busy indicator and reset transient result state
    pub fn begin_submit(&mut self) {
        self.trigger.enabled = false;
        self.trigger.label = String::from(BUSY_LABEL);
        self.busy = true;
        self.results_visible = false;
        self.alert = None;
        self.prompt = None;
        self.phase = Phase::Submitting;
    }

    /// Map an outcome to display state
    pub fn apply(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Validation(e) => {
                self.prompt = Some(e.to_string());
                self.alert = None;
            }
            Outcome::Failure(e) => {
                self.alert = Some(e.to_string());
                self.results_visible = false;
            }
            Outcome::PartialFailure { script, tts_error } => {
                self.script = script.clone();
                self.inline_error = Some(format!("{TTS_ERROR_PREFIX}{tts_error}"));
                self.audio = None;
                self.results_visible = true;
            }
            Outcome::Success { script, audio } => {
                self.script = script.clone();
                self.inline_error = None;
                self.audio = Some(audio.clone());
                self.results_visible = true;
            }
        }
        self.last_outcome = Some(outcome.kind());
    }

    /// Restore the trigger to its resting state. Runs after every submission.
    pub fn settle(&mut self) {
        self.trigger = TriggerControl::default();
        self.busy = false;
        self.phase = Phase::Idle;
    }
}
