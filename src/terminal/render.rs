use std::io::{ErrorKind, Write};

use eyre::{Result, WrapErr};

use crate::{data::PodcastClientFiles, orchestrator::OutcomeKind, view::ViewState, voice::Voice};

/// Draw the busy indicator
pub fn render_busy<W: Write>(view: &ViewState, out: &mut W) -> Result<()> {
    if view.busy {
        writeln!(out, "{}", view.trigger.label)?;
    }
    Ok(())
}

/// Draw the result of the last settled submission. Prompts and alerts go to `err`, results to
/// `out`. The audio source is written to `files.audio`.
pub fn render<W: Write, E: Write>(
    view: &ViewState,
    files: &PodcastClientFiles,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match view.last_outcome {
        None => return Ok(()),
        Some(OutcomeKind::Validation) => {
            if let Some(prompt) = &view.prompt {
                writeln!(err, "{prompt}")?;
            }
            return Ok(());
        }
        Some(OutcomeKind::Failure) => {
            if let Some(alert) = &view.alert {
                writeln!(err, "Error: {alert}")?;
            }
            return Ok(());
        }
        Some(OutcomeKind::Success | OutcomeKind::PartialFailure) => {}
    }

    if !view.results_visible {
        return Ok(());
    }

    writeln!(out, "{}\n", view.script.trim_end())?;

    if let Some(script_path) = &files.script {
        std::fs::write(script_path, &view.script)
            .wrap_err_with(|| format!("Failed to write script to {}", script_path.display()))?;
        writeln!(out, "Script saved to {}", script_path.display())?;
    }

    match &view.audio {
        Some(audio) => {
            std::fs::write(&files.audio, &audio.bytes).wrap_err_with(|| {
                format!("Failed to write audio to {}", files.audio.display())
            })?;
            writeln!(
                out,
                "Audio ({}, {} bytes) saved to {}",
                audio.mime_type,
                audio.bytes.len(),
                files.audio.display()
            )?;
        }
        None => {
            match std::fs::remove_file(&files.audio) {
                Err(e) if e.kind() != ErrorKind::NotFound => {
                    return Err(e).wrap_err_with(|| {
                        format!("Failed to clear audio at {}", files.audio.display())
                    });
                }
                _ => {}
            }
            writeln!(out, "No audio available")?;
        }
    }

    if let Some(inline_error) = &view.inline_error {
        writeln!(out, "{inline_error}")?;
    }

    Ok(())
}

pub fn render_voices<W: Write>(default_voice: Voice, out: &mut W) -> Result<()> {
    for voice in Voice::ALL {
        if voice == default_voice {
            writeln!(out, "{voice} (default)")?;
        } else {
            writeln!(out, "{voice}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{SubmitError, ValidationError},
        orchestrator::{AudioClip, Outcome},
    };

    fn files_in(dir: &tempfile::TempDir, script: bool) -> PodcastClientFiles {
        PodcastClientFiles {
            audio: dir.path().join("podcast.mp3"),
            script: script.then(|| dir.path().join("script.txt")),
        }
    }

    #[test]
    fn success_writes_audio_and_script() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(&dir, true);
        let mut view = ViewState::new();
        view.apply(&Outcome::Success {
            script: String::from("Welcome to the show"),
            audio: AudioClip::mpeg(b"ID3".to_vec()),
        });

        let (mut out, mut err) = (Vec::new(), Vec::new());
        render(&view, &files, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Welcome to the show\n"));
        assert!(out.contains("Audio (audio/mpeg, 3 bytes) saved to"));
        assert!(err.is_empty());
        assert_eq!(std::fs::read(&files.audio).unwrap(), b"ID3");
        assert_eq!(
            std::fs::read_to_string(files.script.unwrap()).unwrap(),
            "Welcome to the show"
        );
    }

    #[test]
    fn partial_failure_prints_inline_error_without_audio() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(&dir, false);
        std::fs::write(&files.audio, b"ID3").unwrap();
        let mut view = ViewState::new();
        view.apply(&Outcome::PartialFailure {
            script: String::from("..."),
            tts_error: String::from("quota exceeded"),
        });

        let (mut out, mut err) = (Vec::new(), Vec::new());
        render(&view, &files, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("No audio available"));
        assert!(out.ends_with("TTS Error: quota exceeded\n"));
        assert!(!files.audio.exists());
    }

    #[test]
    fn alert_goes_to_stderr_only() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(&dir, false);
        let mut view = ViewState::new();
        view.apply(&Outcome::Failure(SubmitError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: String::from("Internal Server Error"),
        }));

        let (mut out, mut err) = (Vec::new(), Vec::new());
        render(&view, &files, &mut out, &mut err).unwrap();

        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "Error: Internal Server Error\n");
    }

    #[test]
    fn validation_prompt_does_not_redraw_previous_results() {
        let dir = tempfile::tempdir().unwrap();
        let files = files_in(&dir, false);
        let mut view = ViewState::new();
        view.apply(&Outcome::Success {
            script: String::from("Welcome"),
            audio: AudioClip::mpeg(b"ID3".to_vec()),
        });
        view.apply(&Outcome::Validation(ValidationError::EmptyTopic));

        let (mut out, mut err) = (Vec::new(), Vec::new());
        render(&view, &files, &mut out, &mut err).unwrap();

        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "Please enter a podcast topic.\n");
        assert!(!files.audio.exists());
    }

    #[test]
    fn busy_indicator_only_while_busy() {
        let mut view = ViewState::new();
        let mut out = Vec::new();
        render_busy(&view, &mut out).unwrap();
        assert!(out.is_empty());

        view.begin_submit();
        render_busy(&view, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Generating...\n");
    }

    #[test]
    fn voice_list_marks_default() {
        let mut out = Vec::new();
        render_voices(Voice::Sarah, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 20);
        assert_eq!(out.lines().next(), Some("Aria"));
        assert!(out.contains("Sarah (default)\n"));
    }
}
