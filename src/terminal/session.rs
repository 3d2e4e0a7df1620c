use std::io::Write;

use eyre::{Result, WrapErr};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    backend::PodcastBackend,
    data::PodcastClientFiles,
    orchestrator::{Orchestrator, OutcomeKind},
    terminal::{render, render_busy, render_voices},
    view::ViewState,
    voice::Voice,
};

const QUIT_COMMAND: &str = ":q";
const VOICE_COMMAND: &str = ":voice";
const VOICES_COMMAND: &str = ":voices";

/// A terminal podcast session: one view, any number of sequential submissions
pub struct Session<B, W, E> {
    orchestrator: Orchestrator<B>,
    files: PodcastClientFiles,
    view: ViewState,
    /// Voice chosen with `:voice`, the orchestrator default if unset
    voice: Option<Voice>,
    out: W,
    err: E,
}

impl<B: PodcastBackend, W: Write, E: Write> Session<B, W, E> {
    pub fn new(orchestrator: Orchestrator<B>, files: PodcastClientFiles, out: W, err: E) -> Self {
        Self {
            orchestrator,
            files,
            view: ViewState::new(),
            voice: None,
            out,
            err,
        }
    }

    /// Submit one topic and draw the result
    pub async fn submit(&mut self, topic: &str) -> Result<OutcomeKind> {
        let Self {
            orchestrator,
            view,
            voice,
            out,
            ..
        } = self;

        let mut busy_draw = Ok(());
        let outcome = orchestrator
            .submit_with(view, topic, *voice, |v| busy_draw = render_busy(v, &mut *out))
            .await;
        busy_draw?;

        render(&self.view, &self.files, &mut self.out, &mut self.err)?;
        self.out.flush()?;

        Ok(outcome.kind())
    }

    /// Read topics line by line until EOF or `:q`.
    /// `:voice <name>` changes the voice, `:voices` lists them.
    pub async fn run_interactive<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        loop {
            write!(self.out, "Topic> ")?;
            self.out.flush()?;

            let Some(line) = lines
                .next_line()
                .await
                .wrap_err("Failed to read topic from input")?
            else {
                break;
            };

            let trimmed = line.trim();
            let (command, arg) = trimmed
                .split_once(char::is_whitespace)
                .map(|(command, arg)| (command, arg.trim()))
                .unwrap_or((trimmed, ""));

            match command {
                QUIT_COMMAND => break,
                VOICES_COMMAND => {
                    let current = self.voice.unwrap_or(self.orchestrator.default_voice());
                    render_voices(current, &mut self.out)?;
                }
                VOICE_COMMAND if arg.is_empty() => {
                    writeln!(self.err, "Usage: {VOICE_COMMAND} <name>")?;
                }
                VOICE_COMMAND => match arg.parse::<Voice>() {
                    Ok(voice) => {
                        self.voice = Some(voice);
                        writeln!(self.out, "Voice set to {voice}")?;
                    }
                    Err(e) => writeln!(self.err, "{e}")?,
                },
                _ => {
                    self.submit(&line).await?;
                }
            }
        }

        writeln!(self.out)?;
        Ok(())
    }
}
