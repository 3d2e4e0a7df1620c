use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;
use url::Url;

mod backend;
mod data;
mod error;
mod orchestrator;
mod schemas;
mod terminal;
mod view;
mod voice;

use backend::HttpBackend;
use data::{ClientConfig, PodcastClientFiles, PodcastClientURLs};
use orchestrator::{Orchestrator, OutcomeKind};
use terminal::Session;
use voice::Voice;

#[derive(Parser, Debug)]
#[command(name = "podcast-client")]
#[command(
    version,
    about = "Generate a podcast script and audio for a topic using a podcast backend"
)]
struct Args {
    /// Base URL of the podcast backend.
    #[arg(
        short,
        long,
        help = "Base URL of the podcast backend",
        env = "PODCAST_CLIENT_URL",
        default_value_t = String::from("http://127.0.0.1:8000")
    )]
    url: String,

    /// Voice used to read the script.
    #[arg(
        short,
        long,
        help = "Voice used to read the script (see --list-voices)",
        env = "PODCAST_CLIENT_VOICE",
        default_value_t = Voice::default()
    )]
    voice: Voice,

    /// Where to write the generated audio.
    #[arg(
        short,
        long,
        help = "Where to write the generated audio (mp3)",
        env = "PODCAST_CLIENT_OUTPUT",
        default_value = "podcast.mp3"
    )]
    output: PathBuf,

    /// Optional file for the generated script.
    #[arg(
        short,
        long,
        help = "Also write the generated script to this file",
        env = "PODCAST_CLIENT_SCRIPT_OUTPUT"
    )]
    script_output: Option<PathBuf>,

    /// Print available voices and exit.
    #[arg(long, help = "Print available voices and exit", default_value_t = false)]
    list_voices: bool,

    /// Podcast topic. Starts an interactive session when omitted.
    #[arg(help = "Podcast topic (starts an interactive session when omitted)")]
    topic: Vec<String>,
}

impl Args {
    fn into_config(self) -> Result<(ClientConfig, Option<String>)> {
        let backend = Url::parse(&self.url)
            .wrap_err_with(|| format!("Invalid backend URL '{}'", self.url))?;
        if !matches!(backend.scheme(), "http" | "https") {
            return Err(eyre!("Backend URL must use http or https, got '{}'", self.url));
        }

        let topic = if self.topic.is_empty() {
            None
        } else {
            Some(self.topic.join(" "))
        };

        Ok((
            ClientConfig {
                urls: PodcastClientURLs {
                    backend: self.url,
                },
                files: PodcastClientFiles {
                    audio: self.output,
                    script: self.script_output,
                },
                default_voice: self.voice,
            },
            topic,
        ))
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let level = std::env::var("RUST_LOG").unwrap_or(String::from("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace("-", "_")
        )))
        .init();

    let args = Args::parse();

    if args.list_voices {
        terminal::render_voices(args.voice, &mut std::io::stdout())?;
        return Ok(ExitCode::SUCCESS);
    }

    tracing::debug!("Starting client with config: {args:#?}");

    let (config, topic) = args.into_config()?;

    let orchestrator = Orchestrator::new(HttpBackend::new(&config.urls.backend))
        .with_default_voice(config.default_voice);
    tracing::debug!("Using podcast endpoint {}", orchestrator.backend().endpoint());

    let mut session = Session::new(
        orchestrator,
        config.files,
        std::io::stdout(),
        std::io::stderr(),
    );

    match topic {
        Some(topic) => Ok(match session.submit(&topic).await? {
            OutcomeKind::Success => ExitCode::SUCCESS,
            OutcomeKind::PartialFailure => {
                tracing::warn!("Script generated but speech synthesis failed");
                ExitCode::SUCCESS
            }
            OutcomeKind::Validation | OutcomeKind::Failure => ExitCode::FAILURE,
        }),
        None => {
            tracing::info!(
                "Interactive session with {} (':voice <name>' to change voice, ':q' to quit)",
                config.urls.backend
            );
            session
                .run_interactive(tokio::io::BufReader::new(tokio::io::stdin()))
                .await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_words_are_joined() {
        let args = Args::parse_from([
            "podcast-client",
            "-v",
            "sarah",
            "The",
            "future",
            "of",
            "energy",
        ]);
        let (config, topic) = args.into_config().unwrap();

        assert_eq!(topic.as_deref(), Some("The future of energy"));
        assert_eq!(config.default_voice, Voice::Sarah);
        assert_eq!(config.files.audio, PathBuf::from("podcast.mp3"));
    }

    #[test]
    fn no_topic_means_interactive() {
        let args = Args::parse_from(["podcast-client", "--url", "https://podcasts.example.com/"]);
        let (config, topic) = args.into_config().unwrap();

        assert_eq!(topic, None);
        assert_eq!(config.urls.backend, "https://podcasts.example.com/");
    }

    #[test]
    fn rejects_bad_backend_url() {
        let args = Args::parse_from(["podcast-client", "--url", "not a url", "topic"]);
        assert!(args.into_config().is_err());

        let args = Args::parse_from(["podcast-client", "--url", "ftp://example.com", "topic"]);
        assert!(args.into_config().is_err());
    }

    #[test]
    fn rejects_unknown_voice() {
        assert!(Args::try_parse_from(["podcast-client", "-v", "Bob", "topic"]).is_err());
    }
}
