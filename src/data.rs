use std::path::PathBuf;

use crate::voice::Voice;

#[derive(Clone, Debug)]
pub struct PodcastClientURLs {
    pub backend: String,
}

#[derive(Clone, Debug)]
pub struct PodcastClientFiles {
    pub audio: PathBuf,
    pub script: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub urls: PodcastClientURLs,
    pub files: PodcastClientFiles,
    pub default_voice: Voice,
}
