use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Voices the podcast backend knows about.
/// The name is sent to the backend verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Voice {
    #[default]
    Aria,
    Roger,
    Sarah,
    Laura,
    Charlie,
    George,
    Callum,
    River,
    Liam,
    Charlotte,
    Alice,
    Matilda,
    Will,
    Jessica,
    Eric,
    Chris,
    Brian,
    Daniel,
    Lily,
    Bill,
}

impl Voice {
    pub const ALL: [Voice; 20] = [
        Voice::Aria,
        Voice::Roger,
        Voice::Sarah,
        Voice::Laura,
        Voice::Charlie,
        Voice::George,
        Voice::Callum,
        Voice::River,
        Voice::Liam,
        Voice::Charlotte,
        Voice::Alice,
        Voice::Matilda,
        Voice::Will,
        Voice::Jessica,
        Voice::Eric,
        Voice::Chris,
        Voice::Brian,
        Voice::Daniel,
        Voice::Lily,
        Voice::Bill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Aria => "Aria",
            Voice::Roger => "Roger",
            Voice::Sarah => "Sarah",
            Voice::Laura => "Laura",
            Voice::Charlie => "Charlie",
            Voice::George => "George",
            Voice::Callum => "Callum",
            Voice::River => "River",
            Voice::Liam => "Liam",
            Voice::Charlotte => "Charlotte",
            Voice::Alice => "Alice",
            Voice::Matilda => "Matilda",
            Voice::Will => "Will",
            Voice::Jessica => "Jessica",
            Voice::Eric => "Eric",
            Voice::Chris => "Chris",
            Voice::Brian => "Brian",
            Voice::Daniel => "Daniel",
            Voice::Lily => "Lily",
            Voice::Bill => "Bill",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown voice '{0}'. Run with --list-voices to see available voices.")]
pub struct UnknownVoice(pub String);

impl FromStr for Voice {
    type Err = UnknownVoice;

    /// Case-insensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Voice::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownVoice(String::from(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_voice_is_aria() {
        assert_eq!(Voice::default(), Voice::Aria);
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!("sarah".parse::<Voice>(), Ok(Voice::Sarah));
        assert_eq!(" CHARLOTTE ".parse::<Voice>(), Ok(Voice::Charlotte));
        assert_eq!("Bob".parse::<Voice>(), Err(UnknownVoice(String::from("Bob"))));
    }

    #[test]
    fn names_are_unique_and_parse_back() {
        for voice in Voice::ALL {
            assert_eq!(voice.as_str().parse::<Voice>(), Ok(voice));
        }
        let mut names: Vec<&str> = Voice::ALL.iter().map(Voice::as_str).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Voice::ALL.len());
    }

    #[test]
    fn serializes_as_plain_name() {
        assert_eq!(serde_json::to_string(&Voice::Callum).unwrap(), "\"Callum\"");
    }
}
