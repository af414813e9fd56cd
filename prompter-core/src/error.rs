use cuescript_core::parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequencerError {
    /// The scene id resolves to no script file.
    #[error("no script file for scene `{scene}`")]
    ScriptNotFound { scene: String },

    /// A dialogue record names a speaker missing from the character table.
    /// Caught at load time so authoring mistakes surface before display.
    #[error("unknown speaker `{speaker}` in scene `{scene}` line {line}")]
    UnknownSpeaker {
        speaker: String,
        scene: String,
        line: usize,
    },

    /// The script file parsed with authoring errors; the load is rejected
    /// wholesale. Each entry carries its source line.
    #[error("script for scene `{scene}` has {} malformed record(s)", .errors.len())]
    Parse {
        scene: String,
        errors: Vec<ParseError>,
    },

    #[error("choice index {index} out of range for {len} option(s)")]
    ChoiceOutOfRange { index: usize, len: usize },

    #[error("no choice is awaiting selection")]
    NotAwaitingChoice,

    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}
