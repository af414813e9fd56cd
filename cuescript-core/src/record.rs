/// One branching option of a choice record: the label shown to the player
/// and the scene id loaded when it is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub target: String,
}

/// One parsed line of a cuesheet.
///
/// `line` is the 1-based source line, kept for authoring diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Dialogue {
        line: usize,
        speaker: String,
        expression: String,
        text: String,
    },
    Choice {
        line: usize,
        options: Vec<ChoiceOption>,
    },
}

impl Record {
    pub fn line(&self) -> usize {
        match self {
            Record::Dialogue { line, .. } | Record::Choice { line, .. } => *line,
        }
    }
}

/// A fully parsed scene script, records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cuesheet {
    pub records: Vec<Record>,
}
