use cuescript_core::record::ChoiceOption;

/// Discrete notifications for the host: asset playback, choice surfaces,
/// panel visibility edges. Continuous state (panel alpha, revealed text)
/// lives on [`crate::Ctx`] and is read directly each frame.
#[derive(Debug, Clone)]
pub enum OutputEvent {
    SceneLoaded { id: String, records: usize },
    ShowDialogue { speaker: String, text: String },
    ShowChoice { options: Vec<ChoiceOption> },
    ChoiceTaken { label: String, target: String },
    PlayVoice { path: String },

    PanelShown,
    PanelHidden,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Advance,
    ChoiceMade { index: usize },
}
