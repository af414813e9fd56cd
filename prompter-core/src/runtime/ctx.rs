use std::collections::VecDeque;
use cuescript_core::record::ChoiceOption;
use crate::event::OutputEvent;

/// Presentable session state. Mutated only by the sequencer on its
/// cooperative turn; the host reads it once per frame after `update`.
#[derive(Debug, Clone, Default)]
pub struct Ctx {
    /// Scene id the panel opens with, empty when none is wired.
    pub active_scene: String,

    pub speaker: String,
    pub portrait: Option<String>,
    /// The revealed prefix of the current line.
    pub text: String,
    pub choices: Vec<ChoiceOption>,

    pub panel_alpha: f32,
    /// Hit-testing is enabled only at full opacity.
    pub panel_interactable: bool,

    pub event_queue: VecDeque<OutputEvent>,
}

impl Ctx {
    pub fn push(&mut self, event: OutputEvent) {
        self.event_queue.push_back(event);
    }

    pub fn pop(&mut self) -> Option<OutputEvent> {
        self.event_queue.pop_front()
    }

    pub fn drain(&mut self) -> Vec<OutputEvent> {
        self.event_queue.drain(..).collect()
    }

    /// Clears name, portrait, text and any pending choice surface.
    pub(crate) fn clear_panel(&mut self) {
        self.speaker.clear();
        self.portrait = None;
        self.text.clear();
        self.choices.clear();
    }
}
