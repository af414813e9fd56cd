mod fade;
mod typewriter;

pub use fade::Fade;
pub use typewriter::Typewriter;

use std::sync::Arc;

use log::{debug, error, info, warn};

use cuescript_core::record::Record;
use crate::config::DialogueConfig;
use crate::error::SequencerError;
use crate::event::{InputEvent, OutputEvent};
use crate::manager::SceneManager;
use crate::runtime::{CharacterTable, Ctx};

/// Panel visibility states. `revealing` and `choice_pending` are sub-flags
/// of `Showing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    FadingIn,
    Showing,
    FadingOut,
}

/// Owns dialogue session state and drives it from a single discrete
/// "advance" input plus a per-frame `update` tick. One instance, one
/// active scene at a time.
pub struct DialogueSequencer {
    config: DialogueConfig,
    characters: CharacterTable,
    manager: SceneManager,

    state: PanelState,
    records: Arc<[Record]>,
    cursor: usize,
    revealing: bool,
    choice_pending: bool,
    /// Full text of the current dialogue record, so a fast-forward can
    /// recover the whole line.
    current_text: String,

    fade: Option<Fade>,
    typewriter: Typewriter,
}

impl DialogueSequencer {
    pub fn new(config: DialogueConfig, characters: CharacterTable, manager: SceneManager) -> Self {
        Self {
            config,
            characters,
            manager,
            state: PanelState::Hidden,
            records: Arc::from([]),
            cursor: 0,
            revealing: false,
            choice_pending: false,
            current_text: String::new(),
            fade: None,
            typewriter: Typewriter::default(),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    pub fn is_choice_pending(&self) -> bool {
        self.choice_pending
    }

    /// Index of the next unread record.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Loads and validates the script for `scene_id`, replacing the whole
    /// session: cursor back to 0, panel contents cleared.
    pub fn load_scene(&mut self, ctx: &mut Ctx, scene_id: &str) -> Result<(), SequencerError> {
        let records = self.manager.load(scene_id)?;

        // Fail fast on authoring mistakes: every dialogue speaker must be
        // in the character table before anything is displayed.
        for record in records.iter() {
            if let Record::Dialogue { line, speaker, .. } = record {
                if self.characters.get(speaker).is_none() {
                    error!(
                        "unknown speaker `{}` in scene `{}` line {}",
                        speaker, scene_id, line
                    );
                    return Err(SequencerError::UnknownSpeaker {
                        speaker: speaker.clone(),
                        scene: scene_id.to_string(),
                        line: *line,
                    });
                }
            }
        }

        ctx.active_scene = scene_id.to_string();
        ctx.clear_panel();
        self.records = records;
        self.cursor = 0;
        self.revealing = false;
        self.choice_pending = false;
        self.typewriter.cancel();
        self.current_text.clear();

        info!("Scene `{}` ready: {} record(s)", scene_id, self.records.len());
        ctx.push(OutputEvent::SceneLoaded {
            id: scene_id.to_string(),
            records: self.records.len(),
        });
        Ok(())
    }

    /// The single externally-triggered action. Eaten while the panel is
    /// fading, while a choice is pending, or when the active scene has no
    /// script file.
    pub fn advance(&mut self, ctx: &mut Ctx) {
        if matches!(self.state, PanelState::FadingIn | PanelState::FadingOut) {
            debug!("advance eaten: panel transition in progress");
            return;
        }
        if self.choice_pending {
            debug!("advance eaten: choice pending");
            return;
        }
        if !self.manager.has_scene(&ctx.active_scene) {
            debug!("advance eaten: no script for scene `{}`", ctx.active_scene);
            return;
        }

        match self.state {
            PanelState::Hidden => {
                // Opening the panel re-loads the active scene from scratch.
                let scene_id = ctx.active_scene.clone();
                if let Err(e) = self.load_scene(ctx, &scene_id) {
                    warn!("cannot open dialogue panel: {}", e);
                    return;
                }
                self.start_fade(ctx, 1.0);
                self.state = PanelState::FadingIn;
            }
            PanelState::Showing => {
                if self.cursor >= self.records.len() && !self.revealing {
                    if self.config.clear_after_scene {
                        ctx.active_scene.clear();
                    }
                    self.start_fade(ctx, 0.0);
                    self.state = PanelState::FadingOut;
                } else if self.revealing {
                    // Fast-forward: cancel the reveal and fill the text
                    // region with the full line. Never skips to the next
                    // record.
                    self.typewriter.cancel();
                    ctx.text = self.current_text.clone();
                    self.revealing = false;
                } else {
                    self.next_record(ctx);
                }
            }
            PanelState::FadingIn | PanelState::FadingOut => unreachable!(),
        }
    }

    /// Player picked option `index` from the pending choice set. Loads the
    /// option's target scene; the replaced script does not auto-advance.
    pub fn select_choice(&mut self, ctx: &mut Ctx, index: usize) -> Result<(), SequencerError> {
        if !self.choice_pending {
            return Err(SequencerError::NotAwaitingChoice);
        }
        let Some(option) = ctx.choices.get(index).cloned() else {
            return Err(SequencerError::ChoiceOutOfRange {
                index,
                len: ctx.choices.len(),
            });
        };

        self.choice_pending = false;
        info!("choice `{}` -> scene `{}`", option.label, option.target);
        ctx.push(OutputEvent::ChoiceTaken {
            label: option.label,
            target: option.target.clone(),
        });
        self.load_scene(ctx, &option.target)
    }

    /// Thin input dispatcher for hosts that route events rather than call
    /// methods directly.
    pub fn feed(&mut self, ctx: &mut Ctx, ev: InputEvent) {
        match ev {
            InputEvent::Advance => self.advance(ctx),
            InputEvent::ChoiceMade { index } => {
                if let Err(e) = self.select_choice(ctx, index) {
                    warn!("choice rejected: {}", e);
                }
            }
        }
    }

    /// Frame tick: resumes whichever cooperative tasks are alive (at most
    /// one fade and one reveal).
    pub fn update(&mut self, ctx: &mut Ctx, dt: f32) {
        let mut completed: Option<f32> = None;
        if let Some(fade) = &mut self.fade {
            ctx.panel_alpha = fade.tick(dt);
            ctx.panel_interactable = ctx.panel_alpha >= 1.0;
            if fade.finished() {
                completed = Some(fade.target());
            }
        }

        if let Some(target) = completed {
            self.fade = None;
            ctx.panel_alpha = target;
            ctx.panel_interactable = target >= 1.0;

            if target >= 1.0 {
                self.state = PanelState::Showing;
                ctx.push(OutputEvent::PanelShown);
                if !self.revealing {
                    self.next_record(ctx);
                }
            } else {
                self.state = PanelState::Hidden;
                ctx.push(OutputEvent::PanelHidden);
            }
        }

        if self.revealing {
            self.typewriter.tick(dt, &mut ctx.text);
            if !self.typewriter.is_active() {
                self.revealing = false;
            }
        }
    }

    fn start_fade(&mut self, ctx: &Ctx, to: f32) {
        // A new fade cancels any reveal still in flight; characters
        // already on screen stay put.
        self.typewriter.cancel();
        self.revealing = false;
        self.fade = Some(Fade::new(ctx.panel_alpha, to, self.config.fade_duration));
    }

    /// Parses the record under the cursor and drives the display.
    fn next_record(&mut self, ctx: &mut Ctx) {
        let Some(record) = self.records.get(self.cursor).cloned() else {
            debug!("no record at cursor {}", self.cursor);
            return;
        };
        self.cursor += 1;

        match record {
            Record::Choice { options, .. } => {
                self.choice_pending = true;
                ctx.choices = options.clone();
                debug!("choice surface: {} option(s)", options.len());
                ctx.push(OutputEvent::ShowChoice { options });
            }
            Record::Dialogue {
                line,
                speaker,
                expression,
                text,
            } => {
                if let Err(e) = self.show_dialogue(ctx, &speaker, &expression, text, line) {
                    // Load-time validation makes this unreachable for
                    // scenes that went through `load_scene`.
                    error!("record halted: {}", e);
                }
            }
        }
    }

    fn show_dialogue(
        &mut self,
        ctx: &mut Ctx,
        speaker: &str,
        expression: &str,
        text: String,
        line: usize,
    ) -> Result<(), SequencerError> {
        let Some(character) = self.characters.get(speaker) else {
            return Err(SequencerError::UnknownSpeaker {
                speaker: speaker.to_string(),
                scene: ctx.active_scene.clone(),
                line,
            });
        };

        if let Some(clip) = &character.voice_clip {
            ctx.push(OutputEvent::PlayVoice { path: clip.clone() });
        }

        ctx.speaker = speaker.to_string();
        ctx.portrait = Some(match character.portrait(expression) {
            Some(asset) => asset.to_string(),
            None => {
                debug!(
                    "no `{}` portrait for `{}`, using default",
                    expression, speaker
                );
                self.config.default_portrait.clone()
            }
        });

        ctx.text.clear();
        self.current_text = text.clone();
        ctx.push(OutputEvent::ShowDialogue {
            speaker: speaker.to_string(),
            text: text.clone(),
        });

        self.typewriter.start(&text, self.config.reveal_delay);
        self.revealing = self.typewriter.is_active();
        Ok(())
    }
}
