use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;

use prompter_core::config::{DialogueConfig, SystemConfig, TriggerConfig};
use prompter_core::event::InputEvent;
use prompter_core::runtime::{Character, CharacterTable};
use prompter_core::sequencer::PanelState;
use prompter_core::{Ctx, DialogueSequencer, OutputEvent, SceneManager, TriggerNotifier};

#[derive(Serialize)]
struct FullConfig {
    system: SystemConfig,
    dialogue: DialogueConfig,
    trigger: TriggerConfig,
}

impl Default for FullConfig {
    fn default() -> Self {
        Self {
            system: SystemConfig {
                script_path: "example-scene/assets/dialogue/".into(),
                ..SystemConfig::default()
            },
            dialogue: DialogueConfig::default(),
            trigger: TriggerConfig::default(),
        }
    }
}

fn main() {
    let config_path = "config.toml";
    if let Err(e) = prompter_shared::config::ensure_exists(config_path, &FullConfig::default()) {
        eprintln!("Config generation warning: {}", e);
    }
    if let Err(e) = prompter_shared::config::init(config_path) {
        eprintln!("Config load warning: {}", e);
    }

    let system: SystemConfig = prompter_shared::config::get("system");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&system.log_level),
    )
    .init();

    log::info!(">>> prompter example scene <<<");

    let dialogue: DialogueConfig = prompter_shared::config::get("dialogue");
    let trigger_cfg: TriggerConfig = prompter_shared::config::get("trigger");

    let characters = CharacterTable::new([
        Character::new("Amy")
            .with_portrait("happy", "portraits/amy_happy.png")
            .with_portrait("sad", "portraits/amy_sad.png")
            .with_voice("voice/amy_blip.ogg"),
        Character::new("Guide").with_portrait("neutral", "portraits/guide_neutral.png"),
    ]);

    let mut manager = SceneManager::new(&system.script_path);
    match manager.scan() {
        Ok(0) => {
            log::error!("No dialogue scripts under {}", system.script_path);
            return;
        }
        Ok(_) => {}
        Err(e) => {
            log::error!("Scene scan failed: {:?}", e);
            return;
        }
    }

    let mut ctx = Ctx::default();
    ctx.active_scene = "intro".to_string();
    let mut seq = DialogueSequencer::new(dialogue, characters, manager);

    // The physics collaborator would call this when the player walks into
    // the volume; here we simulate one entry to open the panel.
    let entered = Rc::new(Cell::new(false));
    let flag = entered.clone();
    let mut trigger = TriggerNotifier::new(trigger_cfg.needed_tag.clone(), move || flag.set(true));
    trigger.on_spatial_entry(&trigger_cfg.needed_tag);
    if entered.get() {
        seq.feed(&mut ctx, InputEvent::Advance);
    }

    // Simulated 60 fps frame loop; a real host calls update/draw per frame.
    let dt = 1.0 / 60.0;
    let mut done = false;
    let mut frames = 0u32;

    while !done && frames < 100_000 {
        seq.update(&mut ctx, dt);
        frames += 1;

        for ev in ctx.drain() {
            match ev {
                OutputEvent::SceneLoaded { id, records } => {
                    log::info!("--- scene `{}` ({} records) ---", id, records);
                }
                OutputEvent::ShowDialogue { speaker, text } => {
                    log::info!("{}: {}", speaker, text);
                }
                OutputEvent::ShowChoice { options } => {
                    for (i, opt) in options.iter().enumerate() {
                        log::info!("  [{}] {} -> {}", i, opt.label, opt.target);
                    }
                    seq.feed(&mut ctx, InputEvent::ChoiceMade { index: 0 });
                }
                OutputEvent::ChoiceTaken { label, target } => {
                    log::info!("picked `{}`, loading `{}`", label, target);
                }
                OutputEvent::PlayVoice { path } => log::debug!("voice blip: {}", path),
                OutputEvent::PanelShown => log::debug!("panel at full opacity"),
                OutputEvent::PanelHidden => {
                    log::info!("panel hidden after {} frames", frames);
                    done = true;
                }
            }
        }

        // Press "confirm" whenever the line has fully revealed.
        if seq.state() == PanelState::Showing && !seq.is_revealing() && !seq.is_choice_pending() {
            seq.feed(&mut ctx, InputEvent::Advance);
        }
    }
}
