pub mod runtime;
pub mod sequencer;
pub mod manager;
pub mod trigger;
pub mod event;
pub mod config;
pub mod error;

pub use runtime::Ctx;
pub use sequencer::DialogueSequencer;
pub use manager::SceneManager;
pub use trigger::TriggerNotifier;
pub use event::OutputEvent;
pub use error::SequencerError;
