pub mod ctx;
pub mod assets;

pub use ctx::Ctx;
pub use assets::{Character, CharacterTable};
