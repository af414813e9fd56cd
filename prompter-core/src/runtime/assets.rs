use rustc_hash::FxHashMap;

/// One configured character: expression-keyed portrait assets plus an
/// optional voice clip. Portrait keys are lowercased at build time so
/// lookup is case-insensitive without any runtime field introspection.
#[derive(Debug, Clone)]
pub struct Character {
    pub id: String,
    portraits: FxHashMap<String, String>,
    pub voice_clip: Option<String>,
}

impl Character {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            portraits: FxHashMap::default(),
            voice_clip: None,
        }
    }

    pub fn with_portrait(mut self, expression: &str, asset: impl Into<String>) -> Self {
        self.portraits.insert(expression.to_lowercase(), asset.into());
        self
    }

    pub fn with_voice(mut self, path: impl Into<String>) -> Self {
        self.voice_clip = Some(path.into());
        self
    }

    /// Case-insensitive portrait lookup. `None` means the caller should
    /// fall back to the default portrait.
    pub fn portrait(&self, expression: &str) -> Option<&str> {
        self.portraits
            .get(&expression.to_lowercase())
            .map(String::as_str)
    }
}

/// Read-only speaker lookup table, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct CharacterTable {
    by_id: FxHashMap<String, Character>,
}

impl CharacterTable {
    pub fn new(characters: impl IntoIterator<Item = Character>) -> Self {
        let mut by_id = FxHashMap::default();
        for character in characters {
            by_id.insert(character.id.clone(), character);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Character> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
