use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use log::info;
use rustc_hash::{FxHashMap, FxHashSet};
use walkdir::WalkDir;

use cuescript_core::parser::Parser;
use cuescript_core::record::Record;
use crate::error::SequencerError;

/// Resolves scene ids to script files under one dialogue assets directory
/// and caches parsed records per scene.
pub struct SceneManager {
    script_dir: PathBuf,
    known: FxHashSet<String>,
    cache: FxHashMap<String, Arc<[Record]>>,
}

impl SceneManager {
    pub fn new(script_dir: impl Into<PathBuf>) -> Self {
        Self {
            script_dir: script_dir.into(),
            known: FxHashSet::default(),
            cache: FxHashMap::default(),
        }
    }

    /// Walks the script directory and indexes every `*.txt` stem as an
    /// available scene. Returns the number of scenes found.
    pub fn scan(&mut self) -> anyhow::Result<usize> {
        let meta = fs::metadata(&self.script_dir)
            .with_context(|| format!("script directory {:?} not accessible", self.script_dir))?;
        anyhow::ensure!(
            meta.is_dir(),
            "script path {:?} is not a directory",
            self.script_dir
        );

        info!("Scanning dialogue scripts at: {:?}", self.script_dir);
        self.known.clear();

        for entry in WalkDir::new(&self.script_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() && path.extension().map_or(false, |e| e == "txt") {
                if let Some(stem) = path.file_stem() {
                    self.known.insert(stem.to_string_lossy().to_string());
                }
            }
        }

        info!("Scan complete. Scenes: {}", self.known.len());
        Ok(self.known.len())
    }

    pub fn scene_path(&self, scene_id: &str) -> PathBuf {
        self.script_dir.join(format!("{scene_id}.txt"))
    }

    /// Cheap existence check backing the advance-input guard. Falls back
    /// to the filesystem for scenes written after the startup scan.
    pub fn has_scene(&self, scene_id: &str) -> bool {
        if scene_id.is_empty() {
            return false;
        }
        self.known.contains(scene_id) || self.scene_path(scene_id).is_file()
    }

    pub fn load(&mut self, scene_id: &str) -> Result<Arc<[Record]>, SequencerError> {
        if let Some(records) = self.cache.get(scene_id) {
            return Ok(records.clone());
        }

        let path = self.scene_path(scene_id);
        if !path.is_file() {
            return Err(SequencerError::ScriptNotFound {
                scene: scene_id.to_string(),
            });
        }

        let records = self.parse_file(scene_id, &path)?;
        self.known.insert(scene_id.to_string());
        self.cache.insert(scene_id.to_string(), records.clone());
        Ok(records)
    }

    fn parse_file(&self, scene_id: &str, path: &Path) -> Result<Arc<[Record]>, SequencerError> {
        let content = fs::read_to_string(path)?;

        match Parser::new(&content).parse() {
            Ok(sheet) => {
                info!("Loaded scene `{}`: {} record(s)", scene_id, sheet.records.len());
                Ok(Arc::from(sheet.records))
            }
            Err(errors) => {
                log::error!("Malformed records in {:?}:", path);
                for err in &errors {
                    log::error!("   Line {}: {}", err.line, err.msg);
                }
                Err(SequencerError::Parse {
                    scene: scene_id.to_string(),
                    errors,
                })
            }
        }
    }
}
