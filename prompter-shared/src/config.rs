use std::sync::RwLock;
use std::path::Path;
use std::fs;
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

/// Writes a default `config.toml` built from the given sections when the
/// file does not exist yet. Call before [`init`].
pub fn ensure_exists<P, T>(path: P, defaults: &T) -> anyhow::Result<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }

    log::info!("Creating default configuration at {:?}", path);
    let toml_str = toml::to_string_pretty(defaults)?;
    fs::write(path, toml_str)?;
    Ok(())
}

pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path)?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    let table: Table = toml::from_str(&content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    });

    GLOBAL_CONFIG.set(RwLock::new(table))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

/// Reads one `[section]` of the loaded config, falling back to the type's
/// defaults when the section is absent or does not fit.
pub fn get<T: DeserializeOwned + Default>(section: &str) -> T {
    let store = GLOBAL_CONFIG.get().expect("prompter-shared config not initialized!");
    let read_guard = store.read().unwrap();

    if let Some(value) = read_guard.get(section) {
        value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{}]' mismatch: {}. Using default.", section, e);
            T::default()
        })
    } else {
        T::default()
    }
}
