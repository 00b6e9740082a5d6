use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindlens_core::directory::{SUPPORT_EMAIL, WHATSAPP_LINE};
use mindlens_core::models::transcript::ASSISTANT_GREETING;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Practice presentation data: what the frontend shows, not how the
/// flows behave. Instrument banks, the answer scale, and severity
/// thresholds are compiled constants and are deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub practice_name: String,
    pub assistant_greeting: String,
    pub whatsapp_line: String,
    /// Added in v1; older configs are backfilled with the directory's
    /// published address.
    #[serde(default)]
    pub support_email: String,
    pub created_at: jiff::Timestamp,
}

impl ShellConfig {
    /// The stock MindLens presentation, stamped now.
    pub fn starter() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            practice_name: "MindLens".to_string(),
            assistant_greeting: ASSISTANT_GREETING.to_string(),
            whatsapp_line: WHATSAPP_LINE.to_string(),
            support_email: SUPPORT_EMAIL.to_string(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Redacted config info safe to send to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfigInfo {
    pub practice_name: String,
    pub support_email: String,
    pub whatsapp_hint: String,
    pub created_at: String,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.mindlens.app"))
}

fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<ShellConfig> {
    load_config_at(&config_path()?)
}

/// Load and migrate a config from an explicit path.
pub fn load_config_at(path: &Path) -> eyre::Result<ShellConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ShellConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update MindLens."
        ));
    }

    // v0 → v1: add support_email (the practice's published address)
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("support_email")
            .or_insert(serde_json::Value::String(SUPPORT_EMAIL.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added support_email)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &ShellConfig) -> eyre::Result<()> {
    save_config_at(&config_dir()?, config)
}

/// Write a config into an explicit directory.
pub fn save_config_at(dir: &Path, config: &ShellConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config() -> eyre::Result<()> {
    let path = config_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

pub fn config_info(config: &ShellConfig) -> ConfigInfo {
    ConfigInfo {
        practice_name: config.practice_name.clone(),
        support_email: config.support_email.clone(),
        whatsapp_hint: redact_phone(&config.whatsapp_line),
        created_at: config.created_at.to_string(),
    }
}

fn redact_phone(line: &str) -> String {
    if line.len() <= 8 {
        return "****".to_string();
    }
    let prefix = &line[..4];
    let suffix = &line[line.len() - 4..];
    format!("{prefix}...{suffix}")
}
