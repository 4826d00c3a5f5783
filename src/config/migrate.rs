//! Upgrade configuration files written with the old key names.

use super::Config;
use crate::errors::AppResult;
use serde_yaml::Value;

/// Legacy key → current key.
const RENAMED_KEYS: [(&str, &str); 3] = [
    ("sheet_url", "menu_source"),
    ("hours_url", "hours_source"),
    ("refresh_secs", "status_interval_secs"),
];

/// Rename legacy keys in a parsed YAML document.
///   true  → at least one key renamed
///   false → no change needed
/// A legacy key never overwrites a current key that is already present.
fn rename_legacy_keys(yaml: &mut Value) -> bool {
    let Some(map) = yaml.as_mapping_mut() else {
        return false;
    };

    let mut changed = false;
    for (old, new) in RENAMED_KEYS {
        let old_key = Value::String(old.to_string());
        let new_key = Value::String(new.to_string());

        if let Some(val) = map.remove(&old_key) {
            if !map.contains_key(&new_key) {
                map.insert(new_key, val);
            }
            changed = true;
        }
    }
    changed
}

/// Parse a config file, upgrading legacy key names on the fly.
pub fn upgrade(content: &str) -> AppResult<(Config, bool)> {
    let mut yaml: Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok((Config::default(), false));
    }
    let changed = rename_legacy_keys(&mut yaml);
    let cfg: Config = serde_yaml::from_value(yaml)?;
    Ok((cfg, changed))
}
