// Copyright 2026 TedSearch Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TedError;

pub const DEFAULT_BASE_URL: &str = "https://ted.europa.eu/api/v2.0/notices/search";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
    pub country: String,
    pub limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            country: "SE".to_string(),
            limit: 20,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return Some(PathBuf::from(appdata));
        }
        if let Ok(profile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(profile).join("AppData").join("Roaming"));
        }
        return None;
    }

    if cfg!(target_os = "macos") {
        let home = std::env::var("HOME").ok()?;
        return Some(
            PathBuf::from(home)
                .join("Library")
                .join("Application Support"),
        );
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config"))
}

pub fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("ted-search").join("ted-search.toml"))
}

pub fn load_global_config() -> Result<Config, TedError> {
    let Some(path) = global_config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> Result<Config, TedError> {
    let text = std::fs::read_to_string(path).map_err(|err| TedError::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let mut config: Config = toml::from_str(&text).map_err(|err| TedError::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let defaults = Config::default();
    if config.limit == 0 {
        config.limit = defaults.limit;
    }
    if config.timeout_secs == 0 {
        config.timeout_secs = defaults.timeout_secs;
    }
    if config.base_url.trim().is_empty() {
        config.base_url = defaults.base_url;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use tempfile::tempdir;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn config_path(config_root: &Path) -> PathBuf {
        let base = if cfg!(target_os = "macos") {
            config_root.join("Library").join("Application Support")
        } else {
            config_root.to_path_buf()
        };
        base.join("ted-search").join("ted-search.toml")
    }

    fn with_env<T>(config_root: &Path, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().expect("env lock");
        let old_xdg = std::env::var("XDG_CONFIG_HOME").ok();
        let old_home = std::env::var("HOME").ok();
        let old_appdata = std::env::var("APPDATA").ok();
        set_env_var("XDG_CONFIG_HOME", config_root);
        set_env_var("HOME", config_root);
        set_env_var("APPDATA", config_root);
        let result = f();
        match old_xdg {
            Some(val) => set_env_var("XDG_CONFIG_HOME", val),
            None => remove_env_var("XDG_CONFIG_HOME"),
        }
        match old_home {
            Some(val) => set_env_var("HOME", val),
            None => remove_env_var("HOME"),
        }
        match old_appdata {
            Some(val) => set_env_var("APPDATA", val),
            None => remove_env_var("APPDATA"),
        }
        result
    }

    fn set_env_var(key: &str, value: impl AsRef<std::ffi::OsStr>) {
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn remove_env_var(key: &str) {
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config_dir = tempdir().expect("config dir");
        let config = with_env(config_dir.path(), load_global_config).expect("load");
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn partial_file_overrides_some_keys() {
        let config_dir = tempdir().expect("config dir");
        let path = config_path(config_dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).expect("mkdir");
        std::fs::write(&path, "country = \"DE\"\ntimeout_secs = 5\n").expect("write");

        let config = with_env(config_dir.path(), load_global_config).expect("load");
        assert_eq!(config.country, "DE");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.limit, 20);
    }

    #[test]
    fn zero_values_fall_back_to_defaults() {
        let dir = tempdir().expect("dir");
        let path = dir.path().join("ted-search.toml");
        std::fs::write(&path, "limit = 0\ntimeout_secs = 0\nbase_url = \" \"\n").expect("write");
        let config = read_config(&path).expect("read");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let dir = tempdir().expect("dir");
        let path = dir.path().join("ted-search.toml");
        std::fs::write(&path, "limit = \"many\"").expect("write");
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, TedError::Config { .. }));
    }
}
