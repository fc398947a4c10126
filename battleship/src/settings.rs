// Copyright 2020 Zachary Stewart
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
//! Persistent launcher settings, stored as `key=value` lines.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use seabattle::PlacementRule;
use tracing::{debug, warn};

/// Default name of the settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "battleship.properties";

const FIRST_LAUNCH: &str = "firstLaunch";
const PLACEMENT_RULE: &str = "placementRule";
const LANG: &str = "lang";
const LANG_FOLDER: &str = "langFolder";

/// Language used until the player picks one.
pub const DEFAULT_LANG: &str = "en";

/// Folder searched for language files, relative to the working directory.
pub const DEFAULT_LANG_FOLDER: &str = "./lang/";

/// Settings loaded from disk. Changes only reach the file through [`Settings::save`].
#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
    /// Entries in file order, so unknown keys survive a save.
    entries: Vec<(String, String)>,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => parse_properties(&text, &path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        let mut settings = Self { path, entries };
        settings.fill_default(LANG, DEFAULT_LANG);
        settings.fill_default(LANG_FOLDER, DEFAULT_LANG_FOLDER);
        settings.fill_default(FIRST_LAUNCH, "True");
        settings.fill_default(PLACEMENT_RULE, &PlacementRule::Strict.to_string());
        Ok(settings)
    }

    fn fill_default(&mut self, key: &str, value: &str) {
        if self.get(key).is_none() {
            self.set(key, value);
        }
    }

    /// Get the file these settings are saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw value of a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set the raw value of a key, adding it if absent.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_owned(),
            None => self.entries.push((key.to_owned(), value.to_owned())),
        }
    }

    /// Whether the greeting has not been shown yet.
    pub fn first_launch(&self) -> bool {
        self.get(FIRST_LAUNCH)
            .map_or(true, |v| v.eq_ignore_ascii_case("true"))
    }

    pub fn set_first_launch(&mut self, first: bool) {
        self.set(FIRST_LAUNCH, if first { "True" } else { "False" });
    }

    /// Identifier of the chosen language, the name of its file without extension.
    pub fn lang(&self) -> &str {
        self.get(LANG).unwrap_or(DEFAULT_LANG)
    }

    pub fn set_lang(&mut self, lang: &str) {
        self.set(LANG, lang);
    }

    /// Folder holding the language files.
    pub fn lang_folder(&self) -> PathBuf {
        PathBuf::from(self.get(LANG_FOLDER).unwrap_or(DEFAULT_LANG_FOLDER))
    }

    /// The stored placement rule. Unreadable values fall back to the strict rule.
    pub fn placement_rule(&self) -> PlacementRule {
        match self.get(PLACEMENT_RULE).map(str::parse::<PlacementRule>) {
            Some(Ok(rule)) => rule,
            Some(Err(err)) => {
                warn!(%err, "bad placement rule in settings");
                PlacementRule::default()
            }
            None => PlacementRule::default(),
        }
    }

    pub fn set_placement_rule(&mut self, rule: PlacementRule) {
        self.set(PLACEMENT_RULE, &rule.to_string());
    }

    /// Write every entry back to the file, replacing its contents.
    pub fn save(&self) -> io::Result<()> {
        let mut text = String::new();
        for (key, value) in &self.entries {
            text.push_str(&escape(key));
            text.push('=');
            text.push_str(&escape(value));
            text.push('\n');
        }
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

fn escape(s: &str) -> String {
    s.replace('\'', "''")
}

fn unescape(s: &str) -> String {
    s.replace("''", "'")
}

/// Parse `key=value` lines, skipping blank lines and `#` comments. Values are kept
/// verbatim, trailing spaces included. `path` is only used to report malformed lines.
pub fn parse_properties(text: &str, path: &Path) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut parts = line.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) => {
                entries.push((unescape(key.trim()), unescape(value)));
            }
            _ => warn!(path = %path.display(), line = number + 1, "skipping line without '='"),
        }
    }
    entries
}
