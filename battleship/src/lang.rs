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
//! Language files: one `key=value` file per language in the language folder, named
//! after the language's identifier (`es.properties` holds `es`). Entries missing from a
//! file fall back to the built-in English text.
use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::Path,
};

use seabattle::text::Texts;
use tracing::{debug, warn};

use crate::settings::{parse_properties, DEFAULT_LANG};

/// English text for the keys only the launcher uses.
const LAUNCHER_ENGLISH: &[(&str, &str)] = &[
    ("langName", "English"),
    ("langInput", "Choose a language: "),
    ("welcome", "Welcome to {0}! Sink the machine's fleet before it sinks yours."),
    ("quitHint", "Type quit at any prompt to leave."),
    ("selectMenu", "Select an option: "),
    ("playMenuName", "Play"),
    ("statsMenuName", "Statistics"),
    ("settingsMenuName", "Settings"),
    ("quitMenuName", "Quit"),
    ("noStats", "No statistics recorded."),
    ("changeLangSetting", "Change language"),
    ("changeRuleSetting", "Change placement rule ({0})"),
    ("backSetting", "Back"),
    ("langChanged", "Language set to {0}."),
    ("ruleChanged", "Placement rule is now {0}."),
    ("settingsSaved", "Settings saved to {0}."),
    ("closing", "Closing game..."),
];

fn launcher_english(key: &str) -> Option<&'static str> {
    LAUNCHER_ENGLISH
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Every language found in the language folder, plus built-in English.
#[derive(Debug, Clone)]
pub struct Catalog {
    langs: BTreeMap<String, HashMap<String, String>>,
    current: String,
}

impl Default for Catalog {
    fn default() -> Self {
        let mut langs = BTreeMap::new();
        langs.insert(DEFAULT_LANG.to_owned(), HashMap::new());
        Self {
            langs,
            current: DEFAULT_LANG.to_owned(),
        }
    }
}

impl Catalog {
    /// Load every file of `folder`. A missing folder leaves only English.
    pub fn load(folder: &Path) -> io::Result<Self> {
        let mut catalog = Self::default();
        let entries = match fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(folder = %folder.display(), "no language folder");
                return Ok(catalog);
            }
            Err(err) => return Err(err),
        };
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let id = match path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.split('.').next())
            {
                Some(id) if !id.is_empty() => id.to_owned(),
                _ => {
                    warn!(path = %path.display(), "skipping language file without a name");
                    continue;
                }
            };
            let text = fs::read_to_string(&path)?;
            let messages = catalog.langs.entry(id).or_default();
            messages.extend(parse_properties(&text, &path));
            debug!(path = %path.display(), "loaded language file");
        }
        Ok(catalog)
    }

    /// Identifier of the language in use.
    pub fn language(&self) -> &str {
        &self.current
    }

    /// Switch to a loaded language. Returns false and keeps the current one if the
    /// identifier is unknown.
    pub fn set_language(&mut self, id: &str) -> bool {
        if self.langs.contains_key(id) {
            self.current = id.to_owned();
            true
        } else {
            false
        }
    }

    /// Display name of a language, from its `langName` entry.
    pub fn language_name(&self, id: &str) -> String {
        self.langs
            .get(id)
            .and_then(|messages| messages.get("langName"))
            .map(String::as_str)
            .or_else(|| if id == DEFAULT_LANG { launcher_english("langName") } else { None })
            .unwrap_or(id)
            .to_owned()
    }

    /// Identifiers of all loaded languages, in order.
    pub fn languages(&self) -> impl '_ + Iterator<Item = &str> {
        self.langs.keys().map(String::as_str)
    }

    /// Find a language by identifier or by display name, ignoring ASCII case.
    pub fn find_language(&self, answer: &str) -> Option<String> {
        let answer = answer.trim();
        self.languages()
            .find(|id| {
                id.eq_ignore_ascii_case(answer)
                    || self.language_name(id).to_lowercase() == answer.to_lowercase()
            })
            .map(str::to_owned)
    }

    /// List of languages as `Name (id)`, for error messages.
    pub fn language_list(&self) -> String {
        self.languages()
            .map(|id| format!("{} ({})", self.language_name(id), id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Texts for Catalog {
    fn template(&self, key: &str) -> Option<&str> {
        self.langs
            .get(&self.current)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
            .or_else(|| launcher_english(key))
    }
}
