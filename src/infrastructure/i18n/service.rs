use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Language metadata loaded from JSON
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub flag: String,
}

/// Translation data loaded from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationData {
    pub language: LanguageInfo,
    pub ui: HashMap<String, String>,
}

/// Internationalization service with dynamic language loading
pub struct I18nService {
    current_language: String,
    translations: HashMap<String, TranslationData>,
    available_languages: Vec<LanguageInfo>,
}

impl I18nService {
    /// Auto-discovers every `*.json` file in `translations_dir`.
    ///
    /// Missing or malformed files are skipped; `t()` falls back to the key.
    pub fn load(translations_dir: &Path, preferred_language: &str) -> Self {
        let mut translations = HashMap::new();
        let mut available_languages = Vec::new();

        match std::fs::read_dir(translations_dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().and_then(|s| s.to_str()) != Some("json") {
                        continue;
                    }
                    match std::fs::read_to_string(&path)
                        .map_err(|e| e.to_string())
                        .and_then(|json| {
                            serde_json::from_str::<TranslationData>(&json)
                                .map_err(|e| e.to_string())
                        }) {
                        Ok(data) => {
                            debug!("Loaded translation {:?}", path);
                            available_languages.push(data.language.clone());
                            translations.insert(data.language.code.clone(), data);
                        }
                        Err(e) => warn!("Skipping translation file {:?}: {}", path, e),
                    }
                }
            }
            Err(e) => warn!(
                "Translations directory {:?} unavailable: {}",
                translations_dir, e
            ),
        }

        // Sort languages by code for consistency
        available_languages.sort_by(|a, b| a.code.cmp(&b.code));

        let current_language = available_languages
            .iter()
            .find(|l| l.code == preferred_language)
            .or_else(|| available_languages.first())
            .map(|l| l.code.clone())
            .unwrap_or_else(|| preferred_language.to_string());

        Self {
            current_language,
            translations,
            available_languages,
        }
    }

    /// Get list of all available languages
    pub fn available_languages(&self) -> &[LanguageInfo] {
        &self.available_languages
    }

    /// Set current language by code
    pub fn set_language(&mut self, language_code: &str) -> bool {
        if self.translations.contains_key(language_code) {
            self.current_language = language_code.to_string();
            true
        } else {
            false
        }
    }

    /// Get current language code
    pub fn current_language_code(&self) -> &str {
        &self.current_language
    }

    /// Translate a UI key
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations
            .get(&self.current_language)
            .and_then(|data| data.ui.get(key))
            .map(|s| s.as_str())
            .unwrap_or(key)
    }

    /// Translate with format parameters
    /// Usage: i18n.tf("result_prediction", &[("kg", "120")])
    /// Template in JSON: "Predicted demand: {kg} kg"
    pub fn tf(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self.t(key);
        let mut result = template.to_string();

        for (placeholder, value) in params {
            let placeholder_pattern = format!("{{{}}}", placeholder);
            result = result.replace(&placeholder_pattern, value);
        }

        result
    }
}

impl Default for I18nService {
    fn default() -> Self {
        Self::load(Path::new("translations"), "id")
    }
}
