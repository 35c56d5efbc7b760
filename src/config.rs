// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generator settings, loadable from a JSON or YAML file.

use crate::i18n::{self, PSEUDO_LOCALE};
use crate::pseudo::{Pseudofier, MAX_EXPANSION};
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Tag used in output file names and for entries holding a culture name.
    pub pseudo_locale: String,
    /// Padding ratio appended to translated strings.
    pub expansion: f64,
    /// Wrap translated strings in brackets.
    pub brackets: bool,
    /// Write outputs here instead of next to their inputs.
    pub output_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pseudo_locale: PSEUDO_LOCALE.to_string(),
            expansion: 0.0,
            brackets: false,
            output_dir: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        let settings: Settings = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json settings {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml settings {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported settings extension for {}",
                    path.display()
                ))
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects a pseudo-locale that is not itself a locale identifier and
    /// expansion ratios outside `0.0..=MAX_EXPANSION`.
    pub fn validate(&self) -> Result<()> {
        if !i18n::is_locale_identifier(&self.pseudo_locale) {
            bail!(
                "pseudo locale {:?} is not a valid locale identifier",
                self.pseudo_locale
            );
        }
        if !(0.0..=MAX_EXPANSION).contains(&self.expansion) {
            bail!(
                "expansion {} is outside 0.0..={}",
                self.expansion,
                MAX_EXPANSION
            );
        }
        Ok(())
    }

    /// The pseudo-locale with surrounding whitespace removed.
    pub fn locale_tag(&self) -> &str {
        self.pseudo_locale.trim()
    }

    pub fn pseudofier(&self) -> Pseudofier {
        Pseudofier::new()
            .with_expansion(self.expansion)
            .with_brackets(self.brackets)
    }
}
