//! Paquetes de idioma definidos en TOML
//!
//! Permiten sustituir las listas de negaciones, intensificadores y modismos
//! sin recompilar. Ejemplo:
//!
//! ```toml
//! code = "en-gb"
//! name = "English (GB)"
//! negations = ["not", "never", "isn't"]
//!
//! [boosters]
//! increment = ["very", "really"]
//! decrement = ["kind of", "slightly"]
//!
//! [idioms]
//! "yeah right" = -2.0
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Result, VaderError};
use crate::heuristics::{B_DECR, B_INCR};
use crate::languages::Language;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BoosterLists {
    increment: Vec<String>,
    decrement: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawPack {
    code: String,
    name: String,
    #[serde(default)]
    negations: Vec<String>,
    #[serde(default)]
    boosters: BoosterLists,
    #[serde(default)]
    idioms: HashMap<String, f64>,
}

/// Idioma cargado desde un paquete TOML
#[derive(Debug, Clone)]
pub struct LanguagePack {
    code: String,
    name: String,
    negations: HashSet<String>,
    boosters: HashMap<String, f64>,
    idioms: HashMap<String, f64>,
}

impl LanguagePack {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VaderError::LanguagePackNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| VaderError::io(path, e))?;
        Self::from_toml_str(&path.display().to_string(), &content)
    }

    pub fn from_toml_str(source_name: &str, content: &str) -> Result<Self> {
        let raw: RawPack = toml::from_str(content).map_err(|source| VaderError::LanguagePack {
            name: source_name.to_string(),
            source,
        })?;

        // TOML admite nan e inf
        if let Some((phrase, value)) = raw.idioms.iter().find(|(_, v)| !v.is_finite()) {
            return Err(VaderError::InvalidIdiom {
                name: source_name.to_string(),
                phrase: phrase.clone(),
                value: *value,
            });
        }

        // Las claves se comparan con tokens en minúsculas
        let boosters = raw
            .boosters
            .increment
            .iter()
            .map(|w| (w.to_lowercase(), B_INCR))
            .chain(raw.boosters.decrement.iter().map(|w| (w.to_lowercase(), B_DECR)))
            .collect::<HashMap<_, _>>();

        let pack = Self {
            code: raw.code,
            name: raw.name,
            negations: raw.negations.iter().map(|w| w.to_lowercase()).collect(),
            boosters,
            idioms: raw
                .idioms
                .into_iter()
                .map(|(phrase, value)| (phrase.to_lowercase(), value))
                .collect(),
        };

        debug!(
            "Paquete '{}': {} negaciones, {} intensificadores, {} modismos",
            pack.code,
            pack.negations.len(),
            pack.boosters.len(),
            pack.idioms.len()
        );
        Ok(pack)
    }
}

impl Language for LanguagePack {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    fn booster(&self, phrase: &str) -> Option<f64> {
        self.boosters.get(phrase).copied()
    }

    fn special_case(&self, phrase: &str) -> Option<f64> {
        self.idioms.get(phrase).copied()
    }
}
