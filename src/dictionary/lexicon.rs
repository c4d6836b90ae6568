//! Léxicos en memoria: valencias por palabra y descripciones de emojis

use std::collections::HashMap;

/// Léxico de sentimiento: palabra → valencia base
///
/// Las claves se guardan tal cual aparecen en el recurso. Las búsquedas se
/// hacen con el token en minúsculas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta o reemplaza una entrada; devuelve la valencia anterior
    pub fn insert(&mut self, word: &str, valence: f64) -> Option<f64> {
        self.entries.insert(word.to_string(), valence)
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(word, valence)| (word.as_str(), *valence))
    }
}

impl FromIterator<(String, f64)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Léxico de emojis: glifo (o secuencia) → frase descriptiva
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmojiLexicon {
    entries: HashMap<String, String>,
    /// Longitud en caracteres de la clave más larga
    max_key_chars: usize,
}

impl EmojiLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, glyph: &str, phrase: &str) -> Option<String> {
        self.max_key_chars = self.max_key_chars.max(glyph.chars().count());
        self.entries.insert(glyph.to_string(), phrase.to_string())
    }

    pub fn get(&self, glyph: &str) -> Option<&str> {
        self.entries.get(glyph).map(String::as_str)
    }

    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for EmojiLexicon {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        for (glyph, phrase) in iter {
            lexicon.insert(glyph, phrase);
        }
        lexicon
    }
}
