//! Tokenizador de texto
//!
//! Separa por espacios y conserva contracciones y emoticonos.

use crate::heuristics;

/// Caracteres que se recortan al principio y al final de cada token
const PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Token individual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Forma en minúsculas, precalculada para las búsquedas
    pub lower: String,
}

impl Token {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
        }
    }

    pub fn is_upper(&self) -> bool {
        heuristics::is_upper(&self.text)
    }
}

/// Propiedades del texto relevantes para el sentimiento
#[derive(Debug, Clone)]
pub struct SentiText {
    tokens: Vec<Token>,
    is_cap_differential: bool,
}

impl SentiText {
    pub fn new(text: &str) -> Self {
        let tokens = words_and_emoticons(text);
        let is_cap_differential = heuristics::all_cap_differential(&tokens);
        Self {
            tokens,
            is_cap_differential,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_cap_differential(&self) -> bool {
        self.is_cap_differential
    }
}

/// Descarta fragmentos de un solo carácter y recorta la puntuación
fn words_and_emoticons(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .map(|w| Token::new(strip_punc_if_word(w)))
        .collect()
}

/// Si tras recortar quedan dos caracteres o menos, probablemente era un
/// emoticono (":)" quedaría vacío) y se devuelve el original.
fn strip_punc_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(PUNCTUATION);
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}
