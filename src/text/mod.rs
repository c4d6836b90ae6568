//! Preparación del texto
//!
//! Sustitución de emojis y tokenización en palabras y emoticonos.

pub mod emoji;
pub mod tokenizer;

pub use emoji::replace_emojis;
pub use tokenizer::{SentiText, Token};
