//! Módulo de diccionario
//!
//! Léxicos de valencia y de emojis, y su carga desde archivos.

pub mod lexicon;
pub mod loader;

pub use lexicon::{EmojiLexicon, Lexicon};
pub use loader::LexiconLoader;
