//! Vader - Biblioteca de análisis de sentimiento
//!
//! Puntúa textos cortos con un léxico de valencias y un conjunto de
//! heurísticas (negación, intensificadores, mayúsculas, puntuación, "but" y
//! modismos). Determinista y sin entrenamiento.

pub mod analyzer;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod heuristics;
pub mod languages;
pub mod scores;
pub mod text;

pub use analyzer::SentimentAnalyzer;
pub use config::{Config, OutputFormat};
pub use error::{Result, VaderError};
pub use scores::{Polarity, SentimentScores};
