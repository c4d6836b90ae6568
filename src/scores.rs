//! Resultado del análisis de sentimiento

use std::fmt;

use serde::Serialize;

/// Umbral convencional del compuesto para clasificar la polaridad
pub const POLARITY_THRESHOLD: f64 = 0.05;

/// Puntuaciones de un texto
///
/// `negative`, `neutral` y `positive` son proporciones que suman 1 (salvo
/// redondeo); `compound` está normalizado en [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentScores {
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(rename = "pos")]
    pub positive: f64,
    pub compound: f64,
}

/// Polaridad global de un texto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl SentimentScores {
    /// Clasifica según el compuesto: >= 0.05 positivo, <= -0.05 negativo
    pub fn polarity(&self) -> Polarity {
        if self.compound >= POLARITY_THRESHOLD {
            Polarity::Positive
        } else if self.compound <= -POLARITY_THRESHOLD {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

impl fmt::Display for SentimentScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'neg': {:?}, 'neu': {:?}, 'pos': {:?}, 'compound': {:?}}}",
            self.negative, self.neutral, self.positive, self.compound
        )
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Polarity::Positive => "positive",
            Polarity::Neutral => "neutral",
            Polarity::Negative => "negative",
        };
        f.write_str(label)
    }
}

/// Redondea a `decimals` decimales con empate al par
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
