//! Heurísticas de sentimiento
//!
//! Funciones puras sin estado: negación, intensificadores, mayúsculas y
//! normalización de la puntuación final. Las constantes son las medias
//! empíricas del modelo VADER.

use crate::languages::Language;
use crate::text::Token;

/// Incremento de un intensificador ("very", "extremely")
pub const B_INCR: f64 = 0.293;

/// Decremento de un atenuador ("kind of", "slightly")
pub const B_DECR: f64 = -0.293;

/// Incremento por escribir en MAYÚSCULAS una palabra con carga
pub const C_INCR: f64 = 0.733;

/// Factor aplicado a la valencia de una palabra negada
pub const N_SCALAR: f64 = -0.74;

/// Alfa de la normalización, aproxima el máximo esperado
pub const NORMALIZE_ALPHA: f64 = 15.0;

/// Incremento por cada '!' (hasta 4)
pub const EXCL_INCR: f64 = 0.292;

/// Incremento por cada '?' (de 1 a 3)
pub const QUES_INCR_SMALL: f64 = 0.18;

/// Incremento fijo con 4 o más '?'
pub const QUES_INCR_LARGE: f64 = 0.96;

/// ¿Contiene la ventana alguna negación?
///
/// Con `include_nt`, cualquier palabra que contenga "n't" también cuenta.
pub fn negated(language: &dyn Language, tokens: &[Token], include_nt: bool) -> bool {
    if tokens.iter().any(|t| language.is_negation(&t.lower)) {
        return true;
    }

    include_nt && tokens.iter().any(|t| t.lower.contains("n't"))
}

/// Lleva la suma de valencias al intervalo [-1, 1]
pub fn normalize(score: f64, alpha: f64) -> f64 {
    let norm_score = score / (score * score + alpha).sqrt();
    norm_score.clamp(-1.0, 1.0)
}

/// Ajuste que aporta una palabra precedente si es intensificador o atenuador
///
/// El signo del ajuste sigue al de la valencia; un intensificador en
/// MAYÚSCULAS dentro de una frase con diferencia de mayúsculas suma además
/// `C_INCR`.
pub fn scalar_inc_dec(language: &dyn Language, token: &Token, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(mut scalar) = language.booster(&token.lower) else {
        return 0.0;
    };

    if valence < 0.0 {
        scalar = -scalar;
    }

    if is_cap_diff && token.is_upper() {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }

    scalar
}

/// Verdadero si algunas palabras, pero no todas, están en MAYÚSCULAS
pub fn all_cap_differential(tokens: &[Token]) -> bool {
    let all_cap_words = tokens.iter().filter(|t| t.is_upper()).count();
    let cap_differential = tokens.len() - all_cap_words;
    cap_differential > 0 && cap_differential < tokens.len()
}

/// ¿Está la palabra en MAYÚSCULAS?
///
/// Debe tener al menos una letra y todas sus letras en mayúscula.
pub fn is_upper(word: &str) -> bool {
    let mut has_letter = false;
    for ch in word.chars().filter(|c| c.is_alphabetic()) {
        if !ch.is_uppercase() {
            return false;
        }
        has_letter = true;
    }
    has_letter
}

/// Amplificador por signos de exclamación e interrogación
pub fn punctuation_emphasis(text: &str) -> f64 {
    amplify_exclamation(text) + amplify_question(text)
}

fn amplify_exclamation(text: &str) -> f64 {
    let ep_count = text.chars().filter(|&c| c == '!').count().min(4);
    ep_count as f64 * EXCL_INCR
}

fn amplify_question(text: &str) -> f64 {
    match text.chars().filter(|&c| c == '?').count() {
        0 => 0.0,
        qm_count @ 1..=3 => qm_count as f64 * QUES_INCR_SMALL,
        _ => QUES_INCR_LARGE,
    }
}
