//! Motor principal de análisis de sentimiento

use std::fmt;
use std::path::Path;

use log::{debug, trace, warn};

use crate::config::Config;
use crate::dictionary::{EmojiLexicon, Lexicon, LexiconLoader};
use crate::error::{Result, VaderError};
use crate::heuristics::{self, N_SCALAR, NORMALIZE_ALPHA};
use crate::languages::{get_language, English, Language, LanguagePack};
use crate::scores::{round_to, SentimentScores};
use crate::text::{replace_emojis, SentiText, Token};

/// Factores de decaimiento de un intensificador a 1, 2 y 3 posiciones
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Factor de "never so/this" delante de una palabra con carga
const NEVER_SO_SCALAR: f64 = 1.25;

/// Peso de lo anterior y lo posterior a "but"
const BUT_BEFORE: f64 = 0.5;
const BUT_AFTER: f64 = 1.5;

/// Analizador de sentimiento VADER
///
/// Los léxicos son inmutables tras la construcción: una misma instancia puede
/// compartirse entre hilos y analizar textos en paralelo.
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
    emojis: EmojiLexicon,
    language: Box<dyn Language>,
}

impl fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("language", &self.language.code())
            .field("lexicon", &self.lexicon.len())
            .field("emojis", &self.emojis.len())
            .finish()
    }
}

/// Sumas de valencias positivas y negativas y recuento de neutras
#[derive(Debug, Default)]
struct SiftSentiments {
    pos_sum: f64,
    neg_sum: f64,
    neu_count: usize,
}

impl SentimentAnalyzer {
    /// Crea un analizador con las listas de palabras del inglés
    pub fn new(lexicon: Lexicon, emojis: EmojiLexicon) -> Self {
        Self::with_language(lexicon, emojis, Box::new(English::new()))
    }

    pub fn with_language(
        lexicon: Lexicon,
        emojis: EmojiLexicon,
        language: Box<dyn Language>,
    ) -> Self {
        Self {
            lexicon,
            emojis,
            language,
        }
    }

    /// Carga ambos léxicos desde archivos; cualquier fallo es fatal
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        lexicon_path: P,
        emoji_path: Q,
    ) -> Result<Self> {
        let lexicon = LexiconLoader::load_lexicon(lexicon_path)?;
        let emojis = LexiconLoader::load_emoji_lexicon(emoji_path)?;
        Ok(Self::new(lexicon, emojis))
    }

    /// Crea el analizador a partir de la configuración
    pub fn from_config(config: &Config) -> Result<Self> {
        // Obtener listas de palabras del idioma
        let language: Box<dyn Language> = match config.language_pack {
            Some(ref pack) => Box::new(LanguagePack::load_from_file(pack)?),
            None => get_language(&config.language)
                .ok_or_else(|| VaderError::UnsupportedLanguage(config.language.clone()))?,
        };

        // Cargar léxico principal
        let mut lexicon = LexiconLoader::load_lexicon(config.lexicon_path())?;

        // Cargar léxico custom del usuario
        let user_custom = config.user_custom_lexicon_path();
        if user_custom.exists() {
            LexiconLoader::append_from_file(&mut lexicon, &user_custom)?;
        }

        // Cargar léxico adicional si se especificó
        if let Some(ref custom) = config.custom_lexicon {
            LexiconLoader::append_from_file(&mut lexicon, custom)?;
        }

        // Léxico de emojis: solo es obligatorio si se indicó explícitamente
        let emoji_path = config.emoji_lexicon_path();
        let emojis = if config.emoji_lexicon.is_some() || emoji_path.exists() {
            LexiconLoader::load_emoji_lexicon(&emoji_path)?
        } else {
            warn!(
                "No se encontró léxico de emojis en '{}'. Los emojis no puntuarán.",
                emoji_path.display()
            );
            EmojiLexicon::new()
        };

        debug!(
            "Analizador '{}' listo: {} palabras, {} emojis",
            language.code(),
            lexicon.len(),
            emojis.len()
        );

        Ok(Self::with_language(lexicon, emojis, language))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    /// Devuelve las proporciones negativa, neutra y positiva y el compuesto
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let text = replace_emojis(text, &self.emojis);
        let senti_text = SentiText::new(&text);
        let tokens = senti_text.tokens();

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            // Los intensificadores no tienen valencia propia; "kind of" es un atenuador
            let kind_of =
                token.lower == "kind" && tokens.get(i + 1).is_some_and(|next| next.lower == "of");
            if kind_of || self.language.booster(&token.lower).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&senti_text, i));
        }

        let sentiments = but_check(tokens, sentiments);
        trace!("Valencias de '{}': {:?}", text, sentiments);

        score_valence(&sentiments, &text)
    }

    fn sentiment_valence(&self, senti_text: &SentiText, i: usize) -> f64 {
        let tokens = senti_text.tokens();
        let token = &tokens[i];
        let Some(base) = self.lexicon.get(&token.lower) else {
            return 0.0;
        };
        let is_cap_diff = senti_text.is_cap_differential();
        let lower = |k: usize| tokens[k].lower.as_str();

        let mut valence = base;

        // "no" delante de otra palabra del léxico niega en lugar de puntuar
        if token.lower == "no"
            && tokens
                .get(i + 1)
                .is_some_and(|next| self.lexicon.contains(&next.lower))
        {
            valence = 0.0;
        }

        if (i > 0 && lower(i - 1) == "no")
            || (i > 1 && lower(i - 2) == "no")
            || (i > 2 && lower(i - 3) == "no" && matches!(lower(i - 1), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_cap_diff && token.is_upper() {
            if valence > 0.0 {
                valence += heuristics::C_INCR;
            } else {
                valence -= heuristics::C_INCR;
            }
        }

        for start_i in 0..3 {
            // Las palabras del léxico no modifican a sus vecinas
            if i > start_i && !self.lexicon.contains(lower(i - (start_i + 1))) {
                let preceding = &tokens[i - (start_i + 1)];
                let scalar =
                    heuristics::scalar_inc_dec(self.language.as_ref(), preceding, valence, is_cap_diff);
                valence += scalar * BOOSTER_DECAY[start_i];

                valence = self.negation_check(valence, tokens, start_i, i);

                if start_i == 2 {
                    valence = self.special_idioms_check(valence, tokens, i);
                }
            }
        }

        self.least_check(valence, tokens, i)
    }

    fn negation_check(&self, valence: f64, tokens: &[Token], start_i: usize, i: usize) -> f64 {
        let lower = |k: usize| tokens[k].lower.as_str();
        let is_so_or_this = |k: usize| matches!(lower(k), "so" | "this");
        let negated_at = |k: usize| {
            heuristics::negated(self.language.as_ref(), std::slice::from_ref(&tokens[k]), true)
        };

        match start_i {
            0 if negated_at(i - 1) => valence * N_SCALAR,
            1 if lower(i - 2) == "never" && is_so_or_this(i - 1) => valence * NEVER_SO_SCALAR,
            1 if negated_at(i - 2) => valence * N_SCALAR,
            2 if lower(i - 3) == "never" && (is_so_or_this(i - 2) || is_so_or_this(i - 1)) => {
                valence * NEVER_SO_SCALAR
            }
            2 if negated_at(i - 3) => valence * N_SCALAR,
            _ => valence,
        }
    }

    /// Modismos de dos o tres palabras y atenuadores de dos palabras
    ///
    /// Solo se llama con i >= 3.
    fn special_idioms_check(&self, mut valence: f64, tokens: &[Token], i: usize) -> f64 {
        let lower = |k: usize| tokens[k].lower.as_str();

        let one_zero = format!("{} {}", lower(i - 1), lower(i));
        let two_one_zero = format!("{} {} {}", lower(i - 2), lower(i - 1), lower(i));
        let two_one = format!("{} {}", lower(i - 2), lower(i - 1));
        let three_two_one = format!("{} {} {}", lower(i - 3), lower(i - 2), lower(i - 1));
        let three_two = format!("{} {}", lower(i - 3), lower(i - 2));

        let sequences = [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two];
        if let Some(special) = sequences.iter().find_map(|seq| self.language.special_case(seq)) {
            valence = special;
        }

        if tokens.len() > i + 1 {
            let zero_one = format!("{} {}", lower(i), lower(i + 1));
            if let Some(special) = self.language.special_case(&zero_one) {
                valence = special;
            }
        }

        if tokens.len() > i + 2 {
            let zero_one_two = format!("{} {} {}", lower(i), lower(i + 1), lower(i + 2));
            if let Some(special) = self.language.special_case(&zero_one_two) {
                valence = special;
            }
        }

        if let Some(booster) = self
            .language
            .booster(&three_two)
            .or_else(|| self.language.booster(&two_one))
        {
            valence += booster;
        }

        valence
    }

    /// "least" niega, salvo en "at least" y "very least"
    fn least_check(&self, valence: f64, tokens: &[Token], i: usize) -> f64 {
        if i == 0 || tokens[i - 1].lower != "least" || self.lexicon.contains("least") {
            return valence;
        }

        if i > 1 && matches!(tokens[i - 2].lower.as_str(), "at" | "very") {
            valence
        } else {
            valence * N_SCALAR
        }
    }
}

/// Reequilibra alrededor del primer "but": la cláusula posterior pesa más
fn but_check(tokens: &[Token], sentiments: Vec<f64>) -> Vec<f64> {
    let Some(but_index) = tokens.iter().position(|t| t.lower == "but") else {
        return sentiments;
    };

    sentiments
        .into_iter()
        .enumerate()
        .map(|(i, sentiment)| {
            if i < but_index {
                sentiment * BUT_BEFORE
            } else if i > but_index {
                sentiment * BUT_AFTER
            } else {
                sentiment
            }
        })
        .collect()
}

fn sift_sentiment_scores(sentiments: &[f64]) -> SiftSentiments {
    let mut sifted = SiftSentiments::default();

    for &sentiment in sentiments {
        if sentiment > 0.0 {
            // El 1 compensa las palabras neutras
            sifted.pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            sifted.neg_sum += sentiment - 1.0;
        } else {
            sifted.neu_count += 1;
        }
    }

    sifted
}

fn score_valence(sentiments: &[f64], text: &str) -> SentimentScores {
    if sentiments.is_empty() {
        return SentimentScores::default();
    }

    let mut sum: f64 = sentiments.iter().sum();
    let punct_amplifier = heuristics::punctuation_emphasis(text);

    if sum > 0.0 {
        sum += punct_amplifier;
    } else if sum < 0.0 {
        sum -= punct_amplifier;
    }

    let compound = heuristics::normalize(sum, NORMALIZE_ALPHA);
    let mut sifted = sift_sentiment_scores(sentiments);

    // La puntuación refuerza la polaridad dominante
    if sifted.pos_sum > sifted.neg_sum.abs() {
        sifted.pos_sum += punct_amplifier;
    } else if sifted.pos_sum < sifted.neg_sum.abs() {
        sifted.neg_sum -= punct_amplifier;
    }

    let total = sifted.pos_sum + sifted.neg_sum.abs() + sifted.neu_count as f64;

    SentimentScores {
        negative: round_to((sifted.neg_sum / total).abs(), 3),
        neutral: round_to((sifted.neu_count as f64 / total).abs(), 3),
        positive: round_to((sifted.pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}
