//! Listas de palabras del inglés (idioma por defecto)

use std::collections::{HashMap, HashSet};

use crate::heuristics::{B_DECR, B_INCR};
use crate::languages::Language;

/// Negaciones, incluidas las variantes sin apóstrofo
const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
    "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
    "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't",
    "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

/// Adverbios de grado que intensifican
const BOOSTERS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "effing", "enormous", "enormously", "entirely", "especially",
    "exceptional", "exceptionally", "extreme", "extremely", "fabulously", "flipping",
    "flippin", "frackin", "fracking", "fricking", "frickin", "frigging", "friggin", "fully",
    "fuckin", "fucking", "fuggin", "fugging", "greatly", "hella", "highly", "hugely",
    "incredible", "incredibly", "intensely", "major", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "total", "totally", "tremendous", "tremendously", "uber", "unbelievably",
    "unusually", "utter", "utterly", "very",
];

/// Atenuadores (incluye bigramas)
const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of",
    "less", "little", "marginal", "marginally", "occasional", "occasionally", "partly",
    "scarce", "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof",
    "sort-of",
];

/// Modismos cuya valencia sustituye a la calculada
const SPECIAL_CASES: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("bus stop", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.5),
];

/// Inglés, con las listas de referencia de VADER
pub struct English {
    negations: HashSet<&'static str>,
    boosters: HashMap<&'static str, f64>,
    special_cases: HashMap<&'static str, f64>,
}

impl English {
    pub fn new() -> Self {
        let boosters = BOOSTERS
            .iter()
            .map(|w| (*w, B_INCR))
            .chain(DAMPENERS.iter().map(|w| (*w, B_DECR)))
            .collect();

        Self {
            negations: NEGATIONS.iter().copied().collect(),
            boosters,
            special_cases: SPECIAL_CASES.iter().copied().collect(),
        }
    }
}

impl Default for English {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for English {
    fn code(&self) -> &str {
        "en"
    }

    fn name(&self) -> &str {
        "English"
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    fn booster(&self, phrase: &str) -> Option<f64> {
        self.boosters.get(phrase).copied()
    }

    fn special_case(&self, phrase: &str) -> Option<f64> {
        self.special_cases.get(phrase).copied()
    }
}
