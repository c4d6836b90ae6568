//! Configuración y argumentos CLI

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Formato de salida de las puntuaciones
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Una línea legible por texto
    Text,
    /// Un objeto JSON por línea
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "vader",
    version,
    about = "Analizador de sentimiento basado en léxico y reglas",
    after_help = "EJEMPLOS:\n    vader \"VADER is smart, handsome, and funny.\"\n    vader --input opiniones.txt --format json\n    vader --lexicon vader_lexicon.txt --emoji-lexicon emoji_utf8_lexicon.txt \"not bad\""
)]
pub struct Config {
    /// Idioma de las listas de palabras (default: en)
    #[arg(short = 'l', long = "lang", default_value = "en")]
    pub language: String,
    /// Directorio de datos
    #[arg(long = "data-dir", default_value = "data")]
    pub data_dir: PathBuf,
    /// Léxico de sentimiento (default: <data-dir>/<idioma>/vader_lexicon.txt)
    #[arg(long = "lexicon")]
    pub lexicon: Option<PathBuf>,
    /// Léxico de emojis (default: <data-dir>/<idioma>/emoji_utf8_lexicon.txt)
    #[arg(long = "emoji-lexicon")]
    pub emoji_lexicon: Option<PathBuf>,
    /// Léxico personalizado adicional
    #[arg(short = 'd', long = "custom-lexicon")]
    pub custom_lexicon: Option<PathBuf>,
    /// Paquete de idioma TOML (negaciones, intensificadores, modismos)
    #[arg(short = 'p', long = "language-pack")]
    pub language_pack: Option<PathBuf>,
    /// Archivo de entrada (un texto por línea)
    #[arg(short = 'i', long = "input")]
    pub input_file: Option<PathBuf>,
    /// Archivo de salida
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,
    /// Formato de salida
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Texto a analizar (argumento posicional)
    pub text: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            data_dir: PathBuf::from("data"),
            lexicon: None,
            emoji_lexicon: None,
            custom_lexicon: None,
            language_pack: None,
            input_file: None,
            output_file: None,
            format: OutputFormat::Text,
            text: None,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, clap::Error> {
        let mut config = Self::try_parse_from(args)?;
        config.language = Self::canonicalize_language(&config.language);
        Ok(config)
    }

    fn canonicalize_language(language: &str) -> String {
        let normalized = language.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "en" | "en-gb" | "en-us" | "english" | "inglés" | "ingles" => "en".to_string(),
            _ => normalized,
        }
    }

    /// Directorio de recursos del idioma
    fn language_dir(&self) -> PathBuf {
        self.data_dir.join(&self.language)
    }

    pub fn lexicon_path(&self) -> PathBuf {
        self.lexicon
            .clone()
            .unwrap_or_else(|| self.language_dir().join("vader_lexicon.txt"))
    }

    pub fn emoji_lexicon_path(&self) -> PathBuf {
        self.emoji_lexicon
            .clone()
            .unwrap_or_else(|| self.language_dir().join("emoji_utf8_lexicon.txt"))
    }

    /// Léxico personalizado del usuario, si existe junto a los datos
    pub fn user_custom_lexicon_path(&self) -> PathBuf {
        self.language_dir().join("custom.txt")
    }
}
