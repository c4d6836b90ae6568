//! Errores del analizador

use std::path::PathBuf;

/// Resultado con el error del crate
pub type Result<T> = std::result::Result<T, VaderError>;

/// Errores de construcción del analizador
///
/// Todos son fatales: el análisis en sí nunca falla.
#[derive(Debug, thiserror::Error)]
pub enum VaderError {
    #[error("No se encontró el léxico en '{}'", path.display())]
    LexiconNotFound { path: PathBuf },

    #[error("Error leyendo '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error en '{source_name}', línea {line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("Idioma no soportado: {0}")]
    UnsupportedLanguage(String),

    #[error("No se encontró el paquete de idioma en '{}'", path.display())]
    LanguagePackNotFound { path: PathBuf },

    #[error("Paquete de idioma inválido '{name}': {source}")]
    LanguagePack {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Modismo '{phrase}' con valencia no finita en '{name}': {value}")]
    InvalidIdiom {
        name: String,
        phrase: String,
        value: f64,
    },
}

impl VaderError {
    pub(crate) fn parse(source_name: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.to_string(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
