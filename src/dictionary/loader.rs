//! Cargador de léxicos desde archivos

use std::fs;
use std::path::Path;

use log::{debug, warn};

use super::lexicon::{EmojiLexicon, Lexicon};
use crate::error::{Result, VaderError};

pub struct LexiconLoader;

impl LexiconLoader {
    /// Carga el léxico de sentimiento desde un archivo
    ///
    /// Formato esperado: palabra<TAB>valencia[<TAB>campos extra ignorados]
    /// Ejemplo: good	1.9	0.9434	[2, 1, 2, 3, 2, 1, 2, 3, 2, 1]
    pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
        let path = path.as_ref();
        let content = read_resource(path)?;
        let lexicon = Self::parse_lexicon(&path.display().to_string(), &content)?;
        debug!("Léxico '{}': {} entradas", path.display(), lexicon.len());
        Ok(lexicon)
    }

    /// Interpreta el contenido de un léxico ya leído
    pub fn parse_lexicon(source_name: &str, content: &str) -> Result<Lexicon> {
        let mut lexicon = Lexicon::new();
        Self::parse_into(&mut lexicon, source_name, content)?;
        Ok(lexicon)
    }

    /// Añade las entradas de un léxico personalizado a uno existente
    ///
    /// Las entradas del archivo reemplazan a las ya presentes.
    pub fn append_from_file<P: AsRef<Path>>(lexicon: &mut Lexicon, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = read_resource(path)?;
        let mut custom = Lexicon::new();
        let count = Self::parse_into(&mut custom, &path.display().to_string(), &content)?;

        for (word, valence) in custom.iter() {
            lexicon.insert(word, valence);
        }

        debug!("Léxico personalizado '{}': {} entradas", path.display(), count);
        Ok(count)
    }

    /// Carga el léxico de emojis desde un archivo
    ///
    /// Formato esperado: emoji<TAB>descripción
    pub fn load_emoji_lexicon<P: AsRef<Path>>(path: P) -> Result<EmojiLexicon> {
        let path = path.as_ref();
        let content = read_resource(path)?;
        let emojis = Self::parse_emoji_lexicon(&path.display().to_string(), &content)?;
        debug!("Léxico de emojis '{}': {} entradas", path.display(), emojis.len());
        Ok(emojis)
    }

    pub fn parse_emoji_lexicon(source_name: &str, content: &str) -> Result<EmojiLexicon> {
        let mut emojis = EmojiLexicon::new();

        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let (glyph, phrase) = line
                .split_once('\t')
                .ok_or_else(|| VaderError::parse(source_name, line_num, "falta el separador TAB"))?;

            let glyph = glyph.trim();
            let phrase = phrase.trim();
            if glyph.is_empty() || phrase.is_empty() {
                return Err(VaderError::parse(source_name, line_num, "emoji o descripción vacíos"));
            }

            emojis.insert(glyph, phrase);
        }

        Ok(emojis)
    }

    /// Devuelve el número de líneas con entrada leídas
    fn parse_into(lexicon: &mut Lexicon, source_name: &str, content: &str) -> Result<usize> {
        let mut count = 0;

        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;
            let line = line.trim();

            // Ignorar líneas vacías
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or("").trim();
            if word.is_empty() {
                return Err(VaderError::parse(source_name, line_num, "palabra vacía"));
            }

            let raw_value = fields
                .next()
                .map(str::trim)
                .ok_or_else(|| VaderError::parse(source_name, line_num, "falta la valencia"))?;

            let valence = raw_value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    VaderError::parse(source_name, line_num, format!("valencia inválida '{}'", raw_value))
                })?;

            if lexicon.insert(word, valence).is_some() {
                warn!("'{}' duplicada en '{}' (línea {})", word, source_name, line_num);
            }
            count += 1;
        }

        Ok(count)
    }
}

fn read_resource(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(VaderError::LexiconNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| VaderError::io(path, e))
}
