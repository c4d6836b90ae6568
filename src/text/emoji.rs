//! Sustitución de emojis por su descripción textual
//!
//! Las descripciones ("beaming face with smiling eyes") contienen palabras
//! del léxico, así que los emojis puntúan como texto normal.

use std::borrow::Cow;

use crate::dictionary::EmojiLexicon;

/// Reemplaza cada emoji conocido por su descripción
///
/// En cada posición se prueba primero la clave más larga, para que las
/// secuencias (banderas, modificadores) ganen a sus glifos sueltos. Se
/// inserta un espacio antes de la descripción si el carácter anterior no lo
/// era. Sin emojis conocidos el texto se devuelve sin copiar.
pub fn replace_emojis<'a>(text: &'a str, emojis: &EmojiLexicon) -> Cow<'a, str> {
    if emojis.is_empty() {
        return Cow::Borrowed(text);
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let max_key_chars = emojis.max_key_chars();
    let mut output = String::with_capacity(text.len());
    let mut replaced = false;
    let mut prev_space = true;
    let mut pos = 0;

    while pos < chars.len() {
        let start = chars[pos].0;
        let longest = max_key_chars.min(chars.len() - pos);
        let matched = (1..=longest).rev().find_map(|n| {
            let end = chars.get(pos + n).map_or(text.len(), |&(idx, _)| idx);
            emojis.get(&text[start..end]).map(|phrase| (n, phrase))
        });

        match matched {
            Some((n, phrase)) => {
                if !prev_space {
                    output.push(' ');
                }
                output.push_str(phrase);
                prev_space = false;
                replaced = true;
                pos += n;
            }
            None => {
                let ch = chars[pos].1;
                output.push(ch);
                prev_space = ch == ' ';
                pos += 1;
            }
        }
    }

    if replaced {
        Cow::Owned(output.trim().to_string())
    } else {
        Cow::Borrowed(text)
    }
}
