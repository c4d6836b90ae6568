//! Soporte para múltiples idiomas
//!
//! Define el trait común para las listas de palabras que usan las heurísticas.

pub mod english;
pub mod pack;

pub use english::English;
pub use pack::LanguagePack;

/// Trait que define las listas de palabras de un idioma
///
/// Todas las búsquedas reciben texto ya en minúsculas.
pub trait Language: Send + Sync {
    /// Código del idioma (ej: "en")
    fn code(&self) -> &str;

    /// Nombre del idioma
    fn name(&self) -> &str;

    /// ¿Es esta palabra una negación?
    fn is_negation(&self, word: &str) -> bool;

    /// Ajuste de un intensificador o atenuador (una o dos palabras)
    fn booster(&self, phrase: &str) -> Option<f64>;

    /// Valencia fija de un modismo
    fn special_case(&self, phrase: &str) -> Option<f64>;
}

/// Crea una instancia del idioma especificado
pub fn get_language(code: &str) -> Option<Box<dyn Language>> {
    match code {
        "en" | "english" | "en-gb" | "en-us" => Some(Box::new(English::new())),
        _ => None,
    }
}
