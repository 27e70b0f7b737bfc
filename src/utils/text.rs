//! Text normalization for locale-insensitive matching.
//!
//! City names, feed entries and road segments are compared after accent
//! folding, so "Medellín", "MEDELLIN" and "medellin" all collapse to the
//! same key.

/// Lowercases and strips diacritics from the Latin characters that show up
/// in Colombian place names and Spanish-language news text.
pub fn fold(input: &str) -> String {
    input
        .chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Uppercases the first letter of every alphabetic run, lowercases the rest.
/// Matches how the municipality table keys its rows ("santa marta" ->
/// "Santa Marta", "BOGOTÁ" -> "Bogotá").
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
