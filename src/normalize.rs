//! File name normalization.
//!
//! Cyrillic letters are transliterated to Latin, then every character that is
//! not an ASCII letter, digit or period is replaced by an underscore. The
//! mover applies this to the destination name of every file it relocates.

use regex::Regex;
use std::sync::LazyLock;

/// Lowercase source letter and its Latin transliteration.
const TRANSLITERATION: [(char, &str); 37] = [
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "e"),
    ('ж', "j"),
    ('з', "z"),
    ('и', "i"),
    ('й', "j"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('є', "je"),
    ('і', "i"),
    ('ї', "ji"),
    ('ґ', "g"),
];

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9.]").expect("valid regex literal"));

fn transliterate(c: char) -> Option<String> {
    let lower = c.to_lowercase().next()?;
    let (_, latin) = TRANSLITERATION.iter().find(|(src, _)| *src == lower)?;
    if lower == c {
        Some((*latin).to_string())
    } else {
        Some(latin.to_uppercase())
    }
}

/// Maps an arbitrary file name to one made of `[A-Za-z0-9.]` only.
///
/// Uppercase Cyrillic letters produce uppercase Latin output.
///
/// # Examples
///
/// ```
/// use clean_folder::normalize::normalize;
///
/// assert_eq!(normalize("Привіт світ.txt"), "Privit_svit.txt");
/// assert_eq!(normalize("Цех №5.pdf"), "TSeh__5.pdf");
/// ```
pub fn normalize(name: &str) -> String {
    let mut transliterated = String::with_capacity(name.len());
    for c in name.chars() {
        match transliterate(c) {
            Some(latin) => transliterated.push_str(&latin),
            None => transliterated.push(c),
        }
    }
    UNSAFE_CHARS
        .replace_all(&transliterated, "_")
        .into_owned()
}
