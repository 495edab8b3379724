//! Text normalization and locale-aware string ordering

use std::cmp::Reverse;

/// Trims surrounding whitespace and lowercases, for case/whitespace-insensitive matching.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Sort key approximating a root-locale collation.
///
/// Levels, compared in order:
/// 1. letters with case and common Latin diacritics folded away
/// 2. lowercase text, so unaccented letters sort before accented ones
/// 3. original text reversed, so lowercase sorts before uppercase
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Reverse<String>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let secondary = text.to_lowercase();
        let mut primary = String::with_capacity(secondary.len());
        for c in secondary.chars() {
            push_folded(&mut primary, c);
        }

        Self {
            primary,
            secondary,
            tertiary: Reverse(text.to_string()),
        }
    }
}

fn push_folded(out: &mut String, c: char) {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ł' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ř' => "r",
        'ś' | 'š' | 'ş' | 'ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => {
            out.push(c);
            return;
        }
    };
    out.push_str(folded);
}
