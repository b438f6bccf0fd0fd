//! Locale-aware string collation for the category sort.
//!
//! The displayed list is ordered by category name, and that ordering has to
//! match user-locale expectations rather than raw byte order: case folds,
//! accents fold at the primary level, and a handful of languages get
//! tailored weights. Comparison goes through per-character sort weights, a
//! small subset of the Unicode Collation Algorithm.

use std::cmp::Ordering;

/// Locale-aware string comparator
///
/// The default collator is untailored: case-insensitive and
/// accent-insensitive at the primary level. [`Collator::for_language`]
/// selects per-language tailoring (German umlaut expansion, Swedish and
/// Finnish trailing vowels, Spanish n-tilde).
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use tasklist::collate::Collator;
///
/// let collator = Collator::new();
/// assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(collator.compare("caf\u{00E9}", "CAFE"), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Collator {
    /// ISO 639-1 language tag (lowercase); `None` means no tailoring
    language: Option<String>,
}

impl Collator {
    /// Creates an untailored collator
    #[must_use]
    pub const fn new() -> Self {
        Self { language: None }
    }

    /// Creates a collator tailored for the given ISO 639-1 language tag
    ///
    /// Unknown tags behave like the untailored default.
    #[must_use]
    pub fn for_language(tag: &str) -> Self {
        Self {
            language: Some(tag.trim().to_ascii_lowercase()),
        }
    }

    /// Compare two strings under this collator's rules
    ///
    /// Strings whose sort keys coincide (for example case variants under the
    /// default locale) compare as equal; a stable sort then preserves their
    /// original relative order.
    #[must_use]
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.sort_key(left).cmp(&self.sort_key(right))
    }

    /// Generate the sort key for a string
    ///
    /// The key is a sequence of primary weights that, compared
    /// lexicographically, produce the locale-specific ordering.
    fn sort_key(&self, s: &str) -> Vec<u32> {
        let lang = self.language.as_deref().unwrap_or("");
        s.chars().flat_map(|ch| char_weights(ch, lang)).collect()
    }
}

/// Map a character to its sort weight(s) under the given language.
///
/// German: umlauts expand to base + e (ae, oe, ue) and sharp-s to ss.
/// Swedish/Finnish: a-ring, a-diaeresis, and o-diaeresis sort after z.
/// Spanish: n-tilde sorts as a distinct letter after n.
/// Default: folded base character (case- and accent-insensitive).
fn char_weights(ch: char, lang: &str) -> Vec<u32> {
    match lang {
        "de" => match ch {
            '\u{00E4}' | '\u{00C4}' => vec![u32::from('a'), u32::from('e')],
            '\u{00F6}' | '\u{00D6}' => vec![u32::from('o'), u32::from('e')],
            '\u{00FC}' | '\u{00DC}' => vec![u32::from('u'), u32::from('e')],
            '\u{00DF}' => vec![u32::from('s'), u32::from('s')],
            _ => vec![folded_weight(ch)],
        },
        "sv" | "fi" => match ch {
            '\u{00E5}' | '\u{00C5}' => vec![u32::from('z') + 1],
            '\u{00E4}' | '\u{00C4}' => vec![u32::from('z') + 2],
            '\u{00F6}' | '\u{00D6}' => vec![u32::from('z') + 3],
            _ => vec![folded_weight(ch)],
        },
        "es" => match ch {
            '\u{00F1}' | '\u{00D1}' => vec![u32::from('n') + 1],
            _ => vec![folded_weight(ch)],
        },
        _ => vec![folded_weight(ch)],
    }
}

/// Primary weight of a character: diacritics stripped, then lowercased
fn folded_weight(ch: char) -> u32 {
    let base = strip_diacritic(ch);
    u32::from(base.to_lowercase().next().unwrap_or(base))
}

/// Strip common Latin diacritical marks, returning the base character.
///
/// Covers the Latin-1 Supplement block used by European languages.
/// Characters outside it pass through unchanged.
fn strip_diacritic(ch: char) -> char {
    let (upper, lower) = match ch {
        '\u{00C0}'..='\u{00C6}' | '\u{00E0}'..='\u{00E6}' => ('A', 'a'),
        '\u{00C7}' | '\u{00E7}' => ('C', 'c'),
        '\u{00C8}'..='\u{00CB}' | '\u{00E8}'..='\u{00EB}' => ('E', 'e'),
        '\u{00CC}'..='\u{00CF}' | '\u{00EC}'..='\u{00EF}' => ('I', 'i'),
        '\u{00D1}' | '\u{00F1}' => ('N', 'n'),
        '\u{00D2}'..='\u{00D6}' | '\u{00F2}'..='\u{00F6}' | '\u{00D8}' | '\u{00F8}' => ('O', 'o'),
        '\u{00D9}'..='\u{00DC}' | '\u{00F9}'..='\u{00FC}' => ('U', 'u'),
        '\u{00DD}' | '\u{00FD}' | '\u{00FF}' => ('Y', 'y'),
        _ => return ch,
    };
    if ch.is_uppercase() { upper } else { lower }
}
