// crates/locdb-core/src/text.rs
use crate::model::LocationRecord;

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Zürich` -> `Zurich`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use locdb_core::text::fold_key;
///
/// assert_eq!(fold_key("São Paulo"), "sao paulo");
/// assert_eq!(fold_key("SYD"), "syd");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
///
/// ```rust
/// use locdb_core::text::equals_folded;
///
/// assert!(equals_folded("Zürich", "ZURICH"));
/// assert!(!equals_folded("Paris", "Perth"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// A query after trimming, folding and tokenizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// The whole folded query with inner whitespace collapsed, used for the
    /// code/city/country/alias signals.
    pub text: String,
    /// Whitespace tokens of `text`, used for name matching.
    pub tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Normalize raw user input.
///
/// Returns `None` when the trimmed, lowercased query is shorter than
/// `min_len` characters; callers treat that as "no search attempted", not as
/// an error. The length is taken before transliteration, so `"ß"` or `"東"`
/// count as one character even though they fold to `"ss"` and `"dong"`.
///
/// ```rust
/// use locdb_core::text::normalize_query;
///
/// let q = normalize_query("  New York ", 2).unwrap();
/// assert_eq!(q.text, "new york");
/// assert_eq!(q.tokens, vec!["new", "york"]);
///
/// assert!(normalize_query(" a ", 2).is_none());
/// assert!(normalize_query("ß", 2).is_none());
/// ```
pub fn normalize_query(raw: &str, min_len: usize) -> Option<NormalizedQuery> {
    if fold_case(raw).chars().count() < min_len {
        return None;
    }
    let tokens: Vec<String> = fold_key(raw)
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        return None;
    }
    let text = tokens.join(" ");
    Some(NormalizedQuery { text, tokens })
}

/// Fold and collapse runs of whitespace into single spaces.
pub fn fold_words(s: &str) -> String {
    fold_key(s).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase and collapse whitespace, leaving accents alone.
///
/// Used for exact lookups (code, country), which ignore case only.
///
/// ```rust
/// use locdb_core::text::fold_case;
///
/// assert_eq!(fold_case("  United   KINGDOM "), "united kingdom");
/// assert_ne!(fold_case("Türkiye"), fold_case("Turkiye"));
/// ```
pub fn fold_case(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Folded match keys for one record, computed once at construction.
#[derive(Clone, Debug, Default)]
pub struct SearchKeys {
    pub code: String,
    pub name_tokens: Vec<String>,
    pub city: String,
    pub country: String,
    pub aliases: Vec<String>,
}

impl SearchKeys {
    pub fn from_record(record: &LocationRecord) -> Self {
        Self {
            code: fold_words(&record.code),
            name_tokens: fold_key(&record.name)
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            city: fold_words(&record.city),
            country: fold_words(&record.country),
            aliases: record.search_aliases.iter().map(|a| fold_words(a)).collect(),
        }
    }
}
