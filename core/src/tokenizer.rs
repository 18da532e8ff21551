use crate::{Error, Result, Term};
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::Algorithm;
use std::borrow::Cow;
use std::fmt;

lazy_static! {
    // Anything that is neither an ASCII word character nor ASCII whitespace.
    static ref NON_WORD: Regex = Regex::new(r"[^0-9A-Za-z_\t\n\x0C\r ]").expect("valid regex");
    static ref ENGLISH: Tokenizer = Tokenizer::default();
}

/// Reduces a lower-cased token to its root form.
///
/// A stemmer may fail on a token it cannot handle; callers treat that as
/// "leave the token alone" rather than as a hard error.
pub trait Stemmer {
    fn stem<'a>(&self, token: &'a str) -> Result<Cow<'a, str>>;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> Result<String>,
{
    fn stem<'a>(&self, token: &'a str) -> Result<Cow<'a, str>> {
        self(token).map(Cow::Owned)
    }
}

/// Identity stemmer, for indexing raw lower-cased words.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStemmer;

impl Stemmer for NoStemmer {
    fn stem<'a>(&self, token: &'a str) -> Result<Cow<'a, str>> {
        Ok(Cow::Borrowed(token))
    }
}

/// Snowball stemmer backed by `rust-stemmers`.
pub struct SnowballStemmer {
    language: &'static str,
    inner: rust_stemmers::Stemmer,
}

const LANGUAGES: &[(&str, Algorithm)] = &[
    ("arabic", Algorithm::Arabic),
    ("danish", Algorithm::Danish),
    ("dutch", Algorithm::Dutch),
    ("english", Algorithm::English),
    ("finnish", Algorithm::Finnish),
    ("french", Algorithm::French),
    ("german", Algorithm::German),
    ("greek", Algorithm::Greek),
    ("hungarian", Algorithm::Hungarian),
    ("italian", Algorithm::Italian),
    ("norwegian", Algorithm::Norwegian),
    ("portuguese", Algorithm::Portuguese),
    ("romanian", Algorithm::Romanian),
    ("russian", Algorithm::Russian),
    ("spanish", Algorithm::Spanish),
    ("swedish", Algorithm::Swedish),
    ("tamil", Algorithm::Tamil),
    ("turkish", Algorithm::Turkish),
];

impl SnowballStemmer {
    pub fn english() -> Self {
        Self { language: "english", inner: rust_stemmers::Stemmer::create(Algorithm::English) }
    }

    /// Look up a stemmer by its lower-case Snowball language name.
    pub fn for_language(name: &str) -> Result<Self> {
        let wanted = name.trim().to_lowercase();
        LANGUAGES
            .iter()
            .find(|(lang, _)| *lang == wanted)
            .map(|&(language, algorithm)| Self { language, inner: rust_stemmers::Stemmer::create(algorithm) })
            .ok_or_else(|| Error::UnsupportedLanguage(name.to_string()))
    }

    pub fn language(&self) -> &'static str { self.language }

    pub fn languages() -> impl Iterator<Item = &'static str> {
        LANGUAGES.iter().map(|(lang, _)| *lang)
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self { Self::english() }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer").field("language", &self.language).finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem<'a>(&self, token: &'a str) -> Result<Cow<'a, str>> {
        Ok(self.inner.stem(token))
    }
}

/// Turns raw text into the terms stored in the index.
#[derive(Debug, Default)]
pub struct Tokenizer<S = SnowballStemmer> {
    stemmer: S,
}

impl<S: Stemmer> Tokenizer<S> {
    pub fn new(stemmer: S) -> Self { Self { stemmer } }

    /// Lowercase, split on anything that is not a word character, stem each
    /// token. One term per token, in input order, duplicates kept.
    pub fn tokenize(&self, text: &str) -> Vec<Term> {
        let lowered = lowercase(text);
        let spaced = NON_WORD.replace_all(&lowered, " ");
        spaced
            .split_whitespace()
            .map(|token| match self.stemmer.stem(token) {
                Ok(stem) => stem.into_owned(),
                Err(err) => {
                    tracing::debug!(token, error = %err, "stemming failed, keeping raw token");
                    token.to_string()
                }
            })
            .collect()
    }
}

/// Simple one-to-one case folding: each char maps to exactly one char, so
/// `'İ'` becomes `'i'` rather than `"i\u{307}"`.
pub fn lowercase(text: &str) -> String {
    text.chars().map(|c| c.to_lowercase().next().unwrap_or(c)).collect()
}

/// Tokenize with the default English Snowball stemmer.
pub fn tokenize(text: &str) -> Vec<Term> {
    ENGLISH.tokenize(text)
}
