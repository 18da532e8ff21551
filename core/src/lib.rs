//! In-memory inverted index with TF-IDF term scoring.
//!
//! Documents are tokenized (lower-cased, punctuation split, stemmed) into
//! terms, each term keeps the identifiers of the documents it occurred in,
//! one entry per occurrence, and [`InvertedIndex::score`] derives a TF-IDF
//! weight for a `(term, document)` pair from those posting lists.

pub mod corpus;
pub mod error;
pub mod index;
pub mod score;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub use error::{Error, Result};
pub use index::{InvertedIndex, Postings};
pub use score::ScoreBreakdown;
pub use tokenizer::{tokenize, NoStemmer, SnowballStemmer, Stemmer, Tokenizer};

pub type DocId = i64;
pub type Term = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub content: String,
}

impl Document {
    pub fn new(id: DocId, content: impl Into<String>) -> Self {
        Self { id, content: content.into() }
    }
}
