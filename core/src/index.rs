use crate::score::{self, ScoreBreakdown};
use crate::tokenizer::{lowercase, SnowballStemmer, Stemmer, Tokenizer};
use crate::{DocId, Document, Term};
use std::collections::HashMap;

/// term -> ids of the documents it occurred in, one entry per occurrence,
/// in the order the documents were indexed.
pub type Postings = HashMap<Term, Vec<DocId>>;

#[derive(Debug, Default)]
pub struct InvertedIndex<S = SnowballStemmer> {
    tokenizer: Tokenizer<S>,
    postings: Postings,
}

impl InvertedIndex {
    /// Empty index using the English Snowball stemmer.
    pub fn new() -> Self { Self::default() }
}

impl<S: Stemmer> InvertedIndex<S> {
    pub fn with_tokenizer(tokenizer: Tokenizer<S>) -> Self {
        Self { tokenizer, postings: Postings::new() }
    }

    pub fn with_stemmer(stemmer: S) -> Self {
        Self::with_tokenizer(Tokenizer::new(stemmer))
    }

    pub fn tokenizer(&self) -> &Tokenizer<S> { &self.tokenizer }

    /// Index `documents` in order, replacing whatever was indexed before.
    pub fn build(&mut self, documents: &[Document]) -> &Postings {
        let mut postings = Postings::new();
        for doc in documents {
            for term in self.tokenizer.tokenize(&doc.content) {
                postings.entry(term).or_default().push(doc.id);
            }
        }
        tracing::debug!(num_docs = documents.len(), num_terms = postings.len(), "built inverted index");
        self.postings = postings;
        &self.postings
    }

    /// Posting list for `term`, matched after lower-casing only.
    pub fn search(&self, term: &str) -> &[DocId] {
        self.postings
            .get(&lowercase(term))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// TF-IDF weight of `term` in document `doc`; 0 when not applicable.
    pub fn score(&self, term: &str, doc: DocId) -> f64 {
        score::tf_idf(&self.postings, term, doc)
    }

    pub fn explain(&self, term: &str, doc: DocId) -> Option<ScoreBreakdown> {
        score::explain(&self.postings, term, doc)
    }
}

impl<S> InvertedIndex<S> {
    pub fn postings(&self) -> &Postings { &self.postings }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    /// Number of distinct terms.
    pub fn len(&self) -> usize { self.postings.len() }

    /// Indexed terms in lexicographic order.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }
}
