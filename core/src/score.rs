//! TF-IDF relevance of a single term in a single document.
//!
//! `tf` is the term's occurrence count in the document divided by the number
//! of posting entries the document has across every term; `idf` is
//! `ln(N / df)` with `N` the number of distinct document ids in the index and
//! `df` the number of distinct ids in the term's posting list. No smoothing.
//! Corpus aggregates are recomputed on every call.

use crate::index::Postings;
use crate::tokenizer::lowercase;
use crate::DocId;
use serde::Serialize;
use std::collections::HashSet;

/// The counts a TF-IDF value was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Occurrences of the term in the document.
    pub term_count: usize,
    /// Posting entries of the document across all terms.
    pub doc_length: usize,
    /// Distinct documents in the index.
    pub corpus_size: usize,
    /// Distinct documents containing the term.
    pub term_doc_freq: usize,
}

impl ScoreBreakdown {
    pub fn tf(&self) -> f64 { self.term_count as f64 / self.doc_length as f64 }

    pub fn idf(&self) -> f64 { (self.corpus_size as f64 / self.term_doc_freq as f64).ln() }

    pub fn value(&self) -> f64 { self.tf() * self.idf() }
}

/// Breakdown for `term` in `doc`, or `None` when the index is empty, the
/// term is not indexed, or the document does not contain it.
pub fn explain(postings: &Postings, term: &str, doc: DocId) -> Option<ScoreBreakdown> {
    if postings.is_empty() {
        return None;
    }
    let list = postings.get(&lowercase(term))?;

    let term_count = list.iter().filter(|&&id| id == doc).count();
    if term_count == 0 {
        return None;
    }

    let mut corpus: HashSet<DocId> = HashSet::new();
    let mut doc_length = 0usize;
    for ids in postings.values() {
        for &id in ids {
            corpus.insert(id);
            if id == doc {
                doc_length += 1;
            }
        }
    }
    if doc_length == 0 {
        return None;
    }

    let term_doc_freq = list.iter().collect::<HashSet<_>>().len();

    Some(ScoreBreakdown { term_count, doc_length, corpus_size: corpus.len(), term_doc_freq })
}

pub fn tf_idf(postings: &Postings, term: &str, doc: DocId) -> f64 {
    explain(postings, term, doc).map(|b| b.value()).unwrap_or(0.0)
}
