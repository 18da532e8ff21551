use termdex_core::corpus::sample_documents;
use termdex_core::{Document, InvertedIndex, NoStemmer};

fn sample_index() -> InvertedIndex {
    let mut index = InvertedIndex::new();
    index.build(&sample_documents());
    index
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn sample_corpus_postings() {
    let index = sample_index();
    assert_eq!(index.search("the"), &[1, 1, 2, 3]);
    assert_eq!(index.search("fox"), &[1, 3, 5]);
    assert_eq!(index.search("dog"), &[1, 2, 4]);
    assert_eq!(index.search("anim"), &[4, 5]);
    assert_eq!(index.search("jump"), &[1]);
    assert!(index.search("lazy").is_empty());
    assert!(index.search("unicorn").is_empty());
}

#[test]
fn sample_corpus_scores() {
    let index = sample_index();
    let wild = index.score("wild", 5);
    assert!(wild > 0.0);
    assert!(close(wild, 0.25 * 5f64.ln()));
    assert!(close(index.score("fox", 1), (5f64 / 3.0).ln() / 9.0));
    assert!(close(index.score("The", 1), 2.0 * (5f64 / 3.0).ln() / 9.0));
    assert!(close(index.score("lazi", 2), 0.2 * (5f64 / 2.0).ln()));
    assert_eq!(index.score("lazy", 2), 0.0);
    assert_eq!(index.score("wild", 4), 0.0);
    assert_eq!(index.score("unicorn", 1), 0.0);
}

#[test]
fn explain_reports_counts() {
    let index = sample_index();
    let b = index.explain("quick", 3).unwrap();
    assert_eq!((b.term_count, b.doc_length, b.corpus_size, b.term_doc_freq), (1, 6, 5, 2));
    assert!(close(b.value(), index.score("quick", 3)));
    assert!(index.explain("quick", 4).is_none());
}

#[test]
fn search_matches_tokenized_content() {
    let docs = sample_documents();
    let index = sample_index();
    for term in index.terms() {
        let expected: Vec<i64> = docs
            .iter()
            .flat_map(|d| {
                let n = index.tokenizer().tokenize(&d.content).iter().filter(|t| *t == term).count();
                std::iter::repeat(d.id).take(n)
            })
            .collect();
        assert_eq!(index.search(term), expected.as_slice(), "term {term}");
    }
}

#[test]
fn scores_ignore_insertion_order() {
    let forward = sample_index();
    let mut reversed_docs = sample_documents();
    reversed_docs.reverse();
    let mut reversed = InvertedIndex::new();
    reversed.build(&reversed_docs);

    for term in forward.terms() {
        for doc in 1..=5 {
            assert!(close(forward.score(term, doc), reversed.score(term, doc)), "{term} in {doc}");
        }
    }
}

#[test]
fn rebuilding_is_idempotent() {
    let docs = sample_documents();
    let mut index = InvertedIndex::new();
    let first = index.build(&docs).clone();
    let second = index.build(&docs).clone();
    assert_eq!(first, second);
}

#[test]
fn identifiers_are_taken_as_given() {
    let mut index = InvertedIndex::with_stemmer(NoStemmer);
    index.build(&[Document::new(-4, "alpha beta"), Document::new(100, "beta"), Document::new(-4, "beta")]);
    assert_eq!(index.search("beta"), &[-4, 100, -4]);
    assert!(close(index.score("alpha", -4), (1.0 / 3.0) * 2f64.ln()));
}
