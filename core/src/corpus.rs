use crate::Document;

/// The five-document corpus used by `termdex demo` and the regression tests.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(1, "The quick brown fox jumps over the lazy dog."),
        Document::new(2, "The lazy dog is sleeping."),
        Document::new(3, "The fox is quick and clever."),
        Document::new(4, "Dogs are loyal animals."),
        Document::new(5, "Foxes are wild animals."),
    ]
}
