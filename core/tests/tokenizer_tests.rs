use termdex_core::tokenizer::{tokenize, NoStemmer, SnowballStemmer, Tokenizer};

#[test]
fn it_normalizes_and_stems() {
    let words = tokenize("Running Runners RUN! Foxes are wild animals.");
    assert_eq!(words, vec!["run", "runner", "run", "fox", "are", "wild", "anim"]);
}

#[test]
fn it_keeps_stopwords_and_duplicates() {
    let words = tokenize("The quick brown fox and the lazy dog");
    assert_eq!(words.iter().filter(|w| *w == "the").count(), 2);
    assert!(words.contains(&"and".to_string()));
}

#[test]
fn non_ascii_letters_are_separators() {
    let words = Tokenizer::new(NoStemmer).tokenize("Café's menu");
    assert_eq!(words, vec!["caf", "s", "menu"]);
}

#[test]
fn it_is_deterministic() {
    let text = "The lazy dog is sleeping. Dogs are loyal animals!";
    assert_eq!(tokenize(text), tokenize(text));
}

#[test]
fn other_languages_are_pluggable() {
    let german = Tokenizer::new(SnowballStemmer::for_language("german").unwrap());
    let english: Tokenizer = Tokenizer::default();
    assert_eq!(german.tokenize("Katzen"), vec!["katz"]);
    assert_eq!(english.tokenize("jumps"), vec!["jump"]);
}
