mod input;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;
use termdex_core::corpus::sample_documents;
use termdex_core::{DocId, InvertedIndex, NoStemmer, SnowballStemmer, Stemmer};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "termdex")]
#[command(about = "Build an in-memory inverted index and score terms with TF-IDF", long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Input path (JSON, JSONL or a directory of them); the built-in sample corpus when omitted
    #[arg(long, global = true)]
    input: Option<PathBuf>,
    /// Snowball stemmer language
    #[arg(
        long,
        global = true,
        default_value = "english",
        ignore_case = true,
        value_parser = PossibleValuesParser::new(SnowballStemmer::languages())
    )]
    language: String,
    /// Index lower-cased words without stemming
    #[arg(long, global = true, default_value_t = false)]
    no_stem: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every indexed term with its posting list
    Index {
        /// Emit the index as a JSON object
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the posting list of each term
    Search {
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Print the TF-IDF weight of a term in a document
    Score {
        #[arg(long)]
        term: String,
        #[arg(long, allow_negative_numbers = true)]
        doc: DocId,
        /// Also print the counts the score was derived from
        #[arg(long, default_value_t = false)]
        explain: bool,
    },
    /// Index the sample corpus and run the canned searches and scores
    Demo,
}

enum StemmerChoice {
    Snowball(SnowballStemmer),
    Off(NoStemmer),
}

impl Stemmer for StemmerChoice {
    fn stem<'a>(&self, token: &'a str) -> termdex_core::Result<Cow<'a, str>> {
        match self {
            StemmerChoice::Snowball(s) => s.stem(token),
            StemmerChoice::Off(s) => s.stem(token),
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let stemmer = if cli.source.no_stem {
        StemmerChoice::Off(NoStemmer)
    } else {
        StemmerChoice::Snowball(SnowballStemmer::for_language(&cli.source.language)?)
    };
    let docs = match (&cli.command, &cli.source.input) {
        (Commands::Demo, _) | (_, None) => sample_documents(),
        (_, Some(path)) => input::load_documents(path)?,
    };

    let mut index = InvertedIndex::with_stemmer(stemmer);
    index.build(&docs);
    tracing::info!(num_docs = docs.len(), num_terms = index.len(), "index ready");

    match cli.command {
        Commands::Index { json } => print_index(&index, json)?,
        Commands::Search { terms } => {
            for term in terms {
                println!("{term}: {:?}", index.search(&term));
            }
        }
        Commands::Score { term, doc, explain } => {
            println!("TF-IDF for '{term}' in Document {doc}: {:.4}", index.score(&term, doc));
            if explain {
                match index.explain(&term, doc) {
                    Some(b) => println!(
                        "  term_count={} doc_length={} corpus_size={} term_doc_freq={} tf={:.4} idf={:.4}",
                        b.term_count, b.doc_length, b.corpus_size, b.term_doc_freq, b.tf(), b.idf()
                    ),
                    None => println!("  term does not occur in this document"),
                }
            }
        }
        Commands::Demo => run_demo(&index)?,
    }
    Ok(())
}

fn print_index<S>(index: &InvertedIndex<S>, json: bool) -> Result<()> {
    let sorted: BTreeMap<&str, &Vec<DocId>> = index.postings().iter().map(|(t, ids)| (t.as_str(), ids)).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&sorted)?);
    } else {
        for (term, ids) in sorted {
            println!("{term}: {ids:?}");
        }
    }
    Ok(())
}

fn run_demo<S: Stemmer>(index: &InvertedIndex<S>) -> Result<()> {
    println!("Inverted Index:");
    print_index(index, false)?;

    println!();
    for term in ["the", "fox", "dog"] {
        println!("Search results for '{term}': {:?}", index.search(term));
    }

    println!();
    let probes: [(&str, DocId); 4] = [("fox", 1), ("lazy", 2), ("quick", 3), ("wild", 5)];
    for (term, doc) in probes {
        println!("TF-IDF for '{term}' in Document {doc}: {:.4}", index.score(term, doc));
    }
    Ok(())
}
