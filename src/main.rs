use std::{
    io::{self, BufRead},
    path::PathBuf,
    time::Instant,
};

use anyhow::Context;
use clap::Parser;
use ir_search::{
    constants::{DEFAULT_CORPUS_PATH, DEFAULT_TEXT_FIELD, DEFAULT_TOP_K, MAX_TOP_K, MIN_TOP_K},
    inverted_index::DocId,
    Corpus, SearchEngine,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the corpus: a JSON file or a directory of JSON files
    #[arg(long, default_value = DEFAULT_CORPUS_PATH)]
    corpus: PathBuf,

    /// Record field holding the document text
    #[arg(long, default_value = DEFAULT_TEXT_FIELD)]
    text_field: String,

    /// Number of documents to list
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K, value_parser = parse_top_k)]
    top_k: usize,

    /// Print the full text of one document (1-based) and exit
    #[arg(long)]
    show: Option<DocId>,

    /// Print results as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Search query. Queries are read from stdin when omitted
    query: Vec<String>,
}

fn parse_top_k(value: &str) -> Result<usize, String> {
    let top_k: usize = value.parse().map_err(|e| format!("{e}"))?;

    if (MIN_TOP_K..=MAX_TOP_K).contains(&top_k) {
        Ok(top_k)
    } else {
        Err(format!("must be between {MIN_TOP_K} and {MAX_TOP_K}"))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let corpus = Corpus::from_path(&args.corpus, &args.text_field)
        .with_context(|| format!("Failed to load corpus from {}", args.corpus.display()))?;

    if let Some(doc_id) = args.show {
        println!("{}", corpus.document(doc_id)?);
        return Ok(());
    }

    let engine = SearchEngine::new(corpus.texts())?;

    if !args.query.is_empty() {
        return print_results(&engine, &args.query.join(" "), &args);
    }

    println!("Enter Search Query:");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let query = line.trim();

        if query == "exit" {
            break;
        }

        println!("Results for '{query}':");
        let start = Instant::now();
        print_results(&engine, query, &args)?;
        println!("Time taken: {:?}", start.elapsed());
    }

    Ok(())
}

fn print_results(engine: &SearchEngine, query: &str, args: &Args) -> anyhow::Result<()> {
    let results = engine.search(query, args.top_k)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{result}");
        }
    }

    Ok(())
}
