use std::collections::BTreeSet;
use std::fs::File;
use std::io::{stdin, stdout, BufReader, Write};
use std::process::exit;

use crossterm::style::Stylize;
use qa_core::{vocabulary, CorpusEntry, QaEngine, SubmitResult, SuggestOutcome};

const DEFAULT_CORPUS_PATH: &str = "corpus.json";

fn main() {
    env_logger::init();

    let corpus_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CORPUS_PATH.to_string());

    let corpus = match load_corpus(&corpus_path) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("Could not load corpus from '{corpus_path}': {e}");
            exit(1);
        }
    };

    // The dictionary is the corpus vocabulary; a deployment may supply
    // its own richer word list instead.
    let dictionary: BTreeSet<String> = vocabulary(&corpus);

    let engine = match QaEngine::new(corpus, dictionary) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Could not build engine: {e}");
            exit(1);
        }
    };

    println!("Arabic QA engine ({} entries).", engine.corpus().len());
    println!("---------------------------------------------------------------");
    println!("Type to see live suggestions. End a line with a space to check");
    println!("spelling. ':ask <question>' submits, ':accept' takes the last");
    println!("correction hint, 'exit' quits.\n");

    let mut pending_hint: Option<String> = None;

    loop {
        print!("> ");
        stdout().flush().ok();

        let mut raw = String::new();
        if stdin().read_line(&mut raw).is_err() {
            break;
        }
        // Keep trailing spaces: they decide the correction path.
        let line = raw.trim_end_matches(['\n', '\r']);

        if line.trim() == "exit" {
            break;
        } else if let Some(question) = line.strip_prefix(":ask ") {
            show_answer(&engine, question);
        } else if line.trim() == ":accept" {
            match pending_hint.take() {
                Some(hint) => println!("{} {}", "Accepted:".green(), engine.accept_correction(&hint)),
                None => println!("{}", "No pending correction.".dark_grey()),
            }
        } else {
            show_live(&engine, line, &mut pending_hint);
        }
    }
}

fn load_corpus(path: &str) -> Result<Vec<CorpusEntry>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

fn show_answer(engine: &QaEngine, question: &str) {
    match engine.submit(question) {
        SubmitResult::EmptyPrompt => {
            println!("{}", "Please enter a question.".yellow());
        }
        SubmitResult::NoMatch => {
            println!("{}", "No matching question found.".red());
        }
        SubmitResult::Match {
            best_question,
            answer,
            matches,
        } => {
            println!("{} {best_question}", "Best match:".green().bold());
            println!("{} {answer}", "Answer:".green().bold());
            if matches.len() > 1 {
                println!("Other close questions:");
                for matched in matches.iter().skip(1) {
                    println!("  {:>5.3}  {}", matched.score, matched.question);
                }
            }
        }
    }
}

fn show_live(engine: &QaEngine, line: &str, pending_hint: &mut Option<String>) {
    match engine.live_suggest(line) {
        SuggestOutcome::Suggestions(list) => {
            for (i, suggestion) in list.iter().enumerate() {
                println!("  {}: {suggestion}", i + 1);
            }
        }
        SuggestOutcome::Correction(hint) => {
            println!("{}", hint.as_str().yellow());
            *pending_hint = Some(hint);
        }
        SuggestOutcome::Empty => {
            println!("{}", "No suggestions.".dark_grey());
        }
    }
}
