use std::io::{stdin, stdout, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vortaro::config::Config;
use vortaro::core::engine::WordPage;
use vortaro::core::translations::TranslationGroup;
use vortaro::persistence::{import_source, load_from_disk, save_to_disk};
use vortaro::{DictionaryEngine, Query, Response, SearchResult};

const USAGE: &str = "usage: vortaro [--json] | vortaro import <source.json> [snapshot.bin]";

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("import") => match args.get(1) {
            Some(source) => {
                let target = args.get(2).map(PathBuf::from).unwrap_or(config.dictionary_path);
                import(Path::new(source), &target)
            }
            None => {
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            }
        },
        None => repl(&config.dictionary_path, false),
        Some("--json") => repl(&config.dictionary_path, true),
        Some(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "vortaro failed");
            ExitCode::FAILURE
        }
    }
}

fn import(source: &Path, target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = import_source(source)?;
    save_to_disk(&store, target)?;
    println!("Imported {} headwords into '{}'", store.headword_count(), target.display());
    Ok(())
}

fn repl(dictionary: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let engine = DictionaryEngine::from_store(load_from_disk(dictionary)?);

    println!("Vortaro. Type a word to search, 'vorto <x>', 'rekte <x>' or 'exit'.");
    print!("> ");
    stdout().flush()?;

    for line in stdin().lock().lines() {
        let line = line?;
        if line.trim() == "exit" {
            break;
        }
        if let Some(query) = Query::parse(&line) {
            let mut response = engine.dispatch(&query)?;
            // Follow a direct hit to the word itself.
            if let Response::Redirect(word) = &response {
                response = engine.lookup_word(&word.word)?;
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_response(&response);
            }
        }
        print!("> ");
        stdout().flush()?;
    }
    Ok(())
}

fn print_response(response: &Response) {
    match response {
        Response::Page(page) => print_page(page),
        Response::Redirect(word) => println!("-> {}", word.word),
        Response::Results(result) => print_results(result),
    }
}

fn print_page(page: &WordPage) {
    println!("\n{}", page.word.word);
    for (i, definition) in page.definitions.iter().enumerate() {
        println!("  {}. {}", i + 1, definition.definition);
        for example in &definition.examples {
            println!("       \"{example}\"");
        }
        for remark in &definition.remarks {
            println!("       Rim. {remark}");
        }
        for (j, sub) in definition.subdefinitions.iter().enumerate() {
            println!("     {}) {}", letter(j), sub.definition);
            for example in &sub.examples {
                println!("         \"{example}\"");
            }
        }
    }
    for (i, translations) in page.translations.iter().enumerate() {
        println!("  Tradukoj {}:", i + 1);
        print_groups(&translations.definition, "    ");
        for groups in &translations.subdefinitions {
            print_groups(groups, "      ");
        }
    }
}

fn print_results(result: &SearchResult) {
    println!("\nSerĉo: {}", result.display_term);
    let words = |list: &[vortaro::core::types::Headword]| {
        list.iter().map(|w| w.word.as_str()).collect::<Vec<_>>().join(", ")
    };
    if result.exact_matches.is_empty() && result.similar_matches.is_empty() {
        println!("  Neniu vorto trovita.");
    }
    if !result.exact_matches.is_empty() {
        println!("  Trovitaj: {}", words(&result.exact_matches));
    }
    if !result.similar_matches.is_empty() {
        println!("  Similaj: {}", words(&result.similar_matches));
    }
    for parse in &result.segmentations {
        println!("  Vortfarado: {}", parse.join("-"));
    }
    print_groups(&result.translation_groups, "  ");
}

fn print_groups(groups: &[TranslationGroup], indent: &str) {
    for group in groups {
        let entries: Vec<String> = group
            .translations
            .iter()
            .map(|t| format!("{} ({})", t.translation, t.word))
            .collect();
        println!("{indent}{}: {}", group.language, entries.join("; "));
    }
}

/// Subdefinitions are numbered in the Esperanto alphabet: a, b, c, ĉ, ...
fn letter(index: usize) -> char {
    const LETTERS: &str = "abcĉdefgĝhĥijĵklmnoprsŝtuŭvz";
    LETTERS.chars().nth(index).unwrap_or('?')
}
