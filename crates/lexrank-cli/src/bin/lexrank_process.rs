// lexrank-process: Exact lemmas and fuzzy stems for words from stdin.
//
// Reads words from stdin (one per line) or from the command line, runs the
// engine on each, and prints the emitted lemmas and stems in rank order.
//
// Usage:
//   lexrank-process [-t TABLE] [--exact] [--fuzzy] [-o LIST] [--json] [-v] [WORD...]
//
// Options:
//   -t, --table PATH      Analyzer table (JSON)
//   --exact               Rank exact lemmas
//   --fuzzy               Select fuzzy stems
//   -o, --options LIST    Comma list: exact, fuzzy, both
//   --json                One JSON array of emissions per word
//   -v, --verbose         Debug logging to stderr
//   -h, --help            Print help
//
// The exit code is 0, or the status code of the last failing word.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use lexrank_core::{Options, StatusCode};
use lexrank_engine::{CollectingSink, Emission, Engine};

fn print_help() {
    println!("lexrank-process: Exact lemmas and fuzzy stems for words.");
    println!();
    println!("Usage: lexrank-process [-t TABLE] [--exact] [--fuzzy] [-o LIST] [--json] [-v] [WORD...]");
    println!();
    println!("If WORD arguments are given, processes each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!("Without --exact, --fuzzy or --options both passes run.");
    println!();
    println!("Options:");
    println!("  -t, --table PATH      Analyzer table (JSON)");
    println!("  --exact               Rank exact lemmas");
    println!("  --fuzzy               Select fuzzy stems");
    println!("  -o, --options LIST    Comma list: exact, fuzzy, both");
    println!("  --json                One JSON array of emissions per word");
    println!("  -v, --verbose         Debug logging to stderr");
    println!("  -h, --help            Print this help");
}

/// Pull `-o LIST` / `--options=LIST` out of the args.
fn parse_options(args: &[String]) -> (Option<Options>, Vec<String>) {
    let mut options: Option<Options> = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let list = if let Some(val) = arg.strip_prefix("--options=") {
            val.to_string()
        } else if arg == "--options" || arg == "-o" {
            match iter.next() {
                Some(val) => val.clone(),
                None => lexrank_cli::fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
            continue;
        };
        let parsed = Options::parse_list(&list)
            .unwrap_or_else(|| lexrank_cli::fatal(&format!("unknown option list: {list}")));
        options = Some(options.unwrap_or_default() | parsed);
    }

    (options, remaining)
}

fn write_text(out: &mut impl Write, word: &str, sink: &CollectingSink) -> io::Result<()> {
    if sink.is_empty() {
        return writeln!(out, "{word}: (nothing)");
    }
    writeln!(out, "{word}:")?;
    for emission in sink.emissions() {
        let forms: Vec<String> = emission.forms().iter().map(|t| t.to_string()).collect();
        let forms = forms.join(",");
        match emission {
            Emission::Lemma {
                lexeme_id, weight, ..
            } => writeln!(out, "  lemma {lexeme_id} weight={weight:.4} forms=[{forms}]")?,
            Emission::Stem {
                stem,
                word_class,
                weight,
                ..
            } => writeln!(
                out,
                "  stem {stem} class={word_class} weight={weight:.4} forms=[{forms}]"
            )?,
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, sink: &CollectingSink) -> io::Result<()> {
    serde_json::to_writer(&mut *out, sink)?;
    writeln!(out)
}

struct Runner<'a> {
    engine: &'a Engine,
    options: Options,
    json: bool,
    last_failure: Option<StatusCode>,
}

impl Runner<'_> {
    fn run(&mut self, word: &str, out: &mut impl Write) -> io::Result<()> {
        let mut sink = CollectingSink::new();
        if let Err(e) = self.engine.process_str(&mut sink, self.options, word) {
            eprintln!("{word}: {e}");
            self.last_failure = Some(e.status());
        }
        if self.json {
            write_json(out, &sink)
        } else {
            write_text(out, word, &sink)
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (table_path, args) = lexrank_cli::parse_table_path(&args);

    if lexrank_cli::wants_help(&args) {
        print_help();
        return ExitCode::SUCCESS;
    }

    let (list, args) = parse_options(&args);
    let mut options = list.unwrap_or_default();
    if lexrank_cli::has_flag(&args, "--exact", None) {
        options |= Options::EXACT_LEMMA;
    }
    if lexrank_cli::has_flag(&args, "--fuzzy", None) {
        options |= Options::FUZZY_STEM;
    }
    if list.is_none() && options.is_empty() {
        options = Options::all();
    }
    let json = lexrank_cli::has_flag(&args, "--json", None);
    lexrank_cli::init_tracing(lexrank_cli::has_flag(&args, "--verbose", Some("-v")));

    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let engine = lexrank_cli::load_engine(table_path.as_deref())
        .unwrap_or_else(|e| lexrank_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut runner = Runner {
        engine: &engine,
        options,
        json,
        last_failure: None,
    };

    let written = if words.is_empty() {
        let stdin = io::stdin();
        let mut result = Ok(());
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            result = runner.run(word, &mut out);
            if result.is_err() {
                break;
            }
        }
        result
    } else {
        words.iter().try_for_each(|word| runner.run(word, &mut out))
    };

    if let Err(e) = written.and_then(|()| out.flush()) {
        lexrank_cli::fatal(&format!("error writing output: {e}"));
    }

    match runner.last_failure {
        Some(status) => ExitCode::from(status.code() as u8),
        None => ExitCode::SUCCESS,
    }
}
