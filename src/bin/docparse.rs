//! Command-line interface for docparse
//! Parses Google style docstrings from files and prints the tree or the diagnostics.
//!
//! Usage:
//!   docparse parse `<path>` [--format `<format>`] [--indent N] [--strict|--lenient] [--config `<file>`]
//!   docparse check `<paths>`... [--indent N] [--strict|--lenient] [--config `<file>`]
//!   docparse sections                                  - List the recognized section names
//!
//! A path of `-` reads the docstring from stdin.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use config::ValueKind;
use docstring_parser::docstring::config::{DocparseConfig, Loader};
use docstring_parser::docstring::formats::{serialize_docstring, OutputFormat};
use docstring_parser::docstring::parsing::{SectionKind, SECTION_ALIASES};
use docstring_parser::docstring::{init_tracing, DocstringProcessor, ProcessorOptions};
use std::io::Read;

fn policy_args() -> [Arg; 4] {
    [
        Arg::new("indent")
            .long("indent")
            .help("Spaces per section indentation level (inferred when omitted)")
            .value_parser(value_parser!(usize)),
        Arg::new("strict")
            .long("strict")
            .help("Fail on the first docstring that does not parse")
            .action(ArgAction::SetTrue)
            .conflicts_with("lenient"),
        Arg::new("lenient")
            .long("lenient")
            .help("Log broken docstrings and skip them")
            .action(ArgAction::SetTrue),
        Arg::new("config")
            .long("config")
            .short('c')
            .help("Configuration file layered over the defaults"),
    ]
}

fn main() {
    init_tracing();

    let matches = Command::new("docparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and checking Google style docstrings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a docstring and print its tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the docstring file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["treeviz", "json", "yaml"]),
                )
                .args(policy_args()),
        )
        .subcommand(
            Command::new("check")
                .about("Parse docstring files and report diagnostics")
                .arg(
                    Arg::new("paths")
                        .help("Docstring files to check")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .args(policy_args()),
        )
        .subcommand(Command::new("sections").about("List recognized section names"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let config = load_config(parse_matches);
            let path = parse_matches.get_one::<String>("path").unwrap();
            handle_parse_command(path, &config);
        }
        Some(("check", check_matches)) => {
            let config = load_config(check_matches);
            let paths: Vec<&String> = check_matches.get_many::<String>("paths").unwrap().collect();
            handle_check_command(&paths, &config);
        }
        Some(("sections", _)) => {
            handle_sections_command();
        }
        _ => unreachable!(),
    }
}

/// Layer the config file and command line flags over the defaults
fn load_config(matches: &ArgMatches) -> DocparseConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let mut overrides: Vec<(&str, ValueKind)> = Vec::new();
    if let Some(indent) = matches.get_one::<usize>("indent") {
        overrides.push(("docstring.indent", (*indent as i64).into()));
    }
    if matches.get_flag("strict") {
        overrides.push(("docstring.strict", true.into()));
    }
    if matches.get_flag("lenient") {
        overrides.push(("docstring.strict", false.into()));
    }
    if let Ok(Some(format)) = matches.try_get_one::<String>("format") {
        overrides.push(("inspect.format", format.to_string().into()));
    }

    let result = overrides
        .into_iter()
        .try_fold(loader, |loader, (key, value)| loader.set_override(key, value))
        .and_then(Loader::build);
    result.unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

fn read_source(path: &str) -> String {
    let result = if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map(|_| source)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}

/// Handle the parse command
fn handle_parse_command(path: &str, config: &DocparseConfig) {
    let source = read_source(path);
    let processor = DocstringProcessor::new(ProcessorOptions::from(&config.docstring));

    let doc = match processor.process(&source) {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            eprintln!("Skipped {}: the docstring does not parse", path);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let format: OutputFormat = config.inspect.format;
    let output = serialize_docstring(&doc, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Handle the check command
fn handle_check_command(paths: &[&String], config: &DocparseConfig) {
    let sources: Vec<(String, String)> = paths
        .iter()
        .map(|path| (path.to_string(), read_source(path)))
        .collect();
    let processor = DocstringProcessor::new(ProcessorOptions::from(&config.docstring));

    let processed = processor
        .process_all(
            sources
                .iter()
                .map(|(path, source)| (path.as_str(), source.as_str())),
        )
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    for item in &processed {
        match &item.docstring {
            Some(doc) => println!("ok      {} ({} sections)", item.name, doc.sections.len()),
            None => println!("skipped {}", item.name),
        }
    }
}

/// Handle the sections command
fn handle_sections_command() {
    println!("Recognized sections:\n");
    let mut kinds: Vec<SectionKind> = Vec::new();
    for (_, kind) in SECTION_ALIASES {
        if !kinds.contains(kind) {
            kinds.push(*kind);
        }
    }
    for kind in kinds {
        let aliases: Vec<&str> = SECTION_ALIASES
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(alias, _)| *alias)
            .collect();
        let marker = if kind.is_inline() { " (inline)" } else { "" };
        println!("  {}{}: {}", kind.identity(), marker, aliases.join(", "));
    }
}
