//! Command-line interface for profile-details
//! Runs the segmentation and codec stages on text given on the command line.
//!
//! Usage:
//!   details segment `<section>` `<text>`          - Split section text into attribute fields
//!   details decode `<attribute>` `<raw>`          - Decode display text into a canonical value
//!   details encode `<attribute>` `<value>`        - Encode a value into wire fields
//!   details profile `<path>`                      - Decode every attribute of a profile document
//!   details attributes                          - List known attributes
//!
//! Every command accepts `--format json|yaml` and `--config <path>`; `DETAILS_*`
//! environment variables override both. Text arguments may be `-` to read standard input.

use clap::{Arg, ArgAction, ArgMatches, Command};
use profile_details::profile::codec::CanonicalValue;
use profile_details::profile::config::{DetailsConfig, Loader};
use profile_details::profile::segmentation::Section;
use profile_details::profile::snapshot::{DetailsEngine, ProfileDocument};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::process;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("details")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Segment, decode and encode profile attributes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format ('json' or 'yaml')")
                .value_parser(["json", "yaml"])
                .default_value("json"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("segment")
                .about("Split one section of profile text into attribute fields")
                .arg(
                    Arg::new("section")
                        .help("Section name ('basics', 'background' or 'misc')")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("text")
                        .help("Section text, or '-' for stdin")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .help("Also show category assignments and dropped tokens")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode display text into a canonical value")
                .arg(Arg::new("attribute").required(true).index(1))
                .arg(
                    Arg::new("raw")
                        .help("Display text, or '-' for stdin")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Encode a value into wire fields")
                .arg(Arg::new("attribute").required(true).index(1))
                .arg(
                    Arg::new("value")
                        .help("Value text, or '-' for stdin")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Read the value as JSON (number, string, list or null)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("profile")
                .about("Decode every attribute of a profile document")
                .long_about(
                    "Reads a JSON object. Keys 'basics', 'background' and 'misc' are \
                     segmented as section text; any other keys are taken as field ids \
                     with display values.",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the JSON document, or '-' for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("attributes").about("List known attributes and their wire ids"))
        .get_matches();

    let format = matches.get_one::<String>("format").unwrap().clone();
    let config = match load_config(matches.get_one::<String>("config")) {
        Ok(config) => config,
        Err(e) => fail(format!("Error loading config: {}", e)),
    };
    let engine = DetailsEngine::new(&config);

    match matches.subcommand() {
        Some(("segment", sub)) => handle_segment_command(&engine, sub, &format),
        Some(("decode", sub)) => handle_decode_command(&engine, sub, &format),
        Some(("encode", sub)) => handle_encode_command(&engine, sub, &format),
        Some(("profile", sub)) => handle_profile_command(&engine, sub, &format),
        Some(("attributes", _)) => handle_attributes_command(&engine, &format),
        _ => unreachable!(),
    }
}

fn load_config(path: Option<&String>) -> Result<DetailsConfig, config::ConfigError> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.with_env().build()
}

/// Handle the segment command
fn handle_segment_command(engine: &DetailsEngine, matches: &ArgMatches, format: &str) {
    let section = matches.get_one::<String>("section").unwrap();
    let section: Section = section.parse().unwrap_or_else(|e: String| fail(e));
    let text = read_argument(matches.get_one::<String>("text").unwrap());

    let report = engine
        .layouts()
        .segment_with_report(section, &text)
        .unwrap_or_else(|e| fail(e));
    debug!(assignments = ?report.assignments, "segmented {} section", section);

    if matches.get_flag("report") {
        emit(&report, format);
    } else {
        emit(&report.fields, format);
    }
}

/// Handle the decode command
fn handle_decode_command(engine: &DetailsEngine, matches: &ArgMatches, format: &str) {
    let codec = attribute_codec(engine, matches);
    let raw = read_argument(matches.get_one::<String>("raw").unwrap());
    emit(&codec.decode(&raw), format);
}

/// Handle the encode command
fn handle_encode_command(engine: &DetailsEngine, matches: &ArgMatches, format: &str) {
    let codec = attribute_codec(engine, matches);
    let text = read_argument(matches.get_one::<String>("value").unwrap());
    let value = if matches.get_flag("json") {
        serde_json::from_str::<CanonicalValue>(&text)
            .unwrap_or_else(|e| fail(format!("Error reading value: {}", e)))
    } else {
        CanonicalValue::text(text.trim())
    };
    let fields = codec.encode(&value).unwrap_or_else(|e| fail(e));
    emit(&fields, format);
}

/// Handle the profile command
fn handle_profile_command(engine: &DetailsEngine, matches: &ArgMatches, format: &str) {
    let path = matches.get_one::<String>("path").unwrap();
    let source = if path == "-" {
        read_argument(path)
    } else {
        std::fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("Error reading {}: {}", path, e)))
    };
    let raw: BTreeMap<String, String> = serde_json::from_str(&source)
        .unwrap_or_else(|e| fail(format!("Error parsing {}: {}", path, e)));

    let snapshot = engine
        .snapshot(&document_from_map(raw))
        .unwrap_or_else(|e| fail(e));
    if !snapshot.dropped().is_empty() {
        eprintln!("Dropped tokens: {}", snapshot.dropped().join(", "));
    }
    emit(&snapshot.as_map(engine.registry()), format);
}

/// Handle the attributes command
fn handle_attributes_command(engine: &DetailsEngine, format: &str) {
    let attributes: BTreeMap<&str, &str> = engine
        .registry()
        .iter()
        .map(|codec| (codec.name(), codec.wire_id()))
        .collect();
    emit(&attributes, format);
}

/// Section documents use only section names as keys.
fn document_from_map(raw: BTreeMap<String, String>) -> ProfileDocument {
    let sections: Option<BTreeMap<Section, String>> = raw
        .iter()
        .map(|(key, text)| key.parse::<Section>().ok().map(|section| (section, text.clone())))
        .collect();
    match sections {
        Some(sections) if !sections.is_empty() => ProfileDocument::Sections(sections),
        _ => ProfileDocument::DisplayValues(raw),
    }
}

fn attribute_codec<'e>(
    engine: &'e DetailsEngine,
    matches: &ArgMatches,
) -> &'e profile_details::profile::codec::AttributeCodec {
    let attribute = matches.get_one::<String>("attribute").unwrap();
    engine
        .registry()
        .get(attribute)
        .unwrap_or_else(|| fail(format!("Unknown attribute '{}'", attribute)))
}

fn read_argument(value: &str) -> String {
    if value != "-" {
        return value.to_string();
    }
    let mut buffer = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
        fail(format!("Error reading stdin: {}", e));
    }
    buffer
}

fn emit<T: Serialize + ?Sized>(value: &T, format: &str) {
    let rendered = match format {
        "yaml" => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        _ => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
    };
    match rendered {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => fail(format!("Error serializing output: {}", e)),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}
