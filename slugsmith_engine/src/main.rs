#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** slugsmith **
//! Command-line front end for the slug engine.

use std::borrow::Cow;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;

use slugsmith_data::{TableError, TranslitEntry, validate_table};
use slugsmith_engine::config::{SlugConfig, load_config};
use slugsmith_engine::{ErrorKind, SlugError, SlugOptions, slugify};

#[derive(Parser)]
#[command(author, version, about = "Turn arbitrary text into ASCII slugs.")]
struct Cli {
    /// TOML config file (overrides $SLUGSMITH_CONFIG and the default locations).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text to slugs, one per line.
    Convert(ConvertArgs),
    /// Report on the built-in transliteration table.
    Table(TableArgs),
    /// Show the table replacement for each character.
    Lookup(LookupArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Inputs to convert. Reads newline-delimited input from stdin when empty.
    text: Vec<OsString>,
    /// Separator placed between words.
    #[arg(long, short)]
    separator: Option<char>,
    /// Hard limit on slug length in bytes (0 = unlimited).
    #[arg(long, short)]
    max_length: Option<usize>,
    /// Keep case and pass non-ASCII characters through unchanged.
    #[arg(long, short, overrides_with = "no_preserve_case")]
    preserve_case: bool,
    /// Fold case and transliterate, even when the config file preserves case.
    #[arg(long, overrides_with = "preserve_case")]
    no_preserve_case: bool,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Continue past inputs that fail to convert.
    #[arg(long)]
    keep_going: bool,
}

impl ConvertArgs {
    /// The case flag as a config layer: `None` when neither flag was given.
    fn preserve_case(&self) -> Option<bool> {
        match (self.preserve_case, self.no_preserve_case) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Args)]
struct TableArgs {
    /// Exit with failure if the table breaks any lookup invariant.
    #[arg(long)]
    check: bool,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Args)]
struct LookupArgs {
    /// Characters to look up.
    chars: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Record<'a> {
    input: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
}

#[derive(Serialize)]
struct TableReport<'a> {
    entries: usize,
    errors: &'a [TableError],
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Convert(args) => {
            let file_layer = load_config(cli.config.as_deref()).context("while loading config")?;
            run_convert(&args, file_layer)
        },
        Commands::Table(args) => run_table(&args),
        Commands::Lookup(args) => run_lookup(&args),
    }
}

fn options_for(args: &ConvertArgs, file_layer: SlugConfig) -> Result<SlugOptions> {
    let flags = SlugConfig {
        separator: args.separator,
        max_length: args.max_length,
        preserve_case: args.preserve_case(),
    };
    file_layer.merge(flags).to_options()
}

/// Drop the `\r` of a CRLF line ending.
fn strip_cr(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}

/// Newline-delimited inputs. Lines are raw bytes so invalid UTF-8 reaches the validator intact.
fn lines_of(reader: impl BufRead) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    reader.split(b'\n').map(|line| line.map(strip_cr))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    converted: usize,
    failed: usize,
}

impl Tally {
    fn succeeded(self) -> bool {
        self.failed == 0
    }

    fn exit_code(self) -> ExitCode {
        if self.succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn run_convert(args: &ConvertArgs, file_layer: SlugConfig) -> Result<ExitCode> {
    let options = options_for(args, file_layer)?;
    info!(
        "converting with separator {:?}, max_length {}, preserve_case {}",
        char::from(options.separator),
        options.max_length,
        options.preserve_case
    );

    let inputs: Box<dyn Iterator<Item = io::Result<Vec<u8>>> + '_> = if args.text.is_empty() {
        Box::new(lines_of(io::stdin().lock()))
    } else {
        Box::new(
            args.text
                .iter()
                .map(|text| Ok(text.as_encoded_bytes().to_vec())),
        )
    };

    let mut stdout = io::stdout().lock();
    let tally = convert_all(inputs, &options, args.format, args.keep_going, &mut stdout)?;
    stdout.flush()?;

    info!("{} converted, {} failed", tally.converted, tally.failed);
    Ok(tally.exit_code())
}

/// Convert every input in order. Stops after the first failure unless `keep_going` is set.
fn convert_all(
    inputs: impl IntoIterator<Item = io::Result<Vec<u8>>>,
    options: &SlugOptions,
    format: Format,
    keep_going: bool,
    out: &mut impl Write,
) -> Result<Tally> {
    let mut tally = Tally::default();
    for input in inputs {
        let input = input.context("reading input")?;
        let outcome = slugify(&input, options);
        write_outcome(out, format, &input, &outcome)?;
        if outcome.is_ok() {
            tally.converted += 1;
        } else {
            tally.failed += 1;
            if !keep_going {
                break;
            }
        }
    }
    Ok(tally)
}

/// Text mode writes slugs to `out` and failures to stderr. JSON mode writes one record per input.
fn write_outcome(
    out: &mut impl Write,
    format: Format,
    input: &[u8],
    outcome: &Result<Vec<u8>, SlugError>,
) -> Result<()> {
    match format {
        Format::Text => match outcome {
            Ok(slug) => writeln!(out, "{}", String::from_utf8_lossy(slug))?,
            Err(err) => eprintln!("error: {:?}: {err}", String::from_utf8_lossy(input)),
        },
        Format::Json => {
            let record = Record {
                input: String::from_utf8_lossy(input),
                slug: outcome.as_ref().ok().map(|slug| String::from_utf8_lossy(slug)),
                error: outcome.as_ref().err().map(ToString::to_string),
                kind: outcome.as_ref().err().map(SlugError::kind),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

fn run_table(args: &TableArgs) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    let clean = report_table(&mut stdout, slugsmith_data::entries(), args.format)?;
    if args.check && !clean {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Write the table report and return whether the table passed every check.
fn report_table(out: &mut impl Write, entries: &[TranslitEntry], format: Format) -> Result<bool> {
    let errors = validate_table(entries);
    match format {
        Format::Text => {
            writeln!(out, "{} entries", entries.len())?;
            for err in &errors {
                writeln!(out, "- {err}")?;
            }
            if errors.is_empty() {
                writeln!(out, "table OK")?;
            }
        },
        Format::Json => {
            let report = TableReport {
                entries: entries.len(),
                errors: &errors,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        },
    }
    Ok(errors.is_empty())
}

fn run_lookup(args: &LookupArgs) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    for ch in args.chars.chars() {
        let code_point = u32::from(ch);
        match slugsmith_data::lookup(code_point) {
            Some(ascii) => writeln!(stdout, "U+{code_point:04X} {ch} -> {ascii:?}")?,
            None => writeln!(stdout, "U+{code_point:04X} {ch} -> <none>")?,
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_args(argv: &[&str]) -> ConvertArgs {
        let cli = Cli::try_parse_from(["slugsmith", "convert"].iter().chain(argv).copied()).unwrap();
        match cli.command {
            Commands::Convert(args) => args,
            _ => unreachable!("parsed a convert command"),
        }
    }

    fn inputs(lines: &[&[u8]]) -> Vec<io::Result<Vec<u8>>> {
        lines.iter().map(|line| Ok(line.to_vec())).collect()
    }

    fn json_lines(out: &[u8]) -> Vec<serde_json::Value> {
        out.split(|&b| b == b'\n')
            .filter(|line| !line.is_empty())
            .map(|line| serde_json::from_slice(line).unwrap())
            .collect()
    }

    #[test]
    fn no_preserve_case_flag_beats_config_file() {
        let file_layer = SlugConfig {
            preserve_case: Some(true),
            ..SlugConfig::default()
        };
        let args = convert_args(&["--no-preserve-case", "x"]);
        assert!(!options_for(&args, file_layer).unwrap().preserve_case);
    }

    #[test]
    fn config_file_applies_without_case_flags() {
        let file_layer = SlugConfig {
            separator: Some('_'),
            preserve_case: Some(true),
            ..SlugConfig::default()
        };
        let args = convert_args(&["x"]);
        let options = options_for(&args, file_layer).unwrap();
        assert!(options.preserve_case);
        assert_eq!(options.separator, b'_');
    }

    #[test]
    fn flags_override_config_file() {
        let file_layer = SlugConfig {
            separator: Some('_'),
            max_length: Some(4),
            preserve_case: Some(false),
        };
        let args = convert_args(&["-s", ".", "-m", "9", "-p", "x"]);
        let options = options_for(&args, file_layer).unwrap();
        assert_eq!(options.separator, b'.');
        assert_eq!(options.max_length, 9);
        assert!(options.preserve_case);
    }

    #[test]
    fn last_case_flag_wins() {
        assert_eq!(convert_args(&["-p", "--no-preserve-case"]).preserve_case(), Some(false));
        assert_eq!(convert_args(&["--no-preserve-case", "-p"]).preserve_case(), Some(true));
        assert_eq!(convert_args(&[]).preserve_case(), None);
    }

    #[test]
    fn json_record_for_a_slug() {
        let mut out = Vec::new();
        let outcome = slugify(b"Hello World", &SlugOptions::default());
        write_outcome(&mut out, Format::Json, b"Hello World", &outcome).unwrap();
        let records = json_lines(&out);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["input"], "Hello World");
        assert_eq!(records[0]["slug"], "hello-world");
        assert!(records[0].get("error").is_none());
        assert!(records[0].get("kind").is_none());
    }

    #[test]
    fn json_record_for_an_empty_slug() {
        let mut out = Vec::new();
        let outcome = slugify(b"!!!", &SlugOptions::default());
        write_outcome(&mut out, Format::Json, b"!!!", &outcome).unwrap();
        let records = json_lines(&out);
        assert_eq!(records[0]["input"], "!!!");
        assert_eq!(records[0]["error"], "input produced an empty slug");
        assert_eq!(records[0]["kind"], "empty_result");
        assert!(records[0].get("slug").is_none());
    }

    #[test]
    fn text_output_is_the_bare_slug() {
        let mut out = Vec::new();
        let outcome = slugify("Crème Brûlée".as_bytes(), &SlugOptions::default());
        write_outcome(&mut out, Format::Text, "Crème Brûlée".as_bytes(), &outcome).unwrap();
        assert_eq!(out, b"creme-brulee\n");
    }

    #[test]
    fn text_failures_stay_off_stdout() {
        let mut out = Vec::new();
        let outcome = slugify(b"\xC0\xAF", &SlugOptions::default());
        write_outcome(&mut out, Format::Text, b"\xC0\xAF", &outcome).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn conversion_stops_at_first_failure() {
        let mut out = Vec::new();
        let lines = inputs(&[b"one", b"???", b"three"]);
        let tally = convert_all(lines, &SlugOptions::default(), Format::Json, false, &mut out).unwrap();
        assert_eq!(tally, Tally { converted: 1, failed: 1 });
        assert_eq!(json_lines(&out).len(), 2);
        assert!(!tally.succeeded());
    }

    #[test]
    fn keep_going_converts_everything_but_still_fails() {
        let mut out = Vec::new();
        let lines = inputs(&[b"one", b"???", b"three"]);
        let tally = convert_all(lines, &SlugOptions::default(), Format::Text, true, &mut out).unwrap();
        assert_eq!(tally, Tally { converted: 2, failed: 1 });
        assert_eq!(out, b"one\nthree\n");
        assert!(!tally.succeeded());
    }

    #[test]
    fn clean_run_succeeds() {
        let mut out = Vec::new();
        let lines = inputs(&[b"a b", b"c"]);
        let tally = convert_all(lines, &SlugOptions::default(), Format::Text, false, &mut out).unwrap();
        assert!(tally.succeeded());
        assert_eq!(out, b"a-b\nc\n");
    }

    #[test]
    fn read_errors_abort_conversion() {
        let mut out = Vec::new();
        let lines = vec![Ok(b"one".to_vec()), Err(io::Error::other("broken pipe"))];
        let err = convert_all(lines, &SlugOptions::default(), Format::Text, true, &mut out).unwrap_err();
        assert!(err.to_string().contains("reading input"));
        assert_eq!(out, b"one\n");
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let reader = io::Cursor::new(b"Hello\r\nWorld\nlast\r".to_vec());
        let lines: Vec<Vec<u8>> = lines_of(reader).map(Result::unwrap).collect();
        assert_eq!(lines, vec![b"Hello".to_vec(), b"World".to_vec(), b"last".to_vec()]);
    }

    #[test]
    fn lone_carriage_return_inside_a_line_survives() {
        assert_eq!(strip_cr(b"a\rb".to_vec()), b"a\rb");
        assert_eq!(strip_cr(b"\r".to_vec()), b"");
    }

    #[test]
    fn builtin_table_passes_its_checks() {
        let mut out = Vec::new();
        assert!(report_table(&mut out, slugsmith_data::entries(), Format::Text).unwrap());
        assert!(String::from_utf8(out).unwrap().ends_with("table OK\n"));
    }

    #[test]
    fn broken_table_fails_check_and_reports_json() {
        let broken = [
            TranslitEntry::new(0x00E9, "e"),
            TranslitEntry::new(0x00C0, "A"),
            TranslitEntry::new(0x00C0, "\u{e9}"),
        ];
        let mut out = Vec::new();
        assert!(!report_table(&mut out, &broken, Format::Json).unwrap());
        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["entries"], 3);
        let errors = report["errors"].as_array().unwrap();
        assert!(errors.iter().any(|err| err["kind"] == "unsorted"));
        assert!(errors.iter().any(|err| err["kind"] == "non_ascii_replacement"));
    }
}
