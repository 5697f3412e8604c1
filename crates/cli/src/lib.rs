#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `treewalk` command-line front-end. It lists every
//! object beneath a root directory, one path per line, while reporting
//! entries it cannot read on standard error and carrying on with the rest of
//! the tree.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so tests can drive it without spawning a process. A
//! [`clap`](https://docs.rs/clap/) command definition parses the options,
//! [`logging::VerbosityConfig`] is built from `-v`, `--info`, and `--debug`,
//! and a [`walk::Walker`] performs the traversal. `--exclude-dir` is served by
//! [`walk::Walker::skip_directory`], so pruned subtrees are never read.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Per-entry failures never stop the listing. Each one is printed once as
//!   `treewalk: <error>`.
//! - Diagnostics recorded by the `logging` macros are written to standard
//!   error after every step, so they interleave with failure messages.
//!
//! # Errors
//!
//! [`EXIT_OK`] means every entry was listed. [`EXIT_PARTIAL`] means at least
//! one entry could not be produced. [`EXIT_ERROR`] covers an unusable root,
//! invalid `--info`/`--debug` flags, and output failures. Argument syntax
//! errors use clap's usage status (2).
//!
//! # Examples
//!
//! ```
//! use cli::run;
//! use test_support::TreeFixture;
//!
//! let mut fixture = TreeFixture::new();
//! fixture.file("notes.txt", b"hello");
//! let root = fixture.root().to_string_lossy().into_owned();
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["treewalk", "--relative", root.as_str()], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(stdout, b"notes.txt\n");
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/treewalk.rs` for the binary that wires [`run`] into `main`.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use logging::{VerbosityConfig, drain_events};
use walk::{EntryClassifier, WalkBuilder, WalkError, WalkStep, Walker};

const PROGRAM_NAME: &str = "treewalk";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Every entry beneath the root was listed.
pub const EXIT_OK: i32 = 0;

/// The walk could not start, or output could not be written.
pub const EXIT_ERROR: i32 = 1;

/// The walk finished but some entries could not be produced.
///
/// Matches rsync's "partial transfer due to error" status.
pub const EXIT_PARTIAL: i32 = 23;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Walk(#[from] WalkError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Default)]
struct ParsedArgs {
    root: OsString,
    verbose: u8,
    info: Vec<String>,
    debug: Vec<String>,
    sort: bool,
    exclude_dirs: Vec<OsString>,
    dirs_only: bool,
    relative: bool,
}

impl ParsedArgs {
    fn verbosity(&self) -> Result<VerbosityConfig, String> {
        let mut config = VerbosityConfig::from_verbose_level(self.verbose);
        for flags in &self.info {
            config.apply_info_flags(flags)?;
        }
        for flags in &self.debug {
            config.apply_debug_flags(flags)?;
        }
        Ok(config)
    }

    fn is_excluded(&self, name: Option<&OsStr>) -> bool {
        name.is_some_and(|name| {
            self.exclude_dirs
                .iter()
                .any(|excluded| excluded.as_os_str() == name)
        })
    }
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("List a directory tree in pre-order, reporting unreadable entries without stopping.")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity; may be repeated.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Fine-grained informational output (walk, skip, remove, stats, misc, ALL, NONE).")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Fine-grained debug output (walk, frame, classify, fs, ALL, NONE).")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .help("Order the entries of each directory by name.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exclude-dir")
                .long("exclude-dir")
                .value_name("NAME")
                .help("List directories named NAME but do not descend into them.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("dirs-only")
                .long("dirs-only")
                .short('d')
                .help("Only print directories.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("relative")
                .long("relative")
                .short('R')
                .help("Print paths relative to ROOT.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .help("Directory to walk.")
                .required(true)
                .value_parser(OsStringValueParser::new()),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let root = matches.remove_one::<OsString>("root").unwrap_or_default();
    let verbose = matches.get_count("verbose");
    let info = matches
        .remove_many::<String>("info")
        .map(Iterator::collect)
        .unwrap_or_default();
    let debug = matches
        .remove_many::<String>("debug")
        .map(Iterator::collect)
        .unwrap_or_default();
    let exclude_dirs = matches
        .remove_many::<OsString>("exclude-dir")
        .map(Iterator::collect)
        .unwrap_or_default();

    Ok(ParsedArgs {
        root,
        verbose,
        info,
        debug,
        sort: matches.get_flag("sort"),
        exclude_dirs,
        dirs_only: matches.get_flag("dirs-only"),
        relative: matches.get_flag("relative"),
    })
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit status: [`EXIT_OK`], [`EXIT_PARTIAL`],
/// [`EXIT_ERROR`], or clap's status for help, version, and usage errors.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => return report_usage(&error, stdout, stderr),
    };

    let config = match parsed.verbosity() {
        Ok(config) => config,
        Err(message) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
            return EXIT_ERROR;
        }
    };
    install_verbosity(config);
    drain_events();

    let walker = WalkBuilder::new(&parsed.root)
        .sort_entries(parsed.sort)
        .build();
    let status = match walker {
        Ok(walker) => list_tree(walker, &parsed, stdout, stderr),
        Err(error) => Err(CliError::Walk(error)),
    };
    flush_diagnostics(stderr);

    match status {
        Ok(status) => status,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            EXIT_ERROR
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    std::process::ExitCode::from(clamp_status(status))
}

fn clamp_status(status: i32) -> u8 {
    u8::try_from(status.clamp(0, MAX_EXIT_CODE)).unwrap_or(u8::MAX)
}

fn list_tree<C, Out, Err>(
    mut walker: Walker<C>,
    args: &ParsedArgs,
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<i32, CliError>
where
    C: EntryClassifier,
    Out: Write,
    Err: Write,
{
    let mut failures = 0_u64;

    loop {
        match walker.next_entry() {
            WalkStep::Yielded(entry) => {
                if entry.is_dir() && args.is_excluded(entry.file_name()) {
                    walker.skip_directory()?;
                    #[cfg(feature = "tracing")]
                    logging::trace_skip!("excluded {}", entry.relative_path().display());
                }
                if !args.dirs_only || entry.is_dir() {
                    let shown = if args.relative {
                        entry.relative_path()
                    } else {
                        entry.full_path()
                    };
                    writeln!(stdout, "{}", shown.display())?;
                }
            }
            WalkStep::Failed(error) => {
                failures += 1;
                writeln!(stderr, "{PROGRAM_NAME}: {error}")?;
            }
            WalkStep::Done => break,
        }
        flush_diagnostics(stderr);
    }
    stdout.flush()?;

    #[cfg(feature = "tracing")]
    {
        let stats = walker.stats();
        logging::trace_stats!(
            yielded = stats.yielded,
            failures = stats.failures,
            skipped = stats.skipped,
            "walk finished"
        );
    }

    Ok(if failures > 0 { EXIT_PARTIAL } else { EXIT_OK })
}

fn report_usage<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32 {
    let rendered = error.to_string();
    let _ = if error.use_stderr() {
        stderr.write_all(rendered.as_bytes())
    } else {
        stdout.write_all(rendered.as_bytes())
    };
    error.exit_code()
}

/// Diagnostics are best effort: a broken stderr never changes the exit status.
fn flush_diagnostics<Err: Write>(stderr: &mut Err) {
    for event in drain_events() {
        let _ = writeln!(stderr, "{event}");
    }
}

#[cfg(feature = "tracing")]
fn install_verbosity(config: VerbosityConfig) {
    logging::init_tracing(config);
}

#[cfg(not(feature = "tracing"))]
fn install_verbosity(config: VerbosityConfig) {
    logging::init(config);
}
