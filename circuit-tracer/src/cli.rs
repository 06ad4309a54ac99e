//! Command-line arguments.

use std::fmt;
use std::path::PathBuf;

use tracer_search::{Discipline, SearchConfig};

pub const USAGE: &str = "\
Usage: circuit-tracer <-s|-q> <-c|-j> [options] <board-file>

First argument:
  -s          use a stack for storage (depth-first)
  -q          use a queue for storage (breadth-first)

Second argument:
  -c          print each shortest trace as a board dump
  -j          print the shortest traces as JSON

Third argument: name of the input file

Options:
  --prune     skip branches that cannot beat the best trace found so far
  --color     highlight traces in console output
  --stats     print search statistics to stderr
  -h, --help  show this message

Set RUST_LOG=debug for a search summary.";

/// How results are presented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

/// Everything one invocation needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub config: SearchConfig,
    pub format: OutputFormat,
    pub color: bool,
    pub stats: bool,
    pub file: PathBuf,
}

/// Why the arguments could not be turned into [`Options`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliError {
    /// `-h` / `--help` was given.
    Help,
    /// Wrong number of positional arguments.
    ArgCount(usize),
    /// First argument is neither `-s` nor `-q`.
    Storage(String),
    /// Second argument names a display that is not built (`-g`).
    UnavailableDisplay(String),
    /// Second argument is not a display flag at all.
    Display(String),
    /// An option this program does not know.
    UnknownOption(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => write!(f, "help requested"),
            Self::ArgCount(n) => write!(f, "expected 3 arguments, got {n}"),
            Self::Storage(s) => write!(
                f,
                "that data structure is not supported or doesn't exist: {s}"
            ),
            Self::UnavailableDisplay(s) => write!(f, "that display format is unavailable: {s}"),
            Self::Display(s) => write!(f, "unknown display format: {s}"),
            Self::UnknownOption(s) => write!(f, "unknown option: {s}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Parse the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut positional = Vec::new();
    let mut config = SearchConfig::default();
    let mut color = false;
    let mut stats = false;

    for arg in args {
        let arg = arg.into();
        match arg.as_str() {
            "-h" | "--help" => return Err(CliError::Help),
            "--prune" => config.prune = true,
            "--color" => color = true,
            "--stats" => stats = true,
            s if s.starts_with("--") => return Err(CliError::UnknownOption(arg)),
            _ => positional.push(arg),
        }
    }

    let [storage, display, file] = <[String; 3]>::try_from(positional)
        .map_err(|rest| CliError::ArgCount(rest.len()))?;

    config.discipline = storage
        .parse::<Discipline>()
        .map_err(|e| CliError::Storage(e.0))?;
    let format = match display.as_str() {
        "-c" => OutputFormat::Console,
        "-j" => OutputFormat::Json,
        "-g" => return Err(CliError::UnavailableDisplay(display)),
        _ => return Err(CliError::Display(display)),
    };

    Ok(Options {
        config,
        format,
        color,
        stats,
        file: PathBuf::from(file),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_arguments() {
        let o = parse_args(["-q", "-c", "boards/small.dat"]).unwrap();
        assert_eq!(o.config.discipline, Discipline::Queue);
        assert!(!o.config.prune);
        assert_eq!(o.format, OutputFormat::Console);
        assert!(!o.color);
        assert!(!o.stats);
        assert_eq!(o.file, PathBuf::from("boards/small.dat"));

        let o = parse_args(["-s", "-j", "b.dat"]).unwrap();
        assert_eq!(o.config.discipline, Discipline::Stack);
        assert_eq!(o.format, OutputFormat::Json);

        let o = parse_args(["queue", "-c", "b.dat"]).unwrap();
        assert_eq!(o.config.discipline, Discipline::Queue);
    }

    #[test]
    fn options_may_appear_anywhere() {
        let o = parse_args(["--prune", "-s", "-c", "--color", "b.dat", "--stats"]).unwrap();
        assert!(o.config.prune);
        assert!(o.color);
        assert!(o.stats);
        assert_eq!(o.file, PathBuf::from("b.dat"));
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert_eq!(parse_args(Vec::<String>::new()), Err(CliError::ArgCount(0)));
        assert_eq!(parse_args(["-s", "-c"]), Err(CliError::ArgCount(2)));
        assert_eq!(
            parse_args(["-s", "-c", "a", "b"]),
            Err(CliError::ArgCount(4))
        );
    }

    #[test]
    fn rejects_unknown_flags() {
        assert_eq!(
            parse_args(["-x", "-c", "b.dat"]),
            Err(CliError::Storage("-x".into()))
        );
        assert_eq!(
            parse_args(["-s", "-g", "b.dat"]),
            Err(CliError::UnavailableDisplay("-g".into()))
        );
        assert_eq!(
            parse_args(["-s", "-z", "b.dat"]),
            Err(CliError::Display("-z".into()))
        );
        assert_eq!(
            parse_args(["-s", "-c", "b.dat", "--fast"]),
            Err(CliError::UnknownOption("--fast".into()))
        );
        assert_eq!(parse_args(["--help"]), Err(CliError::Help));
    }
}
