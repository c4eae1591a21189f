use clap::{Arg, Command};
use english_numerals::{NumberTranslator, NumeralError, ScaleTable, load_scale_table_from_file};
use std::fmt;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

/// Why a CLI run failed, and which exit code reports it.
#[derive(Debug)]
enum CliError {
    /// The number itself could not be translated
    Translation(NumeralError),
    /// Scale configuration could not be loaded or used
    Config(NumeralError),
    Stdin(io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Translation(_) => 1,
            CliError::Config(_) | CliError::Stdin(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Translation(e) => write!(f, "{}", e),
            CliError::Config(e) => write!(f, "Failed to load scale configuration: {}", e),
            CliError::Stdin(e) => write!(f, "Failed to read from stdin: {}", e),
        }
    }
}

fn read_number(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Translate `number`, or one line read from `stdin` when it is absent,
/// using the scale table at `config` or the English one.
fn run(
    number: Option<&str>,
    config: Option<&Path>,
    stdin: &mut impl BufRead,
) -> Result<String, CliError> {
    let scales = match config {
        Some(path) => load_scale_table_from_file(path).map_err(CliError::Config)?,
        None => ScaleTable::english(),
    };
    let translator = NumberTranslator::new(scales).map_err(CliError::Config)?;

    let input = match number {
        Some(number) => number.to_string(),
        None => read_number(stdin).map_err(CliError::Stdin)?,
    };

    debug!("Translating '{}'", input);

    translator
        .translate_str(&input)
        .map_err(CliError::Translation)
}

fn main() -> ExitCode {
    let matches = Command::new("english-numerals")
        .version("0.1.0")
        .about("Spell out a number in English words")
        .arg(
            Arg::new("number")
                .help("Number to translate, e.g. 1024, -56 or 1,234 (read from stdin if omitted)")
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("JSON file with the scale levels to use instead of the English table"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show debug logging on stderr")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let default_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let number = matches.get_one::<String>("number").map(|s| s.as_str());
    let config = matches.get_one::<String>("config").map(Path::new);

    match run(number, config, &mut io::stdin().lock()) {
        Ok(words) => {
            println!("{}", words);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
