use anyhow::Result;
use markdown_minute_config::Config;
use markdown_minute_engine::{Options, convert_to_html_string_with};
use std::{
    env,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};
use thiserror::Error;

const USAGE: &str = "\
Usage: markdown-minute [INPUT] [--output FILE] [--config FILE] [--breaks]

Converts Markdown to HTML. Reads stdin when INPUT is missing or `-`.

Options:
  -o, --output FILE   write HTML to FILE instead of stdout
  -c, --config FILE   read settings from FILE instead of the default config
  -b, --breaks        render blank lines as <br />
  -h, --help          print this help";

#[derive(Debug, Error)]
enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown option {0}")]
    UnknownOption(String),

    #[error("unexpected argument {0}; only one input file is supported")]
    UnexpectedArgument(String),

    #[error("failed to read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    ReadStdin(io::Error),

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("failed to write stdout: {0}")]
    WriteStdout(io::Error),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    breaks: bool,
    help: bool,
}

fn parse_args<I>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-b" | "--breaks" => parsed.breaks = true,
            "-o" | "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                parsed.output = Some(PathBuf::from(value));
            }
            "-c" | "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                parsed.config = Some(PathBuf::from(value));
            }
            "-" if parsed.input.is_none() => parsed.input = Some(PathBuf::from("-")),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::UnknownOption(flag.to_string()));
            }
            other if parsed.input.is_some() => {
                return Err(CliError::UnexpectedArgument(other.to_string()));
            }
            other => parsed.input = Some(PathBuf::from(other)),
        }
    }

    Ok(parsed)
}

/// Config file settings, with command-line flags taking precedence.
fn resolve_options(args: &Args) -> Result<Options> {
    let config = match &args.config {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                log::warn!("Config file {} not found, using defaults", path.display());
            }
            config
        }
        None => Config::load()?,
    };

    let mut options = config.map(|c| c.options()).unwrap_or_default();
    if args.breaks {
        options.blank_line_breaks = true;
    }
    log::debug!("Using options: {options:?}");
    Ok(options)
}

fn read_input(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::ReadStdin)?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&Path>, html: &str) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, html).map_err(|source| CliError::WriteOutput {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}").map_err(CliError::WriteStdout)
        }
    }
}

fn run(args: Args) -> Result<()> {
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let options = resolve_options(&args)?;
    let markdown = read_input(args.input.as_deref())?;
    log::info!("Converting {} bytes of markdown", markdown.len());

    let html = convert_to_html_string_with(&markdown, &options);
    write_output(args.output.as_deref(), &html)?;
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let result = parse_args(env::args().skip(1))
        .map_err(anyhow::Error::from)
        .and_then(run);

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        if e.downcast_ref::<CliError>().is_some_and(|e| {
            matches!(
                e,
                CliError::MissingValue(_)
                    | CliError::UnknownOption(_)
                    | CliError::UnexpectedArgument(_)
            )
        }) {
            eprintln!("{USAGE}");
        }
        process::exit(1);
    }
}
