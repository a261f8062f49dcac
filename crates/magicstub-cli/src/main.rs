#![deny(warnings)]
#![deny(clippy::all)]

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use magicstub_format::{create_file, extension_names, is_known_extension, FormatError};
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CLI: i32 = 2;
const EXIT_FORMAT: i32 = 3;
const EXIT_IO: i32 = 4;
const TOOL_NAME: &str = "magicstub";

#[derive(Parser, Debug)]
#[command(
    name = "magicstub",
    version,
    about = "Write a minimal file that passes file-type detection",
    after_help = "EXAMPLE:\n  $ magicstub --ext mp4 ./output.mp4"
)]
struct Cli {
    /// File extension to generate
    #[arg(long, value_name = "EXT", num_args = 0..=1, default_missing_value = "")]
    ext: Option<String>,
    /// Print every supported extension
    #[arg(long)]
    list: bool,
    /// Destination path [default: ./magicstub-output.<EXT>]
    output: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Format(#[from] FormatError),
    #[error("file {} already exists", .0.display())]
    OutputExists(PathBuf),
    #[error("cannot create file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_CLI,
            };
        }
    };

    if cli.list {
        for name in extension_names() {
            println!("{name}");
        }
        return EXIT_SUCCESS;
    }

    let ext = match cli.ext.as_deref() {
        Some(ext) if !ext.is_empty() => ext,
        _ => {
            show_help();
            return EXIT_SUCCESS;
        }
    };

    if !is_known_extension(ext) {
        debug!(extension = ext, "unknown extension requested");
        show_available_extensions(ext);
        return EXIT_SUCCESS;
    }

    let output = cli.output.unwrap_or_else(|| default_output(ext));

    match cmd_create(ext, &output) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            report_error(&err);
            map_exit_code(&err)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn report_error(err: &CliError) {
    error!(error = %err, "command failed");
    eprintln!("error: {err}");
}

fn map_exit_code(err: &CliError) -> i32 {
    match err {
        CliError::OutputExists(_) => EXIT_CLI,
        CliError::Format(_) => EXIT_FORMAT,
        CliError::Write { .. } | CliError::Io(_) => EXIT_IO,
    }
}

fn default_output(ext: &str) -> PathBuf {
    PathBuf::from(format!("./{TOOL_NAME}-output.{ext}"))
}

fn cmd_create(ext: &str, output: &Path) -> Result<(), CliError> {
    if output.try_exists()? {
        return Err(CliError::OutputExists(output.to_path_buf()));
    }

    let bytes = create_file(ext)?;

    info!(
        extension = ext,
        output = %output.display(),
        len = bytes.len(),
        "writing file"
    );

    write_new(output, &bytes)
}

// create_new keeps a file that appeared after the existence check intact.
fn write_new(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => CliError::OutputExists(path.to_path_buf()),
            _ => CliError::Write {
                path: path.to_path_buf(),
                source,
            },
        })?;

    let result = file.write_all(bytes).and_then(|()| file.sync_all());
    if let Err(source) = result {
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(CliError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

fn show_help() {
    let _ = Cli::command().print_help();
    println!();
}

fn show_available_extensions(ext: &str) {
    println!("Unknown extension: {ext}");
    println!();
    println!("Available extensions:");
    for name in extension_names() {
        println!("  {name}");
    }
}
