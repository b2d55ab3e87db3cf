use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "b262144", version, about = "Base-262144 encoder/decoder")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode raw bytes as Base-262144 text
    Enc {
        /// Input file, `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Output file, `-` for stdout
        #[arg(default_value = "-")]
        output: PathBuf,
    },
    /// Decode Base-262144 text back to raw bytes
    Dec {
        /// Input file, `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Output file, `-` for stdout
        #[arg(default_value = "-")]
        output: PathBuf,
    },
}

fn setup_logging(verbose: u8) {
    let directives = match verbose {
        0 => "warn",
        1 => "base262144=debug,b262144=debug",
        _ => "trace",
    };
    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)))
        .with(main_layer)
        .init()
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if is_stdio(path) {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path)
    }
}

fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()
    } else {
        fs::write(path, data)
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Enc { input, output } => {
            let data = read_input(&input)?;
            let text = base262144::encode(&data);
            tracing::debug!(
                input = %input.display(),
                bytes = data.len(),
                symbols = base262144::encoded_len(data.len()),
                "encoded"
            );
            write_output(&output, text.as_bytes())?;
        }
        Commands::Dec { input, output } => {
            let raw = read_input(&input)?;
            let data = base262144::decode_utf8(&raw)?;
            tracing::debug!(
                input = %input.display(),
                text_bytes = raw.len(),
                bytes = data.len(),
                "decoded"
            );
            write_output(&output, &data)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("b262144: {e}");
            ExitCode::FAILURE
        }
    }
}
