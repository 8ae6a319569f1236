//! Plagium CLI - Submit source files to the plagium core
//!
//! # Commands
//!
//! ```bash
//! plagium process ./student-a ./student-b      # Compare every .py file
//! plagium process ./src --ext .py --format csv # Machine readable report
//! plagium process ./src --only a.py --only b.py # Compare a chosen subset
//! plagium process a.py b.py                    # Compare explicit files
//! plagium files ./src                          # List files that would be sent
//! plagium config                               # Show effective configuration
//! plagium version                              # Show client version
//! ```

use clap::{Parser, Subcommand};
use plagium::{
    collect_files, collect_selected, render, CliResult, Config, OutputFormat, PlagiumClient,
    SourceFile, DEFAULT_EXTENSION,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "plagium")]
#[command(about = "Detect plagiarism between source files using the plagium core", long_about = None)]
struct Cli {
    /// Plagium core base URL (overrides PLAGIUM_URL / CORE_HOST + CORE_PORT)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (overrides PLAGIUM_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the matching files found in the given paths
    Process {
        /// Directories to scan and/or individual files to send
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Only submit these file names from the candidates (repeatable)
        #[arg(long, value_name = "NAME")]
        only: Vec<String>,

        /// Accepted file extension (repeatable)
        #[arg(short, long = "ext", default_value = DEFAULT_EXTENSION)]
        extensions: Vec<String>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List the files without contacting the core
        #[arg(long)]
        dry_run: bool,
    },

    /// List the files that would be submitted
    Files {
        /// Directories to scan and/or individual files
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Accepted file extension (repeatable)
        #[arg(short, long = "ext", default_value = DEFAULT_EXTENSION)]
        extensions: Vec<String>,
    },

    /// Show the effective configuration
    Config,

    /// Show the client version
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            paths,
            only,
            extensions,
            format,
            output,
            dry_run,
        } => match load_config(cli.url.as_deref(), cli.timeout) {
            Ok(config) => {
                cmd_process(config, &paths, &only, &extensions, format, output.as_deref(), dry_run).await
            }
            Err(e) => Err(e),
        },

        Commands::Files { paths, extensions } => cmd_files(&paths, &extensions),

        Commands::Config => {
            load_config(cli.url.as_deref(), cli.timeout).and_then(|config| cmd_config(&config))
        }

        Commands::Version => cmd_version(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(url: Option<&str>, timeout: Option<u64>) -> CliResult<Config> {
    Ok(Config::from_env()?.with_overrides(url, timeout)?)
}

async fn cmd_process(
    config: Config,
    paths: &[PathBuf],
    only: &[String],
    extensions: &[String],
    format: OutputFormat,
    output: Option<&Path>,
    dry_run: bool,
) -> CliResult<()> {
    let files = collect_selected(paths, extensions, only)?;
    eprintln!("📂 Selected {} files", files.len());
    print_files(&files);

    if dry_run {
        eprintln!("\n🔍 Dry run, nothing submitted");
        return Ok(());
    }

    let client = PlagiumClient::new(config)?;
    eprintln!("\n📤 Submitting to {}", client.config().process_url());

    let response = client.process(&files).await?;
    eprintln!("✅ Compared {} pairs", response.report.len());
    if let Some(max) = response.max_similarity() {
        eprintln!("   Highest similarity: {:.2}%", max);
    }

    let rendered = render(&response, format)?;
    write_output(&rendered, output)?;

    Ok(())
}

fn cmd_files(paths: &[PathBuf], extensions: &[String]) -> CliResult<()> {
    let files = collect_files(paths, extensions)?;
    if files.is_empty() {
        eprintln!("📋 No matching files found.");
        return Ok(());
    }

    eprintln!("📋 Matching files ({}):\n", files.len());
    for file in &files {
        println!("{}", file.path.display());
    }
    Ok(())
}

fn cmd_config(config: &Config) -> CliResult<()> {
    println!("Core URL:  {}", config.base_url);
    println!("Endpoint:  {}", config.process_url());
    println!("Timeout:   {}s", config.timeout.as_secs());
    Ok(())
}

fn cmd_version() -> CliResult<()> {
    println!("Plagium Detector CLI v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn print_files(files: &[SourceFile]) {
    for (i, file) in files.iter().enumerate() {
        eprintln!("   {}. {}", i + 1, file.path.display());
    }
}

fn write_output(content: &str, path: Option<&Path>) -> CliResult<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
