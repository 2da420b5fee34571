mod cli;
mod presets;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use raiz::output::OutputFormat;
use raiz::FormKind;

#[derive(Parser)]
#[command(
    name = "raiz",
    about = "CPF validation and registration form checks",
    version
)]
enum Cli {
    /// Validate CPFs given as arguments, or one per line on stdin
    Check(CheckArgs),
    /// Print a CPF with the ddd.ddd.ddd-dd mask
    Format(FormatArgs),
    /// Generate random valid CPFs for test fixtures
    Generate(GenerateArgs),
    /// Validate a JSON form submission
    Form(FormArgs),
    /// Write a default raiz.toml
    Init(InitArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
struct CheckArgs {
    #[arg(help = "CPF candidates (reads stdin when empty)")]
    cpfs: Vec<String>,

    #[arg(
        long,
        short,
        default_value = "terminal",
        help = "Output format: terminal, json"
    )]
    format: OutputFormat,

    #[arg(long, help = "Only require 11 digits; skip check-digit arithmetic")]
    relaxed: bool,

    #[arg(long, help = "Configuration profile to use")]
    profile: Option<String>,
}

#[derive(Parser)]
struct FormatArgs {
    #[arg(help = "CPF to format")]
    cpf: String,
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(long, short = 'n', default_value_t = 1, help = "How many CPFs to generate")]
    count: usize,

    #[arg(long, help = "Print with the ddd.ddd.ddd-dd mask")]
    masked: bool,
}

#[derive(Parser)]
struct FormArgs {
    #[arg(help = "Form kind: solo-mother, professional, login")]
    kind: FormKind,

    #[arg(help = "JSON file with the submission (reads stdin when omitted)")]
    file: Option<PathBuf>,

    #[arg(
        long,
        short,
        default_value = "terminal",
        help = "Output format: terminal, json"
    )]
    format: OutputFormat,

    #[arg(long, help = "Configuration profile to use")]
    profile: Option<String>,
}

#[derive(Parser)]
struct InitArgs {
    #[arg(long, help = "Overwrite existing raiz.toml if it already exists")]
    force: bool,
}

#[derive(Parser)]
struct CompletionsArgs {
    #[arg(help = "Target shell: bash, zsh, fish, elvish, powershell")]
    shell: Shell,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RAIZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    match Cli::parse() {
        Cli::Check(args) => cli::check::run_check(
            &args.cpfs,
            args.format,
            args.relaxed,
            args.profile.as_deref(),
        ),
        Cli::Format(args) => cli::generate::run_format(&args.cpf),
        Cli::Generate(args) => cli::generate::run_generate(args.count, args.masked),
        Cli::Form(args) => cli::form::run_form(
            args.kind,
            args.file.as_deref(),
            args.format,
            args.profile.as_deref(),
        ),
        Cli::Init(args) => cli::init::run_init(args.force),
        Cli::Completions(args) => {
            generate(
                args.shell,
                &mut Cli::command(),
                "raiz",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
