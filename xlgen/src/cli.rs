//! The `xlgen` command line.
use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use xlgen_codegen::{
    Generator, GeneratorConfig, generate_from_file, is_up_to_date, write_if_changed,
};
use xlgen_schema::{SchemaIr, parse_schema};

/// Generate typed Rust declarations from an IDL XML schema
#[derive(Parser, Debug)]
#[command(name = "xlgen", version)]
pub struct Cli {
    /// more log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// generate Rust declarations
    Generate(GenerateArgs),
    /// validate a schema without emitting anything
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// IDL XML schema
    pub schema: PathBuf,

    /// output .rs file (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// source recorded in the provenance header (defaults to the schema name)
    #[arg(long)]
    pub source_name: Option<String>,

    /// extra derive added to every generated type (repeatable)
    #[arg(long = "derive", value_name = "PATH")]
    pub derives: Vec<String>,

    /// emit type FROM as TO (repeatable)
    #[arg(long = "rename", value_name = "FROM=TO", value_parser = parse_rename)]
    pub renames: Vec<(String, String)>,

    /// skip the enum label helpers
    #[arg(long, default_value_t = false)]
    pub no_enum_helpers: bool,

    /// fail if the output file is out of date instead of writing it
    #[arg(long, requires = "out", default_value_t = false)]
    pub check: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// IDL XML schema
    pub schema: PathBuf,
}

impl GenerateArgs {
    /// Maps the flags onto a generator configuration.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new().enum_helpers(!self.no_enum_helpers);
        if let Some(name) = &self.source_name {
            config = config.source_name(name);
        }
        for path in &self.derives {
            config = config.derive(path);
        }
        for (from, to) in &self.renames {
            config = config.rename_type(from, to);
        }
        config
    }
}

fn parse_rename(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(format!("expected FROM=TO, got '{}'", s)),
    }
}

/// Runs a parsed command line.
///
/// # Errors
/// Returns the generation or IO error with the file it concerns as context.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Generate(args) => {
            if generate(args)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Check(args) => {
            check(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Returns false when `--check` finds the output out of date.
fn generate(args: &GenerateArgs) -> anyhow::Result<bool> {
    let config = args.config();
    let code = generate_from_file(&args.schema, &config)
        .with_context(|| format!("failed to generate from {}", args.schema.display()))?;

    let Some(out) = &args.out else {
        std::io::stdout()
            .lock()
            .write_all(code.as_bytes())
            .context("failed to write to stdout")?;
        return Ok(true);
    };

    if args.check {
        let fresh = is_up_to_date(out, &code)
            .with_context(|| format!("failed to read {}", out.display()))?;
        if !fresh {
            eprintln!("{} is out of date", out.display());
            return Ok(false);
        }
        tracing::info!("{} is up to date", out.display());
        return Ok(true);
    }

    write_if_changed(out, &code).with_context(|| format!("failed to write {}", out.display()))?;
    Ok(true)
}

fn check(args: &CheckArgs) -> anyhow::Result<()> {
    let path = args.schema.display();
    let xml = std::fs::read_to_string(&args.schema)
        .with_context(|| format!("failed to read {}", path))?;
    let schema = parse_schema(&xml).with_context(|| format!("failed to parse {}", path))?;
    let ir = SchemaIr::from_schema(&schema).with_context(|| format!("invalid schema {}", path))?;

    // Naming collisions only surface while emitting.
    Generator::new(&ir, &GeneratorConfig::new())
        .generate()
        .with_context(|| format!("schema {} cannot be generated", path))?;

    println!("{}: {} types ok", path, ir.items.len());
    Ok(())
}
