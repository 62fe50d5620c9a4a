//! RDF Index to JSON-LD CLI
//!
//! Command-line tool for serializing RDF indexes and triple lists as JSON-LD.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rdf_index_jsonld::{
    load_index, load_triples, EscapePolicy, InputSource, JsonLdSerializer, RdfSerializer,
    SerializeError, SerializerOptions,
};

#[derive(Parser)]
#[command(name = "rdf-index-jsonld")]
#[command(about = "Serialize RDF subject/predicate/object indexes as JSON-LD")]
#[command(version)]
struct Cli {
    /// Show progress logs on stderr (honours RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all logs
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serialize a JSON index: {"<s>": {"<p>": [<o>, ...]}}
    Index(SerializeArgs),
    /// Serialize a JSON triple list: [{"s": .., "p": .., "o": .., "o_type": ..}]
    Triples(SerializeArgs),
    /// Print the media type of the output
    ContentType,
}

#[derive(Args)]
struct SerializeArgs {
    /// Path to a JSON file, URL, or "-" for stdin
    source: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Escape subject/predicate identifiers, datatypes and language tags
    #[arg(long)]
    strict_escaping: bool,

    /// Write non-ASCII characters as \uXXXX escapes
    #[arg(long)]
    ascii: bool,
}

impl SerializeArgs {
    fn serializer(&self) -> JsonLdSerializer {
        JsonLdSerializer::new(SerializerOptions {
            escape_policy: if self.strict_escaping {
                EscapePolicy::Strict
            } else {
                EscapePolicy::Compatible
            },
            ascii_only: self.ascii,
        })
    }
}

fn init_tracing(cli: &Cli) {
    // Off unless --verbose; --quiet always wins.
    let filter = if cli.verbose && !cli.quiet {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Write output to file or stdout
fn write_output(content: &str, output: Option<&PathBuf>) -> Result<(), SerializeError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("Wrote JSON-LD to {}", path.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

fn run_index(args: SerializeArgs) -> Result<(), SerializeError> {
    let source = InputSource::parse(&args.source)?;
    let index = load_index(&source)?;

    eprintln!(
        "Serializing {} subjects, {} triples",
        index.len(),
        index.triple_count()
    );

    let output = args.serializer().serialize_index(&index);
    write_output(&output, args.output.as_ref())
}

fn run_triples(args: SerializeArgs) -> Result<(), SerializeError> {
    let source = InputSource::parse(&args.source)?;
    let triples = load_triples(&source)?;

    eprintln!("Serializing {} triples", triples.len());

    let output = args.serializer().serialize_triples(&triples);
    write_output(&output, args.output.as_ref())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match cli.command {
        Commands::Index(args) => run_index(args),
        Commands::Triples(args) => run_triples(args),
        Commands::ContentType => {
            println!("{}", JsonLdSerializer::default().content_type());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
