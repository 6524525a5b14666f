//! cooccurrence - build a cooccurrence network from an annotated document
//!
//! # Usage
//!
//! ```bash
//! # Word-window network with the default policy, written as GEXF
//! cooccurrence document.json -o network.gexf
//!
//! # Actors connected per paragraph, settings from a config file
//! cooccurrence --config network.toml --nodes actor --method textspan document.json
//!
//! # Custom windows, printed as text
//! cooccurrence --window 3 --window 7 --format text document.ron
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use layered_networks::{ConfigError, CooccurrenceBuilder, CooccurrenceConfig, NetworkBuilder};
use layered_networks_io::{
    export, load_document, load_document_as, DocumentFormat, ExportError, ExportFormat, LoadError,
};
use thiserror::Error;
use tracing::{info, Level};

/// Build a weighted cooccurrence network from an annotated document.
#[derive(Debug, Parser)]
#[command(name = "cooccurrence", version, about)]
struct Cli {
    /// Annotated document (.json or .ron)
    input: PathBuf,

    /// TOML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Admission policy: stopwords, full, nonclosed, lexical, semantic,
    /// concept, noun, entity, actor
    #[arg(long)]
    nodes: Option<String>,

    /// Token attribute used as node label: text, lemma, semantic_unit, id
    #[arg(long)]
    label: Option<String>,

    /// Construction method: window, sentence, textspan
    #[arg(short, long)]
    method: Option<String>,

    /// Span type for the textspan method
    #[arg(long)]
    spantype: Option<String>,

    /// Window width; repeat for several passes, processed in order
    #[arg(short, long = "window")]
    windows: Vec<usize>,

    /// Stoplist name
    #[arg(long)]
    stopwords: Option<String>,

    /// Directory containing stoplists
    #[arg(long)]
    stopwords_dir: Option<PathBuf>,

    /// Count each token pair at most once
    #[arg(long)]
    unique_pairs: bool,

    /// Input format, overriding the file extension: json, ron
    #[arg(long)]
    input_format: Option<String>,

    /// Output format: gexf, json, text
    #[arg(short, long, default_value = "gexf")]
    format: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Cli {
    /// Config file values with command-line overrides applied.
    fn config(&self) -> Result<CooccurrenceConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CooccurrenceConfig::load(path)?,
            None => CooccurrenceConfig::default(),
        };
        if let Some(nodes) = &self.nodes {
            config = config.with_nodes(nodes);
        }
        if let Some(label) = &self.label {
            config = config.with_label(label);
        }
        if let Some(method) = &self.method {
            config = config.with_method(method);
        }
        if let Some(spantype) = &self.spantype {
            config = config.with_span_type(spantype);
        }
        if !self.windows.is_empty() {
            config = config.with_window(self.windows.clone());
        }
        if let Some(stopwords) = &self.stopwords {
            config = config.with_stopwords(stopwords);
        }
        if let Some(dir) = &self.stopwords_dir {
            config = config.with_stopwords_dir(dir.clone());
        }
        if self.unique_pairs {
            config = config.with_unique_pairs(true);
        }
        Ok(config)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    // Everything that can be rejected is checked before the document is read.
    let builder = CooccurrenceBuilder::from_config(&cli.config()?)?;
    let format: ExportFormat = cli.format.parse()?;

    let document = match &cli.input_format {
        Some(name) => load_document_as(&cli.input, name.parse::<DocumentFormat>()?)?,
        None => load_document(&cli.input)?,
    };
    info!(
        "loaded {} tokens from {}",
        document.len(),
        cli.input.display()
    );

    let graph = builder.build(&document);
    let rendered = export(&graph, format)?;

    match &cli.output {
        Some(path) => fs::write(path, rendered).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?,
        None => print!("{}", rendered),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> String {
        format!(
            "{}/../layered-networks-io/fixtures/lovelace.json",
            env!("CARGO_MANIFEST_DIR")
        )
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.toml");
        fs::write(&path, "nodes = \"noun\"\nmethod = \"textspan\"\nwindow = [3]\n").unwrap();

        let cli = Cli::try_parse_from([
            "cooccurrence",
            "doc.json",
            "--config",
            path.to_str().unwrap(),
            "--nodes",
            "actor",
            "-w",
            "2",
            "-w",
            "4",
        ])
        .unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.nodes, "actor");
        assert_eq!(config.method, "textspan");
        assert_eq!(config.window, vec![2, 4]);
    }

    #[test]
    fn writes_requested_format() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("network.txt");
        let cli = Cli::try_parse_from([
            "cooccurrence",
            fixture().as_str(),
            "--nodes",
            "actor",
            "--method",
            "textspan",
            "--format",
            "text",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        run(&cli).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("2 nodes, 1 edges\n"));
    }

    #[test]
    fn invalid_policy_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("network.gexf");
        let cli = Cli::try_parse_from([
            "cooccurrence",
            fixture().as_str(),
            "--nodes",
            "everything",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(&cli).unwrap_err();
        assert_eq!(err.to_string(), "node policy \"everything\" is not supported");
        assert!(!output.exists());
    }
}
