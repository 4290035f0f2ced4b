//! rdfvis CLI — render an RDF graph file as an interactive HTML network

use anyhow::Context;
use clap::Parser;
use rdfvis::config::Config;
use rdfvis::graph::{apply_label_overrides, propertize, DisplayGraph};
use rdfvis::label::{LabelContext, PrefixTable};
use rdfvis::rdf::GraphDocument;
use rdfvis::render::{write_artifact, RenderSettings};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "rdfvis", version, about = "Render an RDF graph as an interactive HTML network")]
struct Cli {
    /// Path to the source graph file (.ttl, .nt, .rdf/.xml/.owl)
    graph_file: PathBuf,

    /// Optional YAML configuration file
    config_file: Option<PathBuf>,

    /// Output HTML file
    #[arg(long, default_value = "graph.html")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config_file.as_deref())
        .with_context(|| format!("loading configuration {:?}", cli.config_file))?;

    let doc = GraphDocument::load(&cli.graph_file)
        .with_context(|| format!("reading graph file {}", cli.graph_file.display()))?;

    // Configured prefixes first; document-declared bindings fill the gaps.
    let mut prefixes = PrefixTable::new();
    for (iri, name) in &config.extra_prefixes {
        prefixes.insert(iri.clone(), name.clone());
    }
    for (name, iri) in &doc.namespaces {
        prefixes.declare(iri.clone(), name.clone());
    }
    info!(prefixes = prefixes.len(), triples = doc.triples.len(), "pipeline input ready");

    let mut ctx = LabelContext::new();
    let mut graph = DisplayGraph::from_triples(&doc.triples, &config.filter, &prefixes, &mut ctx);

    propertize(&mut graph, &config.propertize);
    apply_label_overrides(&mut graph, &config.label_overrides);

    let settings = RenderSettings::from_config(&config)?;
    write_artifact(&cli.output, &graph, &settings)
        .with_context(|| format!("writing artifact {}", cli.output.display()))?;

    // The only way to recover redacted identifiers from the visual output
    for (index, hash) in ctx.hashes().iter().enumerate() {
        println!("HASH ({}): {}", index, hash);
    }

    Ok(())
}
