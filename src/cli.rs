//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions: read the grammar text, parse it into the
//! string graph, and either generate the builder artifact or dump the graph.

use std::{fs, path::PathBuf, process};

use clap::{Args, Parser, Subcommand};
use miette::{NamedSource, Report};

use crate::{
    generator::BuilderCodegen,
    graph::{GraphVisitor, NodeInfo, StringGraph},
    parser::{GrammarParser, DEFAULT_DELIMITER, DEFAULT_MARK_LEFT, DEFAULT_MARK_RIGHT},
    ChainError,
};

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "stringchain",
    version,
    about = "Grammartize sample delimited string chains into a type-guided builder."
)]
pub struct ChainArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// Grammar format options shared by all subcommands.
#[derive(Debug, Args)]
pub struct GrammarOpts {
    /// Token delimiter used in the grammar text.
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Left variable mark.
    #[arg(long, default_value = DEFAULT_MARK_LEFT)]
    pub mark_left: String,

    /// Right variable mark.
    #[arg(long, default_value = DEFAULT_MARK_RIGHT)]
    pub mark_right: String,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Parse a grammar file and write the generated builder artifact.
    Generate {
        /// The path to the grammar file of sample chains.
        #[arg(required = true)]
        file: PathBuf,

        /// Artifact name; also names the generated root builder type.
        #[arg(long, default_value = "chains")]
        name: String,

        /// Directory the artifact is written into.
        #[arg(long, default_value = ".")]
        outdir: PathBuf,

        #[command(flatten)]
        grammar: GrammarOpts,
    },
    /// Parse a grammar file and dump roots plus BFS-ordered adjacency.
    Graph {
        /// The path to the grammar file of sample chains.
        #[arg(required = true)]
        file: PathBuf,

        /// Dump the graph as JSON instead of plain text.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        grammar: GrammarOpts,
    },
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = ChainArgs::parse();

    match args.command {
        ArgsCommand::Generate {
            file,
            name,
            outdir,
            grammar,
        } => {
            let graph = parse_file_or_exit(&file, &grammar);

            let mut codegen =
                BuilderCodegen::with_marks(&name, &grammar.mark_left, &grammar.mark_right);
            graph.bfs_visit(&mut codegen);
            let artifact = codegen.finish();

            let target = outdir.join(format!("{name}.rs"));
            if let Err(e) = fs::write(&target, artifact) {
                print_error(ChainError::from(e));
                process::exit(1);
            }
            println!("wrote {}", target.display());
        }

        ArgsCommand::Graph { file, json, grammar } => {
            let graph = parse_file_or_exit(&file, &grammar);
            if json {
                print_graph_json(&graph);
            } else {
                print_graph(&graph);
            }
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn parse_file_or_exit(file: &PathBuf, grammar: &GrammarOpts) -> StringGraph {
    let source = fs::read_to_string(file).unwrap_or_else(|e| {
        print_error(ChainError::from(e));
        process::exit(1);
    });

    let parser = GrammarParser::with_config(
        grammar.delimiter.clone(),
        grammar.mark_left.clone(),
        grammar.mark_right.clone(),
    )
    .unwrap_or_else(|e| {
        print_error(e);
        process::exit(1);
    });

    parser.parse(&source).unwrap_or_else(|e| {
        // Attach the grammar text so miette can render labeled spans.
        let report = Report::new(e)
            .with_source_code(NamedSource::new(file.display().to_string(), source.clone()));
        eprintln!("{report:?}");
        process::exit(1);
    })
}

fn print_error(e: ChainError) {
    let report = Report::new(e);
    eprintln!("{report:?}");
}

// ============================================================================
// OUTPUT FUNCTIONS - Simple, direct output
// ============================================================================

/// Text dump in visitation order, one `name -> {children}` line per node.
struct GraphPrinter;

impl GraphVisitor for GraphPrinter {
    fn visit_roots(&mut self, roots: &std::collections::BTreeSet<String>) {
        let names: Vec<&str> = roots.iter().map(String::as_str).collect();
        println!("roots: {{{}}}", names.join(", "));
    }

    fn visit_node(&mut self, name: &str, info: &NodeInfo) {
        let children: Vec<&str> = info.adjacent.iter().map(String::as_str).collect();
        let variable = if info.is_variable { " (variable)" } else { "" };
        println!("{name} -> {{{}}}{variable}", children.join(", "));
    }
}

fn print_graph(graph: &StringGraph) {
    graph.bfs_visit(&mut GraphPrinter);
}

fn print_graph_json(graph: &StringGraph) {
    match serde_json::to_string_pretty(graph) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error serializing graph: {e}");
            process::exit(1);
        }
    }
}
