use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "irm-cli",
    about = "Collect, patch, and prune integrity-keyed resources in JSON documents",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Extract every integrity-keyed object into a flat table
    Collect(CollectArgs),
    /// Merge resource table entries over matching objects in a document
    Patch(PatchArgs),
    /// Remove every object carrying the given integrity value
    Prune(PruneArgs),
}

#[derive(ClapArgs, Debug)]
struct CollectArgs {
    /// JSON document to scan
    path: PathBuf,
    /// Optional output path for the table; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct PatchArgs {
    /// JSON document to patch
    path: PathBuf,
    /// Resource table file (JSON object keyed by integrity)
    #[arg(long)]
    table: PathBuf,
    /// Optional output path; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct PruneArgs {
    /// JSON document to prune
    path: PathBuf,
    /// Integrity value whose objects are removed
    #[arg(long)]
    integrity: String,
    /// Optional output path; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Collect(a) => cmd_collect(a),
        Cmd::Patch(a) => cmd_patch(a),
        Cmd::Prune(a) => cmd_prune(a),
    }
}

fn load_document(path: &PathBuf) -> serde_json::Value {
    irm_core::load_json_file(path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    })
}

fn emit(out: Option<PathBuf>, value: &serde_json::Value) {
    if let Some(out) = out {
        irm_core::write_json_file(&out, value).unwrap_or_else(|e| {
            eprintln!("error writing: {}", e);
            std::process::exit(5);
        });
    } else {
        println!("{}", serde_json::to_string_pretty(value).unwrap());
    }
}

fn cmd_collect(args: CollectArgs) {
    let doc = load_document(&args.path);
    let map = irm_core::collect_resource_map(&doc);
    let table = serde_json::to_value(&map).unwrap();
    emit(args.out, &table);
}

fn cmd_patch(args: PatchArgs) {
    let doc = load_document(&args.path);
    let map = irm_core::load_resource_map_file(&args.table).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(3);
    });
    let patched = irm_core::patch_resources(&doc, &map);
    emit(args.out, &patched);
}

fn cmd_prune(args: PruneArgs) {
    let doc = load_document(&args.path);
    match irm_core::prune_resources(&doc, &args.integrity) {
        Some(pruned) => emit(args.out, &pruned),
        None => {
            eprintln!("document root matched {} and was pruned away", args.integrity);
            std::process::exit(4);
        }
    }
}
