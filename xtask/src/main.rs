use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;
use twin_graph::iter::utils;
use twin_graph::{Graph, IterKind, Retreat, SnapshotIterator};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "twin-graph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a small weighted graph and walk it with every iterator variant
    Demo,
    /// Run the criterion benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "graph_benchmark";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => demo()?,
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn demo() -> Result<()> {
    let mut graph: Graph<u32> = Graph::new();
    graph.extend(1..=5);
    let cycle = [
        (1, 2, 1.5),
        (2, 3, 2.0),
        (3, 4, 1.0),
        (4, 5, 1.5),
        (5, 1, 0.5),
    ];
    for (u, v, w) in cycle {
        graph.add_edge(&u, &v, w)?;
    }
    print!("{graph}");

    let forward: Vec<_> = graph.vertices().map(|v| v.to_string()).collect();
    println!("vertices:       {}", forward.join(" "));

    let reverse: Vec<_> = graph.vertices_rev().map(|v| v.to_string()).collect();
    println!("vertices (rev): {}", reverse.join(" "));

    let edges: Vec<_> = graph.edges_read_only().map(|e| e.to_string()).collect();
    println!("edges:          {}", edges.join(", "));

    let mut walk = graph.vertices_bidirectional();
    let mut steps = Vec::new();
    while walk.has_next() {
        steps.push(walk.advance()?.to_string());
    }
    while walk.has_prev() {
        steps.push(walk.retreat()?.to_string());
    }
    println!("there and back: {}", steps.join(" "));

    let mut around_3 = graph.adjacent_vertices_with(&3, IterKind::Reverse)?;
    println!("neighbors of 3: {:?}", utils::drain(&mut around_3));

    let copy = graph.deep_copy();
    graph.remove_vertex(&3)?;
    println!(
        "after removing 3: {} vertices, {} edges (copy still has {} edges, equal: {})",
        graph.vertex_count(),
        graph.edge_count(),
        copy.edge_count(),
        graph == copy
    );

    graph.check_invariants()?;
    copy.check_invariants()?;
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    let start = Instant::now();
    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", BENCH, "--"]);

    if quick {
        cmd.args([
            "--measurement-time",
            "0.1",
            "--noplot",
            "--sample-size",
            "10",
        ]);
    }

    let status = cmd.status().context("Failed to run benchmarks")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct BenchmarkMeta {
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(f64),
    Bytes(f64),
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;
    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean | Ops/s |")?;
    writeln!(file, "|---|---|---|")?;
    for (workload, (time_ns, ops)) in &results {
        writeln!(
            file,
            "| {} | {} | {} |",
            workload,
            format_time(*time_ns),
            format_ops(*ops)
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `target/criterion`, keying each `new/estimates.json` by its workload path.
fn collect_results(dir: &Path, results: &mut BTreeMap<String, (f64, f64)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) != Some("report") {
                collect_results(&path, results);
            }
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        // Structure: .../<group>/<workload>/new/estimates.json
        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        if baseline_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let Ok(name) = workload_dir.strip_prefix("target/criterion") else {
            continue;
        };

        let Some(estimates) = read_json::<Estimates>(&path) else {
            continue;
        };
        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }

        let elements = read_json::<BenchmarkMeta>(&baseline_dir.join("benchmark.json"))
            .and_then(|meta| meta.throughput)
            .map_or(1.0, |t| match t {
                Throughput::Elements(n) | Throughput::Bytes(n) => n,
            });

        results.insert(
            name.display().to_string(),
            (time_ns, elements * 1e9 / time_ns),
        );
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Option<T> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}
