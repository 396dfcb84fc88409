use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "generalized-optional workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the optional benchmarks and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save and report on
        #[arg(long, default_value = "current")]
        baseline: String,
    },
}

const BENCH: &str = "optional_benchmark";

/// Column the other variants are compared against.
const REFERENCE_VARIANT: &str = "std_option";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report(&baseline)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()
        .context("failed to spawn cargo build")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Running {BENCH} (baseline: {baseline})");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    cmd.arg("--save-baseline").arg(baseline);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run {BENCH}"))?;
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

/// Ops/s per group, per variant.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report(baseline: &str) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, baseline, &mut results)?;

    let variants: BTreeSet<&str> = results
        .values()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# Optional Benchmark Report ({baseline})")?;
    writeln!(file)?;

    write!(file, "| Group |")?;
    for variant in &variants {
        write!(file, " {variant} (Ops/s) | vs {REFERENCE_VARIANT} |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in &variants {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for (group, row) in &results {
        write!(file, "| {group} |")?;
        let reference = row.get(REFERENCE_VARIANT).copied().unwrap_or(0.0);

        for variant in &variants {
            match row.get(*variant) {
                Some(ops) => {
                    let rel = if reference > 0.0 { ops / reference } else { 0.0 };
                    write!(file, " {} | **{rel:.2}x** |", format_ops(*ops))?;
                }
                None => write!(file, " N/A | - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
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

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|s| s.to_str())
}

/// Walks `target/criterion/<group>/<variant>/<baseline>/{estimates,benchmark}.json`.
fn collect_results(dir: &Path, baseline: &str, results: &mut Results) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, baseline, results)?;
            continue;
        }
        if file_name(&path) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        let Some(variant_dir) = baseline_dir.parent() else { continue };
        let Some(group_dir) = variant_dir.parent() else { continue };
        let (Some(run), Some(variant), Some(group)) = (
            file_name(baseline_dir),
            file_name(variant_dir),
            file_name(group_dir),
        ) else {
            continue;
        };

        if run != baseline || variant == "report" || group == "report" {
            continue;
        }

        let elements = read_elements(&baseline_dir.join("benchmark.json"));
        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("malformed {}", path.display()))?;

        let time_ns = estimates.mean.point_estimate;
        if time_ns > 0.0 {
            results
                .entry(group.to_owned())
                .or_default()
                .insert(variant.to_owned(), elements * 1e9 / time_ns);
        }
    }

    Ok(())
}

/// Elements per iteration declared through `Throughput::Elements`, or 1.
fn read_elements(bench_json: &Path) -> f64 {
    fs::read_to_string(bench_json)
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
        .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64())
        .unwrap_or(1.0)
}
