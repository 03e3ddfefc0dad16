use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hull2::sample::{draw_shape, ReplayToken, Shape};
use hull2::Algorithm;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod report;

#[derive(Parser)]
#[command(name = "hull2")]
#[command(about = "Planar convex hulls: compute, compare, generate inputs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one hull; writes `x y` lines to --out or stdout
    Hull {
        #[arg(long, default_value_t = Algorithm::Graham)]
        algo: Algorithm,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Shuffle seed for mbc (fresh entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run all algorithms and write <out>/<label>/{graham,quickhull,mbc}.txt + summary.json
    Compare {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "output")]
        out: PathBuf,
        /// Defaults to the input file stem
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write a reproducible point set in the input format
    Generate {
        #[arg(long)]
        shape: Shape,
        #[arg(long)]
        size: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            algo,
            input,
            out,
            seed,
        } => hull(algo, &input, out.as_deref(), seed),
        Action::Compare {
            input,
            out,
            label,
            seed,
        } => compare(&input, &out, label, seed),
        Action::Generate {
            shape,
            size,
            seed,
            index,
            out,
        } => generate(shape, size, ReplayToken { seed, index }, &out),
    }
}

fn hull(algo: Algorithm, input: &Path, out: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let points = io::read_points(input)?;
    tracing::info!(algo = algo.name(), input = %input.display(), n = points.len(), "hull");
    let (hull, run) = report::run_one(algo, &points, seed);
    tracing::info!(vertices = run.vertices, valid = run.valid, elapsed_us = run.elapsed_us, "done");
    match out {
        Some(path) => io::write_hull(path, &hull),
        None => {
            print!("{}", io::format_hull(&hull));
            Ok(())
        }
    }
}

fn compare(input: &Path, out: &Path, label: Option<String>, seed: Option<u64>) -> Result<()> {
    let label = match label {
        Some(l) => l,
        None => input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .with_context(|| format!("cannot derive a label from {}", input.display()))?,
    };
    let points = io::read_points(input)?;
    tracing::info!(input = %input.display(), label, n = points.len(), "compare");
    let (summary_path, summary) =
        report::write_comparison(out, &label, &input.to_string_lossy(), &points, seed)?;
    if !summary.agree_vertex_set {
        tracing::warn!(label, "algorithms disagree on the hull vertices");
    }
    tracing::info!(
        summary = %summary_path.display(),
        agree = summary.agree_sequence,
        "written"
    );
    Ok(())
}

fn generate(shape: Shape, size: usize, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(shape = shape.name(), size, seed = tok.seed, index = tok.index, "generate");
    let points = draw_shape(shape, size, tok);
    io::write_points(out, &points)
}
