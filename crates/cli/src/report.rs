//! Comparison sink: run every algorithm on one input, write
//! `<out>/<label>/{graham,quickhull,mbc}.txt` and a `summary.json` next to them.

use anyhow::{Context, Result};
use hull2::validate::{validate_hull, ValidateCfg};
use hull2::{Algorithm, Hull, Point};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use crate::io::write_hull;

#[derive(Debug, Serialize)]
pub struct AlgoRun {
    pub algo: String,
    pub vertices: usize,
    pub valid: bool,
    pub violation: Option<String>,
    pub elapsed_us: u64,
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub code_rev: String,
    pub label: String,
    pub input: String,
    pub points: usize,
    pub seed: Option<u64>,
    pub runs: Vec<AlgoRun>,
    /// All algorithms emitted the identical vertex sequence.
    pub agree_sequence: bool,
    /// All algorithms emitted the same vertices, in any order.
    pub agree_vertex_set: bool,
}

/// Run `algo` once, timing it and validating the result.
pub fn run_one(algo: Algorithm, points: &[Point], seed: Option<u64>) -> (Hull, AlgoRun) {
    let start = Instant::now();
    let hull = algo.compute(points, seed);
    let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    let verdict = validate_hull(&hull, points, ValidateCfg::default());
    if let Err(ref v) = verdict {
        tracing::warn!(algo = algo.name(), violation = %v, "invalid hull");
    }
    let run = AlgoRun {
        algo: algo.name().to_string(),
        vertices: hull.len(),
        valid: verdict.is_ok(),
        violation: verdict.err().map(|v| v.to_string()),
        elapsed_us,
        output: format!("{}.txt", algo.name()),
    };
    (hull, run)
}

pub fn write_comparison(
    out: &Path,
    label: &str,
    input: &str,
    points: &[Point],
    seed: Option<u64>,
) -> Result<(PathBuf, Summary)> {
    let dir = out.join(label);
    let mut hulls = Vec::with_capacity(Algorithm::ALL.len());
    let mut runs = Vec::with_capacity(Algorithm::ALL.len());
    for algo in Algorithm::ALL {
        let (hull, run) = run_one(algo, points, seed);
        write_hull(&dir.join(&run.output), &hull)?;
        tracing::info!(
            algo = algo.name(),
            vertices = run.vertices,
            valid = run.valid,
            elapsed_us = run.elapsed_us,
            "compare"
        );
        hulls.push(hull);
        runs.push(run);
    }
    let agree_sequence = hulls.windows(2).all(|w| w[0] == w[1]);
    let agree_vertex_set = hulls.windows(2).all(|w| w[0].same_vertex_set(&w[1]));
    let summary = Summary {
        code_rev: current_git_rev(),
        label: label.to_string(),
        input: input.to_string(),
        points: points.len(),
        seed,
        runs,
        agree_sequence,
        agree_vertex_set,
    };
    let path = dir.join("summary.json");
    fs::write(&path, serde_json::to_vec_pretty(&summary)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok((path, summary))
}

/// Build-time `GIT_COMMIT`, else runtime `GIT_COMMIT`, else `git rev-parse HEAD`,
/// else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.5, 0.5),
        ]
    }

    #[test]
    fn comparison_writes_three_hulls_and_summary() {
        let dir = tempdir().unwrap();
        let (path, summary) =
            write_comparison(dir.path(), "square", "square.txt", &square(), Some(1)).unwrap();
        for name in ["graham.txt", "quickhull.txt", "mbc.txt"] {
            let text = fs::read_to_string(dir.path().join("square").join(name)).unwrap();
            assert_eq!(text, "0 1\n1 1\n1 0\n0 0\n", "{name}");
        }
        assert!(summary.agree_sequence && summary.agree_vertex_set);
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["points"], 5);
        assert_eq!(parsed["runs"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["runs"][2]["algo"], "mbc");
        assert_eq!(parsed["runs"][0]["vertices"], 4);
        assert_eq!(parsed["runs"][0]["valid"], true);
    }

    #[test]
    fn git_rev_is_never_empty() {
        let rev = current_git_rev();
        assert!(!rev.is_empty());
        assert_eq!(rev, rev.trim());
    }

    #[test]
    fn run_one_records_validity() {
        let (hull, run) = run_one(Algorithm::QuickHull, &square(), None);
        assert_eq!(hull.len(), 4);
        assert!(run.valid);
        assert!(run.violation.is_none());
        assert_eq!(run.output, "quickhull.txt");
    }
}
