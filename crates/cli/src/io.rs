//! Point files: `count` followed by `count` whitespace-separated `x y` pairs.
//! Hull files: one `x y` pair per line, no count.

use anyhow::{bail, Context, Result};
use hull2::{Hull, Point};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let Some(head) = tokens.next() else {
        bail!("missing point count");
    };
    let count: usize = head
        .parse()
        .with_context(|| format!("point count '{head}' is not a non-negative integer"))?;
    let mut points = Vec::with_capacity(count);
    for index in 0..count {
        let (Some(xs), Some(ys)) = (tokens.next(), tokens.next()) else {
            bail!("expected {count} points, found only {index}");
        };
        let x: f32 = xs
            .parse()
            .with_context(|| format!("point {index}: bad x coordinate '{xs}'"))?;
        let y: f32 = ys
            .parse()
            .with_context(|| format!("point {index}: bad y coordinate '{ys}'"))?;
        if !x.is_finite() || !y.is_finite() {
            bail!("point {index}: coordinates must be finite, got ({xs}, {ys})");
        }
        points.push(Point::new(x, y));
    }
    if tokens.next().is_some() {
        tracing::warn!(count, "trailing data after declared points ignored");
    }
    Ok(points)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

pub fn format_hull(hull: &Hull) -> String {
    let mut s = String::new();
    for p in hull {
        let _ = writeln!(s, "{} {}", p.x, p.y);
    }
    s
}

pub fn format_points(points: &[Point]) -> String {
    let mut s = format!("{}\n", points.len());
    for p in points {
        let _ = writeln!(s, "{} {}", p.x, p.y);
    }
    s
}

pub fn write_hull(path: &Path, hull: &Hull) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, format_hull(hull)).with_context(|| format!("writing {}", path.display()))
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, format_points(points)).with_context(|| format!("writing {}", path.display()))
}
