use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

use isorect::rand::{draw_rects, GenCfg, ReplayToken};
use isorect::{measure_and_contour, Rect};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Rectangle-union measure/contour runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute measure and contour for a rectangle set
    Run {
        /// Input path (N, then N records of four reals); stdin when omitted
        #[arg(long)]
        input: Option<String>,
        /// Write contour draw segments as a JSON array of [x, y, w, h] rows
        #[arg(long)]
        segments: Option<String>,
        /// Write a JSON result record
        #[arg(long)]
        out: Option<String>,
    },
    /// Generate a random test case
    Gen {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        coord_min: f64,
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        coord_max: f64,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            segments,
            out,
        } => run(input, segments, out),
        Action::Gen {
            count,
            seed,
            coord_min,
            coord_max,
            out,
        } => gen(count, seed, coord_min, coord_max, out),
    }
}

fn run(input: Option<String>, segments: Option<String>, out: Option<String>) -> Result<()> {
    let t0 = Instant::now();
    let text = match &input {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("reading stdin")?;
            s
        }
    };
    let rects = parse_rects(&text)?;
    tracing::info!(
        rects = rects.len(),
        ms = t0.elapsed().as_millis() as u64,
        "input"
    );

    let t1 = Instant::now();
    let report = measure_and_contour(&rects);
    tracing::info!(ms = t1.elapsed().as_millis() as u64, "algo");

    println!("Measure (Area) = {} Square Units", report.measure);
    println!("Contour (Perimeter) = {} Units", report.contour);

    if let Some(path) = segments {
        let rows: Vec<serde_json::Value> = report
            .segments
            .iter()
            .map(|s| serde_json::json!([s.x, s.y, s.w, s.h]))
            .collect();
        write_json(&path, &serde_json::Value::Array(rows))?;
    }
    if let Some(path) = out {
        let record = serde_json::json!({
            "rects": rects.len(),
            "measure": report.measure,
            "contour": report.contour,
        });
        write_json(&path, &record)?;
    }
    Ok(())
}

fn gen(count: usize, seed: u64, coord_min: f64, coord_max: f64, out: String) -> Result<()> {
    let cfg = GenCfg {
        coord_min,
        coord_max,
        integer: true,
    };
    let set = draw_rects(count, cfg, ReplayToken { seed, index: 0 });
    let mut text = format!("{}\n", set.len());
    for r in &set {
        text.push_str(&format!(
            "{} {} {} {}\n",
            r.x_left, r.x_right, r.y_bot, r.y_top
        ));
    }
    ensure_parent(Path::new(&out))?;
    std::fs::write(&out, text).with_context(|| format!("writing {out}"))?;
    tracing::info!(count, seed, out, "gen");
    Ok(())
}

/// Parse "N, then N records of four reals", whitespace separated. Degenerate
/// records (zero width or height) are discarded, not errors.
fn parse_rects(text: &str) -> Result<Vec<Rect>> {
    let mut tokens = text.split_whitespace();
    let n: usize = tokens
        .next()
        .context("missing rectangle count")?
        .parse()
        .context("rectangle count is not an integer")?;
    let mut rects = Vec::with_capacity(n);
    for i in 0..n {
        let mut coord = |name: &str| -> Result<f64> {
            let tok = tokens
                .next()
                .with_context(|| format!("record {i}: missing {name}"))?;
            tok.parse::<f64>()
                .with_context(|| format!("record {i}: {name} is not a number: {tok:?}"))
        };
        let xl = coord("x_left")?;
        let xr = coord("x_right")?;
        let yb = coord("y_bot")?;
        let yt = coord("y_top")?;
        if let Some(r) = Rect::normalized(xl, xr, yb, yt) {
            rects.push(r);
        }
    }
    Ok(rects)
}

fn write_json(path: &str, value: &serde_json::Value) -> Result<()> {
    let path = Path::new(path);
    ensure_parent(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
