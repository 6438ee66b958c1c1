use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use vecline::cfg::{DET_EPS, ORTHO_EPS, PI_EPS, ZERO_EPS};
use vecline::Tolerances;

mod ops;
mod provenance;

use ops::{LineOp, VectorArgs, VectorOp};

#[derive(Parser)]
#[command(name = "vecline")]
#[command(about = "Decimal vector algebra and 2D line queries")]
struct Cmd {
    /// Magnitude below which a vector counts as zero
    #[arg(long, global = true, default_value_t = ZERO_EPS)]
    eps_zero: f64,
    /// |u·v| below which two vectors count as orthogonal
    #[arg(long, global = true, default_value_t = ORTHO_EPS)]
    eps_ortho: f64,
    /// Distance from π (radians) still treated as antiparallel
    #[arg(long, global = true, default_value_t = PI_EPS)]
    eps_pi: f64,
    /// |det| at or below which two lines are treated as parallel
    #[arg(long, global = true, default_value_t = DET_EPS)]
    eps_det: f64,
    /// Write the JSON result here plus a provenance sidecar instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Vector operation; vectors are written x,y[,z...]
    Vector {
        #[arg(value_enum)]
        op: VectorOp,
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: Option<String>,
        /// Factor for `scale`
        #[arg(long, allow_hyphen_values = true)]
        scalar: Option<String>,
        /// Report `angle` in degrees
        #[arg(long)]
        degrees: bool,
    },
    /// Line operation; lines are written a,b=k for a·x_1 + b·x_2 = k
    Line {
        #[arg(value_enum)]
        op: LineOp,
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct Output<'a> {
    op: &'a str,
    result: Value,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = Tolerances {
        eps_zero: cmd.eps_zero,
        eps_ortho: cmd.eps_ortho,
        eps_pi: cmd.eps_pi,
        eps_det: cmd.eps_det,
    };
    match cmd.action {
        Action::Vector {
            op,
            a,
            b,
            scalar,
            degrees,
        } => vector(op, a, b, scalar, degrees, &cfg, cmd.out),
        Action::Line { op, a, b } => line(op, a, b, &cfg, cmd.out),
        Action::Report => report(),
    }
}

fn vector(
    op: VectorOp,
    a: String,
    b: Option<String>,
    scalar: Option<String>,
    degrees: bool,
    cfg: &Tolerances,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(?op, a = %a, b = ?b, scalar = ?scalar, degrees, "vector");
    let args = VectorArgs {
        a: ops::parse_vector(&a)?,
        b: b.as_deref().map(ops::parse_vector).transpose()?,
        scalar: scalar
            .as_deref()
            .map(|s| {
                vecline::num::parse_decimal(s).with_context(|| format!("parsing scalar {s:?}"))
            })
            .transpose()?,
        degrees,
    };
    let result = ops::eval_vector(op, &args, cfg)?;
    let params = json!({
        "a": a,
        "b": b,
        "scalar": scalar,
        "degrees": degrees,
        "tolerances": tolerances_json(cfg),
    });
    emit(&format!("vector {}", ops::op_name(&op)), result, params, out)
}

fn line(
    op: LineOp,
    a: String,
    b: Option<String>,
    cfg: &Tolerances,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(?op, a = %a, b = ?b, "line");
    let la = ops::parse_line(&a)?;
    let lb = b.as_deref().map(ops::parse_line).transpose()?;
    let result = ops::eval_line(op, &la, lb.as_ref(), cfg)?;
    let params = json!({ "a": a, "b": b, "tolerances": tolerances_json(cfg) });
    emit(&format!("line {}", ops::op_name(&op)), result, params, out)
}

fn tolerances_json(cfg: &Tolerances) -> Value {
    json!({
        "eps_zero": cfg.eps_zero,
        "eps_ortho": cfg.eps_ortho,
        "eps_pi": cfg.eps_pi,
        "eps_det": cfg.eps_det,
    })
}

fn emit(op: &str, result: Value, params: Value, out: Option<PathBuf>) -> Result<()> {
    let doc = serde_json::to_value(Output { op, result })?;
    match out {
        Some(path) => {
            let prov = provenance::write_result(&path, &doc, provenance::Payload::new(params))?;
            tracing::info!(out = %path.display(), provenance = %prov.display(), "wrote result");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": vecline::VERSION,
        "tolerance_defaults": tolerances_json(&Tolerances::default()),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
