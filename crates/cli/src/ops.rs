//! Evaluate one vector or line operation into a JSON value.
//!
//! Decimals are emitted as strings so no precision is lost on the way out.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde_json::{json, Value};
use vecline::{Decimal, Intersection, Line, Tolerances, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VectorOp {
    Add,
    Subtract,
    Scale,
    Magnitude,
    Direction,
    Normalize,
    Dot,
    Angle,
    Orthogonal,
    Parallel,
    IsZero,
    ParallelComponent,
    OrthogonalComponent,
    Cross,
    AreaParallelogram,
    AreaTriangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LineOp {
    Show,
    Basepoint,
    Parallel,
    Coincident,
    Intersect,
}

/// Inputs of a `vector` subcommand, already parsed.
pub struct VectorArgs {
    pub a: Vector,
    pub b: Option<Vector>,
    pub scalar: Option<Decimal>,
    pub degrees: bool,
}

/// Kebab-case name as accepted on the command line.
pub fn op_name<T: ValueEnum>(op: &T) -> String {
    op.to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

fn vector_json(v: &Vector) -> Value {
    Value::Array(v.iter().map(|x| Value::String(x.to_string())).collect())
}

fn line_json(l: &Line) -> Value {
    json!({
        "normal": vector_json(l.normal_vector()),
        "constant": l.constant_term().to_string(),
        "basepoint": l.basepoint().map(vector_json),
        "display": l.to_string(),
    })
}

fn second<'a, T>(b: Option<&'a T>, what: &str) -> Result<&'a T> {
    b.with_context(|| format!("this operation needs a second {what}"))
}

pub fn eval_vector(op: VectorOp, args: &VectorArgs, cfg: &Tolerances) -> Result<Value> {
    let a = &args.a;
    let b = args.b.as_ref();
    let value = match op {
        VectorOp::Add => vector_json(&a.add(second(b, "vector")?)?),
        VectorOp::Subtract => vector_json(&a.subtract(second(b, "vector")?)?),
        VectorOp::Scale => {
            let s = args.scalar.context("scale needs --scalar")?;
            vector_json(&a.scalar_multiply(s)?)
        }
        VectorOp::Magnitude => json!(a.magnitude()?.to_string()),
        // Zero vector has no direction: report null rather than fail.
        VectorOp::Direction => a.direction().as_ref().map_or(Value::Null, vector_json),
        VectorOp::Normalize => vector_json(&a.normalize()?),
        VectorOp::Dot => json!(a.dot_product(second(b, "vector")?)?.to_string()),
        VectorOp::Angle => json!(a.angle(second(b, "vector")?, args.degrees)?),
        VectorOp::Orthogonal => {
            json!(a.is_orthogonal_eps(second(b, "vector")?, cfg.eps_ortho)?)
        }
        VectorOp::Parallel => json!(a.is_parallel_cfg(second(b, "vector")?, cfg)?),
        VectorOp::IsZero => json!(a.is_zero_eps(cfg.eps_zero)),
        VectorOp::ParallelComponent => {
            vector_json(&a.parallel_component(second(b, "vector")?)?)
        }
        VectorOp::OrthogonalComponent => {
            vector_json(&a.orthogonal_component(second(b, "vector")?)?)
        }
        VectorOp::Cross => vector_json(&a.cross_product(second(b, "vector")?)?),
        VectorOp::AreaParallelogram => {
            json!(a.area_of_parallelogram(second(b, "vector")?)?.to_string())
        }
        VectorOp::AreaTriangle => {
            json!(a.area_of_triangle(second(b, "vector")?)?.to_string())
        }
    };
    Ok(value)
}

pub fn eval_line(op: LineOp, a: &Line, b: Option<&Line>, cfg: &Tolerances) -> Result<Value> {
    let value = match op {
        LineOp::Show => line_json(a),
        LineOp::Basepoint => a.basepoint().map_or(Value::Null, vector_json),
        LineOp::Parallel => json!(a.is_parallel_to_cfg(second(b, "line")?, cfg)),
        LineOp::Coincident => json!(a.is_coincident_with_cfg(second(b, "line")?, cfg)?),
        LineOp::Intersect => match a.intersect_cfg(second(b, "line")?, cfg)? {
            Intersection::Point(p) => json!({ "kind": "point", "point": vector_json(&p) }),
            Intersection::Parallel => json!({ "kind": "parallel" }),
            Intersection::Coincident(l) => json!({ "kind": "coincident", "line": line_json(&l) }),
        },
    };
    Ok(value)
}

pub fn parse_vector(s: &str) -> Result<Vector> {
    s.parse::<Vector>()
        .with_context(|| format!("parsing vector {s:?}"))
}

pub fn parse_line(s: &str) -> Result<Line> {
    if !s.contains('=') {
        bail!("line {s:?} must be written as a,b=k");
    }
    s.parse::<Line>()
        .with_context(|| format!("parsing line {s:?}"))
}
