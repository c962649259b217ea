use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use simplicial::complex::{Complex, ComplexCfg, Vertex};
use simplicial::sample::{clique_complex, CliqueParams};
use simplicial::smith::{diagonalize_with_transforms, IntMatrix};
use std::fs;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod render;

use render::{rows_of, text_report, ComplexReport};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Integral homology of finite simplicial complexes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute homology of a complex given as a JSON array of simplices
    Compute {
        #[arg(long)]
        input: String,
        /// Restrict the report to one dimension
        #[arg(long)]
        dim: Option<usize>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Add missing faces instead of rejecting an incomplete complex
        #[arg(long)]
        close: bool,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Diagonalize an integer matrix given as a JSON array of rows
    Diagonalize {
        #[arg(long)]
        input: String,
        /// Also print the left/right unimodular transforms
        #[arg(long)]
        transforms: bool,
    },
    /// Homology of a seeded random clique complex
    Random {
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        #[arg(long, default_value_t = 0.5)]
        edge_prob: f64,
        #[arg(long, default_value_t = 3)]
        max_dim: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Compute {
            input,
            dim,
            format,
            close,
            out,
        } => compute(input, dim, format, close, out),
        Action::Diagonalize { input, transforms } => diagonalize(input, transforms),
        Action::Random {
            vertices,
            edge_prob,
            max_dim,
            seed,
            format,
        } => random(
            CliqueParams {
                vertices,
                edge_prob,
                max_dim,
            },
            seed,
            format,
        ),
        Action::Report => report(),
    }
}

fn compute(
    input: String,
    dim: Option<usize>,
    format: Format,
    close: bool,
    out: Option<String>,
) -> Result<()> {
    tracing::info!(input, dim = ?dim, ?format, close, out = ?out, "compute");
    let raw = fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let simplices = parse_simplices(&raw).with_context(|| format!("parsing {input}"))?;
    let cfg = ComplexCfg {
        close_under_faces: close,
    };
    let complex = Complex::with_cfg(simplices, cfg).context("building complex")?;
    let rendered = render(&complex, dim, format)?;
    match out {
        Some(out) => {
            let params = serde_json::json!({
                "input": input,
                "dim": dim,
                "format": format!("{format:?}").to_lowercase(),
                "close": close,
            });
            let sidecar = provenance::write_with_sidecar(&out, rendered.as_bytes(), params)?;
            tracing::info!(out, sidecar = %sidecar.display(), "report written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn diagonalize(input: String, transforms: bool) -> Result<()> {
    tracing::info!(input, transforms, "diagonalize");
    let raw = fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let a = parse_matrix(&raw).with_context(|| format!("parsing {input}"))?;
    let res = diagonalize_with_transforms(&a).context("diagonalizing matrix")?;
    let doc = if transforms {
        serde_json::json!({
            "diagonal": rows_of(&res.diagonal),
            "invariant_factors": res.invariant_factors(),
            "left": rows_of(&res.left),
            "right": rows_of(&res.right),
        })
    } else {
        serde_json::json!({
            "diagonal": rows_of(&res.diagonal),
            "invariant_factors": res.invariant_factors(),
        })
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn random(params: CliqueParams, seed: u64, format: Format) -> Result<()> {
    tracing::info!(?params, seed, "random");
    let simplices = clique_complex(params, seed)?;
    let complex = Complex::from_simplices(simplices)?;
    println!("{}", render(&complex, None, format)?);
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::Provenance::new(serde_json::json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn render(complex: &Complex, dim: Option<usize>, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => text_report(complex, dim),
        Format::Json => serde_json::to_string_pretty(&ComplexReport::new(complex, dim))?,
    })
}

fn parse_simplices(raw: &str) -> Result<Vec<Vec<Vertex>>> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_matrix(raw: &str) -> Result<IntMatrix> {
    let rows: Vec<Vec<i64>> = serde_json::from_str(raw)?;
    let ncols = rows.first().map_or(0, Vec::len);
    ensure!(
        rows.iter().all(|r| r.len() == ncols),
        "matrix rows have different lengths"
    );
    let flat: Vec<i64> = rows.iter().flatten().copied().collect();
    Ok(IntMatrix::from_row_slice(rows.len(), ncols, &flat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rectangular_matrices() {
        let a = parse_matrix("[[1, 2, 3], [4, 5, 6]]").unwrap();
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a[(1, 0)], 4);
        assert_eq!(parse_matrix("[]").unwrap().shape(), (0, 0));
        assert!(parse_matrix("[[1, 2], [3]]").is_err());
    }

    #[test]
    fn parses_simplex_lists() {
        let s = parse_simplices("[[0], [1], [0, 1]]").unwrap();
        assert_eq!(s, vec![vec![0], vec![1], vec![0, 1]]);
        assert!(parse_simplices("[[0, -1]]").is_err());
    }

    #[test]
    fn diagonalize_reports_overflow_instead_of_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let unrepresentable = dir.path().join("min.json");
        fs::write(&unrepresentable, format!("[[{}]]", i64::MIN)).unwrap();
        let err = diagonalize(unrepresentable.to_string_lossy().into_owned(), false).unwrap_err();
        assert!(format!("{err:#}").contains("overflow"), "{err:#}");

        let fine = dir.path().join("row.json");
        fs::write(&fine, format!("[[-1, {}]]", i64::MIN)).unwrap();
        assert!(diagonalize(fine.to_string_lossy().into_owned(), true).is_ok());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }

    #[test]
    fn json_render_round_trips_through_serde() {
        let c = Complex::new(vec![vec![0], vec![1]]).unwrap();
        let text = render(&c, None, Format::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["dims"][0]["betti"], 2);
    }
}
