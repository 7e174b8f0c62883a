//! Command-line demonstrations of classical fuzzy set operations.

use std::io::{self, Write};

use anyhow::{ensure, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fuzzy_primer::{
    alpha_cut, extension_principle, intersection, linspace, union, CompositionOp, LabeledSet, MembershipFn, Relation,
};

mod report;

use report::{Format, Renderer, Report, Series};

#[derive(Parser)]
#[command(name = "fuzzy-primer", version, about = "Classical fuzzy set operations, one demonstration at a time")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Lower end of the sampled domain
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true, global = true)]
    min: f64,

    /// Upper end of the sampled domain
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true, global = true)]
    max: f64,

    /// Number of domain samples
    #[arg(long, default_value_t = 1000, global = true)]
    samples: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    format: Format,

    /// Plot width in characters
    #[arg(long, default_value_t = 72, global = true)]
    width: usize,

    /// Plot height in lines, also the number of rows sampled for curve tables
    #[arg(long, default_value_t = 20, global = true)]
    height: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Clone, Copy, Debug)]
enum Command {
    /// Evaluate the five membership function shapes
    Membership,
    /// Alpha-cut of a gaussian fuzzy set
    AlphaCut {
        #[arg(long, default_value_t = 0.5)]
        alpha: f64,
    },
    /// Union and intersection of two triangular fuzzy sets
    SetOps,
    /// Fuzzy relation from the cartesian product of two labeled sets
    Relation,
    /// Composition of two fuzzy relations
    Compose {
        /// Use max-product instead of max-min
        #[arg(long)]
        max_prod: bool,
    },
    /// Reflexivity, symmetry and transitivity of a fuzzy relation
    Properties,
    /// Map a fuzzy set through a function with the extension principle
    Extension,
    /// Run every demonstration
    All,
}

impl Cli {
    fn domain(&self) -> Result<Vec<f64>> {
        ensure!(
            self.min < self.max,
            "domain minimum {} must be below its maximum {}",
            self.min,
            self.max
        );
        ensure!(self.samples >= 2, "need at least two samples, got {}", self.samples);

        Ok(linspace(self.min, self.max, self.samples))
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn membership(domain: &[f64]) -> Result<Vec<Report>> {
    let shapes = [
        MembershipFn::triangular(-5., 0., 5.)?,
        MembershipFn::trapezoidal(-6., -2., 2., 6.)?,
        MembershipFn::gaussian(0., 2.)?,
        MembershipFn::bell(2., 3., 0.)?,
        MembershipFn::sigmoid(1., 0.)?,
    ];

    Ok(shapes
        .iter()
        .map(|shape| Report::Curves {
            title: format!("{} membership function", shape.name()),
            x: domain.to_vec(),
            series: vec![Series::new(shape.name(), shape.eval(domain))],
        })
        .collect())
}

fn alpha_cut_demo(domain: &[f64], alpha: f64) -> Result<Vec<Report>> {
    let fuzzy = MembershipFn::gaussian(0., 2.)?.eval(domain);
    let crisp = alpha_cut(&fuzzy, alpha).with_context(|| format!("alpha-cut at {alpha}"))?;

    Ok(vec![Report::Curves {
        title: format!("Alpha-cut of a fuzzy set (alpha = {alpha})"),
        x: domain.to_vec(),
        series: vec![
            Series::new("fuzzy set", fuzzy),
            Series::new("alpha-cut", crisp),
            Series::new("alpha", vec![alpha; domain.len()]),
        ],
    }])
}

fn set_ops(domain: &[f64]) -> Result<Vec<Report>> {
    let a = MembershipFn::triangular(-6., -2., 2.)?.eval(domain);
    let b = MembershipFn::triangular(-2., 2., 6.)?.eval(domain);
    let either = union(&a, &b)?;
    let both = intersection(&a, &b)?;

    Ok(vec![Report::Curves {
        title: "Union and intersection of fuzzy sets".into(),
        x: domain.to_vec(),
        series: vec![
            Series::new("A", a),
            Series::new("B", b),
            Series::new("A or B", either),
            Series::new("A and B", both),
        ],
    }])
}

fn relation() -> Result<Vec<Report>> {
    let a = LabeledSet::from_pairs([("x1", 0.2), ("x2", 0.5), ("x3", 0.8)])?;
    let b = LabeledSet::from_pairs([("y1", 0.3), ("y2", 0.6), ("y3", 0.9)])?;
    let product = Relation::cartesian(&a, &b);

    Ok(vec![Report::Matrix {
        title: "Fuzzy relation R = A x B".into(),
        rows: product.relation.to_rows(),
        row_labels: product.row_labels,
        col_labels: product.col_labels,
    }])
}

fn matrix(title: impl Into<String>, relation: &Relation<f64>) -> Report {
    Report::Matrix {
        title: title.into(),
        row_labels: (1..=relation.rows()).map(|i| format!("{i}")).collect(),
        col_labels: (1..=relation.cols()).map(|j| format!("{j}")).collect(),
        rows: relation.to_rows(),
    }
}

fn compose(op: CompositionOp) -> Result<Vec<Report>> {
    let r = Relation::from_rows([[0.2, 0.5, 0.7], [0.3, 0.6, 0.8], [0.4, 0.7, 0.9]])?;
    let s = Relation::from_rows([[0.3, 0.6, 0.9], [0.2, 0.5, 0.8], [0.1, 0.4, 0.7]])?;
    let t = r.compose(&s, op)?;

    Ok(vec![
        matrix("Fuzzy relation R", &r),
        matrix("Fuzzy relation S", &s),
        matrix(format!("Composition T = R o S ({op:?})"), &t),
    ])
}

fn properties() -> Result<Vec<Report>> {
    let r = Relation::from_rows([[1.0, 0.6, 0.4], [0.6, 1.0, 0.5], [0.4, 0.5, 1.0]])?;
    let props = r.properties()?;

    Ok(vec![matrix("Fuzzy relation R", &r), Report::Flags {
        title: "Properties".into(),
        flags: vec![
            ("Reflexive".into(), props.reflexive),
            ("Symmetric".into(), props.symmetric),
            ("Transitive".into(), props.transitive),
        ],
    }])
}

fn extension(domain: &[f64]) -> Result<Vec<Report>> {
    let gauss = MembershipFn::gaussian(0., 0.9)?;
    let func = |x: f64| if x > 0. { x.powi(2) - 3. } else { x };
    let mapped = extension_principle(domain, domain, func, |x| gauss.call(x))?;

    Ok(vec![
        Report::Curves {
            title: "Original fuzzy set A".into(),
            x: domain.to_vec(),
            series: vec![Series::new("muA(x)", gauss.eval(domain))],
        },
        Report::Curves {
            title: "Mapped fuzzy set B = f(A)".into(),
            x: domain.to_vec(),
            series: vec![Series::new("muB(y)", mapped)],
        },
    ])
}

fn run(command: Command, domain: &[f64]) -> Result<Vec<Report>> {
    info!(?command, "running demonstration");

    match command {
        Command::Membership => membership(domain),
        Command::AlphaCut { alpha } => alpha_cut_demo(domain, alpha),
        Command::SetOps => set_ops(domain),
        Command::Relation => relation(),
        Command::Compose { max_prod } => compose(if max_prod {
            CompositionOp::MaxProd
        } else {
            CompositionOp::MaxMin
        }),
        Command::Properties => properties(),
        Command::Extension => extension(domain),
        Command::All => {
            let mut reports = Vec::new();

            for command in [
                Command::Membership,
                Command::AlphaCut { alpha: 0.5 },
                Command::SetOps,
                Command::Relation,
                Command::Compose { max_prod: false },
                Command::Properties,
                Command::Extension,
            ] {
                reports.extend(run(command, domain)?);
            }

            Ok(reports)
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let domain = cli.domain()?;
    let renderer = Renderer::new(cli.format, cli.width, cli.height);
    let reports = run(cli.command, &domain)?;

    debug!(reports = reports.len(), "rendering");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for report in &reports {
        renderer
            .render(&mut out, report)
            .with_context(|| format!("failed to render {:?}", report.title()))?;
    }

    out.flush().context("failed to flush output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["fuzzy-primer", "alpha-cut", "--alpha", "0.3", "--min", "-5", "--samples", "11"])
            .unwrap();

        assert!(matches!(cli.command, Command::AlphaCut { alpha } if alpha == 0.3));
        assert_eq!(cli.domain().unwrap(), linspace(-5., 10., 11));
        assert!(Cli::try_parse_from(["fuzzy-primer"]).is_err());
    }

    #[test]
    fn test_rejects_bad_domain() {
        let cli = Cli::try_parse_from(["fuzzy-primer", "membership", "--min", "3", "--max", "1"]).unwrap();

        assert!(cli.domain().is_err());
    }

    #[test]
    fn test_all_runs_every_demonstration() {
        let reports = run(Command::All, &linspace(-10., 10., 101)).unwrap();

        // Five shapes, alpha-cut, set ops, relation, three compose, two properties, two extension
        assert_eq!(reports.len(), 15);
        assert!(reports
            .iter()
            .any(|r| matches!(r, Report::Flags { flags, .. } if flags[2] == ("Transitive".to_string(), false))));
    }
}
