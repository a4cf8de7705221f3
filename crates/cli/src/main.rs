mod summary;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polygonize::construct::{AntCfg, ConstructionError, ConstructionMethod};
use polygonize::improve::{ImproveError, Policy};
use polygonize::point::PointSet;
use polygonize::sample::{draw_points, BoxCfg, ReplayToken};
use polygonize::session::Session;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use summary::{current_git_rev, RunSummary};

#[derive(Parser)]
#[command(name = "polygonize")]
#[command(about = "Build simple polygons through point sets")]
struct Cmd {
    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Construct a tour and repair its crossings
    Solve(SolveArgs),
    /// Print a small version JSON block
    Report,
}

#[derive(clap::Args)]
struct SolveArgs {
    /// Input point as `x,y`; repeat for each point
    #[arg(long = "point", value_parser = parse_point)]
    points: Vec<(i64, i64)>,
    /// Number of random points when no `--point` is given
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// Random points lie in [-bound, bound]²
    #[arg(long, default_value_t = 100)]
    bound: i64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// random | nearest | nearest-random | ants (or 1-3)
    #[arg(long, default_value = "nearest")]
    construct: String,
    /// Ants per colony
    #[arg(long, default_value_t = 10)]
    ants: usize,
    /// best-first | first | least-conflict | random | annealing (or 1-5)
    #[arg(long, default_value = "best-first")]
    policy: String,
    #[arg(long, default_value_t = 100)]
    anneal_iters: usize,
    /// Give up after this many improvement steps
    #[arg(long)]
    max_steps: Option<usize>,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve(args) => solve(args),
        Action::Report => report(),
    }
}

fn parse_point(s: &str) -> Result<(i64, i64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok((x, y))
}

fn load_points(args: &SolveArgs) -> Result<PointSet> {
    if args.points.is_empty() {
        let cfg = BoxCfg {
            count: args.count,
            bound: args.bound,
        };
        draw_points(
            cfg,
            ReplayToken {
                seed: args.seed,
                index: 0,
            },
        )
        .with_context(|| format!("drawing {} points in a box of half side {}", cfg.count, cfg.bound))
    } else {
        PointSet::from_coords(&args.points).context("reading --point values")
    }
}

fn solve(args: SolveArgs) -> Result<()> {
    let points = load_points(&args)?;
    let ants = AntCfg {
        ants: args.ants,
        ..AntCfg::default()
    };
    let method = ConstructionMethod::from_selector(&args.construct, ants)?;
    let policy = Policy::from_selector(&args.policy, args.anneal_iters)?;
    tracing::info!(points = points.len(), %method, %policy, seed = args.seed, "solve");

    let mut session = Session::seeded(args.seed);
    let initial = match session.construct(&points, method) {
        Err(err @ ConstructionError::Degenerate { .. }) => {
            tracing::warn!(%err, "retrying with fresh pheromone table");
            session.reset();
            session
                .construct(&points, method)
                .context("construction failed twice")?
        }
        other => other?,
    };

    let run = session.improve(initial.clone(), policy, args.max_steps);
    let outcome = match &run.error {
        None => "converged",
        Some(ImproveError::Stuck { .. }) => "stuck",
        Some(ImproveError::BudgetExhausted { .. }) => "budget_exhausted",
        Some(err) => bail!("improvement failed: {err}"),
    };

    let summary = RunSummary::new(
        &points,
        method.to_string(),
        policy.to_string(),
        &initial,
        &run.tour,
        outcome,
        run.stats,
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_text());
    }
    if let Some(err) = run.error {
        bail!("{err}");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "version": polygonize::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polygonize::point::PointSetError;

    #[test]
    fn points_parse_with_spaces_and_signs() {
        assert_eq!(parse_point("3,-4").unwrap(), (3, -4));
        assert_eq!(parse_point(" -1 , 2 ").unwrap(), (-1, 2));
        assert!(parse_point("3;4").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn solve_args_parse() {
        let cmd = Cmd::try_parse_from([
            "polygonize",
            "solve",
            "--point",
            "0,0",
            "--point",
            "10,10",
            "--point",
            "10,0",
            "--policy",
            "annealing",
            "--max-steps",
            "5",
        ])
        .unwrap();
        let Action::Solve(args) = cmd.action else {
            panic!("expected solve");
        };
        assert_eq!(args.points, vec![(0, 0), (10, 10), (10, 0)]);
        assert_eq!(args.max_steps, Some(5));
        assert_eq!(args.construct, "nearest");
        assert_eq!(load_points(&args).unwrap().len(), 3);
    }

    #[test]
    fn out_of_range_points_are_rejected_before_solving() {
        let cmd = Cmd::try_parse_from([
            "polygonize",
            "solve",
            "--point",
            "0,0",
            "--point",
            "3000000000,0",
            "--point",
            "0,3000000000",
        ])
        .unwrap();
        let Action::Solve(args) = cmd.action else {
            panic!("expected solve");
        };
        let err = load_points(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PointSetError>(),
            Some(PointSetError::CoordinateOutOfRange { x: 3_000_000_000, y: 0 })
        ));

        let cmd = Cmd::try_parse_from(["polygonize", "solve", "--bound", "3000000000"]).unwrap();
        let Action::Solve(args) = cmd.action else {
            panic!("expected solve");
        };
        assert!(matches!(
            load_points(&args).unwrap_err().downcast_ref::<PointSetError>(),
            Some(PointSetError::BoundOutOfRange { .. })
        ));
    }

    #[test]
    fn random_points_follow_the_seed() {
        let cmd = Cmd::try_parse_from(["polygonize", "solve", "--count", "6", "--bound", "3"])
            .unwrap();
        let Action::Solve(args) = cmd.action else {
            panic!("expected solve");
        };
        let a = load_points(&args).unwrap();
        let b = load_points(&args).unwrap();
        assert_eq!(a.len(), 6);
        assert!(a.points().iter().zip(b.points()).all(|(p, q)| p == q));
    }
}
