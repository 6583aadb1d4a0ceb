mod result;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use fietsat::dimacs::write_dimacs;
use fietsat::encoders::CardinalityEncoding;
use fietsat::engine;
use fietsat::engine::Model;
use fietsat::engine::VarisatBackend;
use fietsat::formulation::formulate;
use fietsat::formulation::CoverageRule;
use fietsat::formulation::Formulation;
use fietsat::formulation::FormulationOptions;
use fietsat::problem::Problem;
use fietsat::report::check_solution;
use fietsat::report::write_report;
use fietsat::report::Solution;
use log::error;
use log::info;
use log::LevelFilter;
use result::FietsatResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The JSON file with the drivers. Every driver has an `id`, a `name`, an experience level
    /// `exp` between 1 and 4, and the list of `routes` it may be assigned to.
    #[clap(verbatim_doc_comment)]
    drivers_path: PathBuf,

    /// The JSON file with the routes. Every route has an `id`, a `start` and an `end`.
    routes_path: PathBuf,

    /// Enables log message output.
    ///
    /// The `RUST_LOG` environment variable can be used for finer control.
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// The encoding used for the "at most one" and "exactly one" constraints.
    #[arg(long, value_enum, default_value_t)]
    encoding: CardinalityEncoding,

    /// Whether every level of every route must be filled ("exactly"), or may stay empty
    /// ("at-most").
    #[arg(long, value_enum, default_value_t)]
    coverage: CoverageRule,

    /// Additionally write the formula to this path in the DIMACS CNF format.
    #[arg(long)]
    dimacs: Option<PathBuf>,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "c {}", record.args()))
        .filter_level(level_filter)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> FietsatResult<()> {
    let args = Args::parse();
    configure_logging(args.verbose);

    let problem = Problem::read_files(&args.drivers_path, &args.routes_path)?;
    info!(
        "Read {} drivers from '{}' and {} routes from '{}'.",
        problem.num_drivers(),
        args.drivers_path.display(),
        problem.num_routes(),
        args.routes_path.display()
    );

    let options = FormulationOptions {
        encoding: args.encoding,
        coverage: args.coverage,
    };
    let formulation = formulate(&problem, options)?;

    if let Some(dimacs_path) = args.dimacs.as_ref() {
        let mut writer = BufWriter::new(File::create(dimacs_path)?);
        write_dimacs(&mut writer, &formulation)?;
        writer.flush()?;
        info!("Wrote the formula to '{}'.", dimacs_path.display());
    }

    let result = engine::solve(&formulation, &mut VarisatBackend::default())?;
    let solution = result
        .model()
        .map(|model| decode_checked(&problem, &formulation, model, options.coverage))
        .transpose()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &problem, solution.as_ref(), &Local::now())?;
    out.flush()?;

    Ok(())
}

/// Decodes `model` and rejects it if it breaks the assignment rules.
fn decode_checked(
    problem: &Problem,
    formulation: &Formulation,
    model: &Model,
    coverage: CoverageRule,
) -> FietsatResult<Solution> {
    let solution = Solution::decode(problem, formulation.pool(), model);
    check_solution(problem, &solution, coverage)?;
    Ok(solution)
}
