use clap::{Parser, Subcommand};
use pi_bc::flow::{DEFAULT_CHARACTERISTIC_LENGTH_M, kinematic_viscosity_from_reynolds};
use pi_bc::{PatchFaces, VectorPatchCondition};
use pi_case::CaseResult;
use pi_core::units::{m, mps};
use pi_core::{Axis, Vec3};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "pi-cli")]
#[command(about = "Parabolic inlet profile tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file
    Validate {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
    /// Sample an inlet profile across the channel as CSV
    Sample {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
        /// Patch name of the inlet to sample
        #[arg(long, default_value = "In")]
        patch: String,
        /// Number of evenly spaced points from wall to wall
        #[arg(long, default_value_t = 21)]
        points: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Kinematic viscosity for a Reynolds number
    Viscosity {
        /// Reynolds number
        #[arg(long = "re")]
        re: f64,
        /// Inlet velocity in m/s
        #[arg(long)]
        velocity: f64,
        /// Characteristic length in m
        #[arg(long, default_value_t = DEFAULT_CHARACTERISTIC_LENGTH_M)]
        length: f64,
    },
    /// List the runs of a parameter sweep
    Sweep {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
}

fn main() -> CaseResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Sample {
            case_path,
            patch,
            points,
            output,
        } => cmd_sample(&case_path, &patch, points, output.as_deref()),
        Commands::Viscosity {
            re,
            velocity,
            length,
        } => cmd_viscosity(re, velocity, length),
        Commands::Sweep { case_path } => cmd_sweep(&case_path),
    }
}

fn cmd_validate(case_path: &Path) -> CaseResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = pi_case::load(case_path)?;
    let inlets = case.build_inlets()?;
    println!("✓ Case '{}' is valid", case.name);

    for inlet in &inlets {
        let p = inlet.profile();
        println!(
            "  {} - u_max = {} m/s, h = {} m, C = {}, axis = {} (peak {:.4} m/s, bulk {:.4} m/s)",
            inlet.name(),
            p.u_max(),
            p.height(),
            p.shape_c(),
            p.axis(),
            p.peak(),
            p.bulk_velocity()
        );
    }
    if let Some(flow) = &case.flow {
        let nu = flow.kinematic_viscosity()?;
        println!(
            "  Flow: Re = {}, U = {} m/s, L = {} m -> nu = {:e} m^2/s",
            flow.reynolds, flow.velocity_mps, flow.characteristic_length_m, nu.value
        );
    }
    if let Some(sweep) = &case.sweep {
        println!("  Sweep: {} runs", sweep.cases().len());
    }
    Ok(())
}

fn cmd_sample(
    case_path: &Path,
    patch: &str,
    points: usize,
    output: Option<&Path>,
) -> CaseResult<()> {
    if points < 2 {
        return Err(pi_bc::BcError::InvalidArg {
            what: "at least two sample points are required",
        }
        .into());
    }

    let case = pi_case::load(case_path)?;
    let mut inlet = case.build_inlet(patch)?;
    let profile = *inlet.profile();
    let h = profile.height();

    let coords: Vec<f64> = (0..points)
        .map(|i| h * i as f64 / (points - 1) as f64)
        .collect();
    let centres: Vec<Vec3> = coords
        .iter()
        .map(|&y| sample_point(profile.axis(), y))
        .collect();
    let mut values = vec![Vec3::zeros(); centres.len()];
    inlet.update_coeffs(PatchFaces::new(patch, &centres), &mut values)?;
    info!(patch, points, "sampled inlet profile");

    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    writeln!(out, "{},ux,uy,uz", profile.axis())?;
    for (y, v) in coords.iter().zip(&values) {
        writeln!(out, "{},{},{},{}", y, v.x, v.y, v.z)?;
    }
    out.flush()?;

    if let Some(path) = output {
        println!("✓ Wrote {} samples to {}", points, path.display());
    }
    Ok(())
}

fn sample_point(axis: Axis, coord: f64) -> Vec3 {
    let mut p = Vec3::zeros();
    p[axis.index()] = coord;
    p
}

fn cmd_viscosity(re: f64, velocity: f64, length: f64) -> CaseResult<()> {
    let nu = kinematic_viscosity_from_reynolds(re, mps(velocity), m(length))?;
    println!(
        "Re = {}, U = {} m/s, L = {} m -> nu = {:e} m^2/s",
        re, velocity, length, nu.value
    );
    Ok(())
}

fn cmd_sweep(case_path: &Path) -> CaseResult<()> {
    let case = pi_case::load(case_path)?;
    let Some(sweep) = &case.sweep else {
        println!("No sweep defined in case");
        return Ok(());
    };

    let cases = sweep.cases();
    println!("Sweep in case '{}' ({} runs):", case.name, cases.len());
    for run in &cases {
        let u = sweep.velocity(run)?;
        println!(
            "  {:>3}. {}  Re = {}, nu = {:e} m^2/s, U = {:.4} m/s",
            run.run,
            run.label(),
            run.re,
            run.nu,
            u.value
        );
    }
    Ok(())
}
