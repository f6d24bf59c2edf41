//! prism CLI - reflection and refraction from the command line
//!
//! Vectors are written `x,y,z` (or quoted `"x y z"`). Direction and normal
//! arguments are normalized before use.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use prism_math::{Real, Vector3};
use prism_term::{c_print, TermColor, Timer};

mod commands;
mod config;

use commands::parse_vec3;
use config::Config;

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Vector optics for the prism renderer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reflect a direction off a surface
    Reflect {
        /// Surface normal
        #[arg(short, long, value_parser = parse_vec3, allow_hyphen_values = true)]
        normal: Vector3,
        /// Incident direction (travelling toward the surface)
        #[arg(short, long, value_parser = parse_vec3, allow_hyphen_values = true)]
        dir: Vector3,
    },
    /// Refract a direction through a surface
    Refract {
        /// Surface normal, on the incident side
        #[arg(short, long, value_parser = parse_vec3, allow_hyphen_values = true)]
        normal: Vector3,
        /// Incident direction (travelling toward the surface)
        #[arg(short, long, value_parser = parse_vec3, allow_hyphen_values = true)]
        dir: Vector3,
        /// Refractive index of the far side relative to the near side
        /// (default: optics.density from the config)
        #[arg(long)]
        density: Option<Real>,
    },
    /// Scale a vector to unit length
    Normalize {
        #[arg(value_parser = parse_vec3, allow_hyphen_values = true)]
        v: Vector3,
    },
    /// Right-handed cross product
    Cross {
        #[arg(value_parser = parse_vec3, allow_hyphen_values = true)]
        a: Vector3,
        #[arg(value_parser = parse_vec3, allow_hyphen_values = true)]
        b: Vector3,
    },
    /// Inner product
    Dot {
        #[arg(value_parser = parse_vec3, allow_hyphen_values = true)]
        a: Vector3,
        #[arg(value_parser = parse_vec3, allow_hyphen_values = true)]
        b: Vector3,
    },
    /// Axis-aligned bounds of a point set
    Bounds {
        #[arg(value_parser = parse_vec3, allow_hyphen_values = true, required = true)]
        points: Vec<Vector3>,
    },
}

/// Prints `label: value` lines honoring the output config.
struct Printer {
    color: bool,
    precision: usize,
}

impl Printer {
    fn new(config: &Config) -> Self {
        Self {
            color: config.output.color,
            precision: config.output.precision,
        }
    }

    fn line(&self, label: &str, value: impl std::fmt::Display) {
        if self.color {
            c_print!(TermColor::Green, "{label}:");
            println!(" {value}");
        } else {
            println!("{label}: {value}");
        }
    }

    fn vector(&self, label: &str, v: &Vector3) {
        self.line(label, format!("{:.*}", self.precision, v));
    }

    fn scalar(&self, label: &str, x: Real) {
        self.line(label, format!("{:.*}", self.precision, x));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };
    debug!("{config:?}");

    let out = Printer::new(&config);
    let timer = Timer::new();

    match cli.command {
        Commands::Reflect { normal, dir } => {
            let r = commands::reflect(normal, dir)?;
            out.vector("reflected", &r);
        }
        Commands::Refract {
            normal,
            dir,
            density,
        } => {
            let density = density.unwrap_or(config.optics.density);
            match commands::refract(normal, dir, density)? {
                Some(t) => out.vector("refracted", &t),
                None => out.line("refracted", "none (grazing incidence or total internal reflection)"),
            }
        }
        Commands::Normalize { v } => {
            let n = commands::unit(v, "input")?;
            out.vector("normalized", &n);
            out.scalar("length", v.norm());
        }
        Commands::Cross { a, b } => {
            out.vector("cross", &a.cross(&b));
        }
        Commands::Dot { a, b } => {
            out.scalar("dot", a.dot(&b));
        }
        Commands::Bounds { points } => {
            let (lo, hi) = commands::bounds(&points)?;
            out.vector("min", &lo);
            out.vector("max", &hi);
            out.vector("extent", &(hi - lo));
        }
    }

    debug!("done in {:.6}s", timer.get_sec());
    Ok(())
}
