use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use clouds2env::config::load_clouds_document;
use clouds2env::render::{FlattenOptions, Mode, QuotePolicy, render_profile};
use clouds2env::resolve_cloud_name;

#[derive(Parser)]
#[command(name = "clouds2env")]
#[command(
	author,
	version,
	about = "A tool to convert from an OpenStack 'clouds.yaml' file to 'OS_'-prefixed environment variables suitable for use with legacy tooling like novaclient."
)]
#[command(group(ArgGroup::new("mode").args(["set", "unset"])))]
struct Cli {
	/// The cloud to use (defaults to $OS_CLOUD)
	cloud: Option<String>,

	/// Set environment variables (default)
	#[arg(long)]
	set: bool,

	/// Unset environment variables
	#[arg(long)]
	unset: bool,

	/// Emit values without shell quoting
	#[arg(long)]
	raw: bool,

	/// Enable verbose logging on stderr
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:#}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let cloud = resolve_cloud_name(cli.cloud, env_var("OS_CLOUD"))?;

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let override_path = env_var("OS_CLIENT_CONFIG_FILE").map(PathBuf::from);
	let document = load_clouds_document(override_path.as_deref(), &cwd)?;
	tracing::debug!(path = %document.path.display(), cloud = %cloud, "loaded clouds.yaml");

	let profile = document.profile(&cloud)?;
	let options = FlattenOptions {
		mode: if cli.unset && !cli.set {
			Mode::Unset
		} else {
			Mode::Set
		},
		quoting: if cli.raw {
			QuotePolicy::Raw
		} else {
			QuotePolicy::Shell
		},
	};
	let lines = render_profile(&profile, &options)
		.with_context(|| format!("Failed to render cloud '{cloud}'"))?;

	let mut stdout = std::io::stdout().lock();
	for line in &lines {
		writeln!(stdout, "{line}").context("Failed to write to stdout")?;
	}

	Ok(ExitCode::SUCCESS)
}

/// Log to stderr so stdout stays safe to `eval`.
///
/// RUST_LOG in the environment always takes precedence; otherwise --verbose selects DEBUG
/// over the WARN default.
fn init_logging(verbose: bool) {
	let level = if verbose { Level::DEBUG } else { Level::WARN };
	let filter = EnvFilter::builder()
		.with_default_directive(level.into())
		.from_env_lossy();
	let _ = tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(filter)
		.try_init();
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok()
}
