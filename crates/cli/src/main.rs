use clap::{Args, Parser, Subcommand};
use fab_atom::VerifyPolicy;
use fab_atom_cli::commands::{audit, build, inspect, verify};
use fab_atom_cli::telemetry;
use fab_atom_cli::AtomConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fab-atom")]
#[command(about = "Atomization, audit, and verification tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RunDir {
    /// Directory the atomization run lives in. Relative artifact paths are
    /// resolved against it.
    #[arg(long, short)]
    dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the compiler atomization pass
    Build {
        #[command(flatten)]
        run: RunDir,

        /// Source input (default: input.fb)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Atomized artifact path (default: build/atomized.json)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Atomizer executable (default: fabc)
        #[arg(long)]
        atomizer: Option<PathBuf>,

        /// Argument passed to the atomizer before `--atomized`; repeatable
        #[arg(long = "atomizer-arg", value_name = "ARG", allow_hyphen_values = true)]
        atomizer_args: Vec<String>,
    },
    /// Print the superposition collapse trace
    Audit {
        #[command(flatten)]
        run: RunDir,

        /// Trace log path (default: audit/collapse_trace.log)
        #[arg(long)]
        trace: Option<PathBuf>,
    },
    /// Verify the mutation history DAG
    Verify {
        #[command(flatten)]
        run: RunDir,

        /// History path (default: audit/dag.json)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Stop at the first violation instead of reporting all of them
        #[arg(long)]
        fail_fast: bool,

        /// Print a JSON audit certificate instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show which artifacts of a run are present and sound
    Inspect {
        #[command(flatten)]
        run: RunDir,
    },
}

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    eprintln!("fab-atom v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            run,
            input,
            output,
            atomizer,
            atomizer_args,
        } => {
            let cfg = AtomConfig::resolve(run.dir)
                .with_input(input)
                .with_output(output)
                .with_atomizer(atomizer)
                .with_atomizer_args(atomizer_args);
            build::run(&cfg)
        }
        Commands::Audit { run, trace } => {
            let cfg = AtomConfig::resolve(run.dir).with_trace(trace);
            audit::run(&cfg)
        }
        Commands::Verify {
            run,
            history,
            fail_fast,
            json,
        } => {
            let policy = if fail_fast {
                VerifyPolicy::FailFast
            } else {
                VerifyPolicy::Collect
            };
            let cfg = AtomConfig::resolve(run.dir)
                .with_history(history)
                .with_policy(policy);
            verify::run(&cfg, json)
        }
        Commands::Inspect { run } => inspect::run(&AtomConfig::resolve(run.dir)),
    }
}
