//! intcode - run, search and disassemble Intcode programs

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use intcode_disassembler::disassemble;
use intcode_runtime::{search, search_parallel, Session, VMConfig};
use intcode_spec::{Cell, Program, SearchConfig, DEFAULT_SEPARATOR};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// intcode - execute and inspect Intcode programs
#[derive(Parser)]
#[command(name = "intcode", version, about)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Token separator used in source files
    #[arg(short, long, default_value = DEFAULT_SEPARATOR, global = true)]
    separator: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Execute a program and print its final memory
    Run {
        /// Path to the program source
        file: PathBuf,

        /// Value patched into cell 1 before running
        #[arg(long, requires = "verb")]
        noun: Option<Cell>,

        /// Value patched into cell 2 before running
        #[arg(long, requires = "noun")]
        verb: Option<Cell>,

        /// Write the final memory image to this file
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Find the (noun, verb) pair that leaves `target` in cell 0
    Search {
        file: PathBuf,

        #[arg(short, long)]
        target: Cell,

        /// Worker threads (defaults to available parallelism)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Print an instruction listing
    Disasm { file: PathBuf },

    /// Print a memory image written by `run --image`
    Image { file: PathBuf },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match cli.command {
        Command::Run { file, noun, verb, image } => {
            cmd_run(&file, &cli.separator, noun.zip(verb), image.as_deref(), cli.verbose >= 3)?
        }
        Command::Search { file, target, workers } => {
            cmd_search(&file, &cli.separator, target, workers)?
        }
        Command::Disasm { file } => cmd_disasm(&file, &cli.separator)?,
        Command::Image { file } => cmd_image(&file)?,
    };

    println!("{}", output);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// Subcommand implementations
// ---------------------------------------------------------------------------

fn load(file: &Path, separator: &str) -> Result<Session> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let session = Session::with_standard_set(source, separator)
        .with_context(|| format!("failed to parse {}", file.display()))?;
    debug!(file = %file.display(), cells = session.program().len(), "program loaded");
    Ok(session)
}

fn cmd_run(
    file: &Path,
    separator: &str,
    inputs: Option<(Cell, Cell)>,
    image: Option<&Path>,
    trace: bool,
) -> Result<String> {
    let mut session = load(file, separator)?.with_config(VMConfig {
        trace,
        ..VMConfig::default()
    });

    if let Some((noun, verb)) = inputs {
        let config = SearchConfig::DEFAULT;
        session
            .set_cell(config.noun_addr, noun)
            .context("failed to patch noun")?;
        session
            .set_cell(config.verb_addr, verb)
            .context("failed to patch verb")?;
    }

    let result = session.execute().context("execution failed")?;
    info!(steps = result.steps, halt_ip = result.halt_ip, "halted");

    if let Some(path) = image {
        session
            .program()
            .save(path)
            .with_context(|| format!("failed to write image {}", path.display()))?;
        info!(path = %path.display(), digest = %session.fingerprint(), "image written");
    }

    Ok(session.to_string())
}

fn cmd_search(
    file: &Path,
    separator: &str,
    target: Cell,
    workers: Option<usize>,
) -> Result<String> {
    let mut session = load(file, separator)?;
    let config = SearchConfig::DEFAULT;
    let workers = workers
        .or_else(|| thread::available_parallelism().ok().map(|n| n.get()))
        .unwrap_or(1);

    let hit = if workers > 1 {
        search_parallel(&session, target, &config, workers)?
    } else {
        search(&mut session, target, &config)?
    };

    match hit {
        Some(hit) => Ok(format!("{}\n{}", hit, hit.checksum())),
        None => bail!("no (noun, verb) pair in [0, {}) produces {}", config.limit, target),
    }
}

fn cmd_disasm(file: &Path, separator: &str) -> Result<String> {
    let session = load(file, separator)?;
    Ok(disassemble(session.program()))
}

fn cmd_image(file: &Path) -> Result<String> {
    let program = Program::load_image(file)
        .with_context(|| format!("failed to load image {}", file.display()))?;
    Ok(format!("{}\n; sha256 {}", program, program.digest_hex()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::env;
    use std::process;

    fn scratch(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("intcode-cli-{}-{}", process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::parse_from(["intcode", "-vv", "run", "prog.txt", "--noun", "12", "--verb", "2"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.separator, ",");
        match cli.command {
            Command::Run { noun, verb, image, .. } => {
                assert_eq!(noun.zip(verb), Some((12, 2)));
                assert!(image.is_none());
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_noun_requires_verb() {
        assert!(Cli::try_parse_from(["intcode", "run", "prog.txt", "--noun", "1"]).is_err());
    }

    #[test]
    fn test_run_prints_final_memory() {
        let file = scratch("run.txt", "1,1,1,4,99,5,6,0,99\n");
        let out = cmd_run(&file, ",", None, None, false).unwrap();
        assert_eq!(out, "30,1,1,4,2,5,6,0,99");
    }

    #[test]
    fn test_run_with_inputs_and_image() {
        let file = scratch("image-src.txt", "1,0,0,0,99");
        let image = env::temp_dir().join(format!("intcode-cli-{}-out.bin", process::id()));

        let out = cmd_run(&file, ",", Some((4, 4)), Some(&image), false).unwrap();
        assert_eq!(out, "198,4,4,0,99");

        let shown = cmd_image(&image).unwrap();
        assert!(shown.starts_with("198,4,4,0,99\n; sha256 "));
    }

    #[test]
    fn test_image_errors_have_context() {
        let err = cmd_image(Path::new("/nonexistent/intcode.bin")).unwrap_err();
        assert!(err.to_string().contains("failed to load image"));
        assert!(format!("{:#}", err).contains("I/O error"));

        let garbage = scratch("garbage.bin", "not an image");
        let err = cmd_image(&garbage).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid memory image"));

        let file = scratch("unwritable-src.txt", "99");
        let out = Path::new("/nonexistent/dir/out.bin");
        let err = cmd_run(&file, ",", None, Some(out), false).unwrap_err();
        assert!(err.to_string().contains("failed to write image"));
    }

    #[test]
    fn test_run_reports_faults() {
        let file = scratch("fault.txt", "1,0,0,0");
        let err = cmd_run(&file, ",", None, None, false).unwrap_err();
        assert!(format!("{:#}", err).contains("Missing halt"));
    }

    #[test]
    fn test_search_prints_pair_and_checksum() {
        // cell[0] = cell[noun] + cell[verb]; cells 5.. hold 10, 20, ...
        let mut cells = vec!["1".to_string(), "0".into(), "0".into(), "0".into(), "99".into()];
        cells.extend((1..=96).map(|v| (v * 10).to_string()));
        let file = scratch("search.txt", &cells.join(","));

        let sequential = cmd_search(&file, ",", 1000, Some(1)).unwrap();
        let parallel = cmd_search(&file, ",", 1000, Some(4)).unwrap();
        assert_eq!(sequential, parallel);
        assert!(sequential.starts_with("noun = "));
    }

    #[test]
    fn test_search_not_found_is_an_error() {
        let mut cells = vec!["1".to_string(), "0".into(), "0".into(), "0".into(), "99".into()];
        cells.extend((1..=96).map(|v| v.to_string()));
        let file = scratch("missing.txt", &cells.join(","));
        assert!(cmd_search(&file, ",", -1, Some(2)).is_err());
    }

    #[test]
    fn test_disasm_listing() {
        let file = scratch("disasm.txt", "1;9;10;3;99");
        let out = cmd_disasm(&file, ";").unwrap();
        assert!(out.contains("add [9], [10] -> [3]"));
        assert!(out.contains("halt"));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = cmd_disasm(Path::new("/nonexistent/intcode.txt"), ",").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
