//! Solve command handler for computing hearts lost on the cheapest path.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use heartpath_lib::{parse_problem, ProblemPart, Solution};

use crate::output::{render_solution, OutputFormat};

/// Problem part as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PartArg {
    /// Plain shortest path.
    #[default]
    A,
    /// Best path when one shortcut may be opened.
    B,
    /// Heart rooms cost nothing to enter.
    C,
}

impl From<PartArg> for ProblemPart {
    fn from(part: PartArg) -> Self {
        match part {
            PartArg::A => ProblemPart::A,
            PartArg::B => ProblemPart::B,
            PartArg::C => ProblemPart::C,
        }
    }
}

/// Arguments for the solve command.
#[derive(Debug, Clone)]
pub struct SolveCommandArgs {
    /// Which problem part the input describes.
    pub part: PartArg,
    /// Problem file; `None` or `-` reads standard input.
    pub input: Option<PathBuf>,
}

impl SolveCommandArgs {
    /// Problem file to read, or `None` for standard input.
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

/// Handle the solve subcommand.
///
/// Reads the problem, solves it, and writes the result to stdout.
pub fn handle_solve_command(args: &SolveCommandArgs, format: OutputFormat) -> Result<()> {
    let input = read_input(args)?;
    let solution = solve_input(&input, args.part)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render_solution(&mut handle, &solution, format).context("failed to write solution")?;
    handle.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Parse and solve an in-memory problem description.
pub fn solve_input(input: &str, part: PartArg) -> Result<Solution> {
    let part = ProblemPart::from(part);
    let mut parsed = parse_problem(input, part)
        .with_context(|| format!("failed to parse part {part} problem"))?;

    if parsed.problem.boss_room == parsed.problem.start_room {
        tracing::debug!(room = parsed.problem.start_room, "start room is the boss room");
    }

    let solution = parsed.solve().context("failed to solve problem")?;
    if solution.hearts_lost.is_unreachable() {
        tracing::warn!(
            start = parsed.problem.start_room,
            boss = parsed.problem.boss_room,
            "boss room is unreachable from the start room"
        );
    }
    Ok(solution)
}

fn read_input(args: &SolveCommandArgs) -> Result<String> {
    if let Some(path) = args.input_path() {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read problem file {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read problem from stdin")?;
    Ok(buffer)
}
