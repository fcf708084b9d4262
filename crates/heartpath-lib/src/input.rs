//! Parser for the whitespace-separated problem format.
//!
//! Layout, all values non-negative integers:
//!
//! ```text
//! <rooms> <connections> <start room> <boss room>
//! <a> <b>                       (repeated <connections> times)
//! <shortcut count>              (part B only)
//! <a> <b>                       (repeated <shortcut count> times)
//! <heart room count>            (part C only)
//! <room>                        (repeated <heart room count> times)
//! ```
//!
//! Line breaks carry no meaning. Parsing works on an in-memory string; reading
//! the file is the caller's job.

use std::str::SplitWhitespace;

use crate::cost::FreeRooms;
use crate::error::{Error, Result};
use crate::graph::{Graph, DEFAULT_COST};
use crate::shortcut::Shortcut;
use crate::solver::{solve, Problem, ProblemPart, Solution, Variant};

/// A parsed problem together with the graph it runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedProblem {
    pub graph: Graph,
    pub problem: Problem,
}

impl ParsedProblem {
    pub fn solve(&mut self) -> Result<Solution> {
        solve(&mut self.graph, &self.problem)
    }
}

/// Parse a problem description for the given part.
pub fn parse_problem(input: &str, part: ProblemPart) -> Result<ParsedProblem> {
    let mut tokens = Tokens::new(input);

    let num_rooms = tokens.next_value("room count")?;
    let num_connections = tokens.next_value("connection count")?;
    let start_room = tokens.next_value("start room")?;
    let boss_room = tokens.next_value("boss room")?;

    let mut graph = Graph::new(num_rooms);
    for _ in 0..num_connections {
        let start = tokens.next_value("connection start")?;
        let end = tokens.next_value("connection end")?;
        graph.add_edge(start, end, DEFAULT_COST)?;
    }

    let variant = match part {
        ProblemPart::A => Variant::Baseline,
        ProblemPart::B => {
            let count = tokens.next_value("shortcut count")?;
            let mut shortcuts = Vec::new();
            for _ in 0..count {
                let start = tokens.next_value("shortcut start")?;
                let end = tokens.next_value("shortcut end")?;
                shortcuts.push(Shortcut::new(start, end));
            }
            Variant::Shortcuts(shortcuts)
        }
        ProblemPart::C => {
            let count = tokens.next_value("heart room count")?;
            let mut rooms = FreeRooms::new();
            for _ in 0..count {
                rooms.insert(tokens.next_value("heart room")?);
            }
            Variant::FreeRooms(rooms)
        }
    };

    let trailing = tokens.remaining();
    if trailing > 0 {
        tracing::warn!(trailing, "ignoring trailing tokens after problem description");
    }

    tracing::debug!(
        rooms = num_rooms,
        connections = num_connections,
        %part,
        "problem parsed"
    );

    Ok(ParsedProblem {
        graph,
        problem: Problem::new(num_rooms, start_room, boss_room, variant),
    })
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn next_value(&mut self, expected: &str) -> Result<usize> {
        let token = self.inner.next().ok_or_else(|| Error::UnexpectedEof {
            expected: expected.to_string(),
        })?;
        token.parse::<usize>().map_err(|err| Error::Parse {
            token: token.to_string(),
            message: format!("expected {expected}: {err}"),
        })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}
