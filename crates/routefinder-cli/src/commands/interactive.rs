//! Prompt-driven route search over stdin and stdout.
//!
//! Each round asks for a start, a goal and a method number, prints the route
//! with its search time and total distance, then asks whether to search
//! again. End of input at any prompt ends the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use routefinder_lib::{
    plan_route, Error as RouteError, Network, RouteAlgorithm, RouteRenderMode, RouteRequest,
    RouteSummary,
};

use super::{default_max_depth, format_unknown_location_message, friendly_error};

const SUGGESTION_LIMIT: usize = 3;

/// What a single round of prompts ended with.
enum Round {
    Searched,
    Retry,
    Quit,
}

/// Interactive session reading answers from `input` and writing to `output`.
pub struct InteractiveSession<'a, R, W> {
    network: &'a Network,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(network: &'a Network, input: R, output: W) -> Self {
        Self {
            network,
            input,
            output,
        }
    }

    /// Run rounds until the user declines to search again or input ends.
    pub fn run(mut self) -> Result<()> {
        loop {
            match self.round()? {
                Round::Quit => break,
                Round::Retry => continue,
                Round::Searched => {}
            }

            match self.prompt("Do you want to search again? (yes/no): ")? {
                Some(answer) if answer.eq_ignore_ascii_case("yes") => {}
                _ => break,
            }
        }

        writeln!(self.output, "Thank you for using the route finder!")?;
        self.output.flush()?;
        Ok(())
    }

    fn round(&mut self) -> Result<Round> {
        let Some(start) = self.prompt("Enter the starting location: ")? else {
            return Ok(Round::Quit);
        };
        let Some(goal) = self.prompt("Enter the ending location: ")? else {
            return Ok(Round::Quit);
        };

        let unknown: Vec<&str> = [start.as_str(), goal.as_str()]
            .into_iter()
            .filter(|name| !self.network.graph().contains(name))
            .collect();
        if !unknown.is_empty() {
            writeln!(self.output, "Both locations must be in the network. Try again.")?;
            for name in unknown {
                let suggestions = self.network.graph().fuzzy_matches(name, SUGGESTION_LIMIT);
                writeln!(
                    self.output,
                    "{}",
                    format_unknown_location_message(name, &suggestions)
                )?;
            }
            return Ok(Round::Retry);
        }

        writeln!(self.output, "Select a search method:")?;
        for (index, algorithm) in RouteAlgorithm::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, algorithm.description())?;
        }
        let Some(choice) = self.prompt("Enter the method number: ")? else {
            return Ok(Round::Quit);
        };
        let Some(algorithm) = parse_method(&choice) else {
            writeln!(
                self.output,
                "Invalid choice. Please select a valid search method."
            )?;
            return Ok(Round::Searched);
        };

        self.search(start, goal, algorithm)?;
        Ok(Round::Searched)
    }

    fn search(&mut self, start: String, goal: String, algorithm: RouteAlgorithm) -> Result<()> {
        let request = RouteRequest::new(start, goal, algorithm)
            .with_max_depth(default_max_depth(self.network));
        debug!(?request, "interactive search");

        match plan_route(self.network, &request) {
            Ok(plan) => {
                let summary = RouteSummary::from_plan(&plan, self.network.registry())?;
                write!(self.output, "{}", summary.render(RouteRenderMode::Report))?;
            }
            Err(RouteError::RouteNotFound { .. }) => writeln!(self.output, "No route found.")?,
            Err(err) => return Err(friendly_error(&request, err)),
        }
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Map a 1-based menu number onto [`RouteAlgorithm::ALL`].
fn parse_method(choice: &str) -> Option<RouteAlgorithm> {
    choice
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| RouteAlgorithm::ALL.get(index).copied())
}
