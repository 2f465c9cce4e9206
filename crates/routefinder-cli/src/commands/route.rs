//! Route command handler for computing paths between two locations.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use routefinder_lib::{plan_route, Network, RouteAlgorithm, RouteRequest, RouteSummary};

use super::{default_max_depth, friendly_error};
use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location name.
    pub from: String,
    /// Destination location name.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
    /// Depth bound for iterative deepening.
    pub max_depth: Option<usize>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`]. Iterative deepening
    /// always gets a bound so the command terminates for unreachable goals.
    pub fn to_request(&self, network: &Network) -> RouteRequest {
        let max_depth = self
            .max_depth
            .unwrap_or_else(|| default_max_depth(network));
        RouteRequest::new(&self.from, &self.to, self.algorithm).with_max_depth(max_depth)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command<W: Write>(
    network: &Network,
    args: &RouteCommandArgs,
    format: OutputFormat,
    palette: &ColorPalette,
    out: &mut W,
) -> Result<()> {
    let request = args.to_request(network);
    debug!(?request, "planning route");

    let plan = plan_route(network, &request).map_err(|err| friendly_error(&request, err))?;
    let summary = RouteSummary::from_plan(&plan, network.registry())
        .context("failed to build route summary for display")?;

    format
        .render_route(&summary, palette, out)
        .context("failed to write route")
}
