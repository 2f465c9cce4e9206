use std::fmt::Write;

use serde::Serialize;

use crate::distance::leg_distance;
use crate::error::{Error, Result};
use crate::location::LocationRegistry;
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Numbered steps with per-leg distances.
    PlainText,
    /// One location per line followed by time and distance totals.
    Report,
    /// A single `A -> B -> C` line.
    Compact,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    /// Distance from the previous step; absent for the first step and for
    /// legs touching a location without coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_km: Option<f64>,
    pub cumulative_km: f64,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub total_distance_km: f64,
    pub elapsed_ms: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with per-leg distances. The
    /// total is the plan's own `distance_km`.
    pub fn from_plan(plan: &RoutePlan, registry: &LocationRegistry) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let mut cumulative = 0.0;
        let mut previous: Option<&str> = None;
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let leg_km = previous.and_then(|from| leg_distance(registry, from, name));
                cumulative += leg_km.unwrap_or(0.0);
                previous = Some(name.as_str());
                RouteStep {
                    index,
                    name: name.clone(),
                    leg_km,
                    cumulative_km: cumulative,
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            algorithm: plan.algorithm,
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            hops: plan.hop_count(),
            total_distance_km: plan.distance_km,
            elapsed_ms: plan.elapsed.as_secs_f64() * 1000.0,
            steps,
        })
    }

    /// Serialise the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Report => self.render_report(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, algorithm: {})",
            self.start, self.goal, self.hops, self.algorithm
        );
        for step in &self.steps {
            match step.leg_km {
                Some(leg) => {
                    let _ = writeln!(buffer, "{:>3}: {} (+{:.1} km)", step.index, step.name, leg);
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.name);
                }
            }
        }
        let _ = writeln!(buffer, "Total distance: {:.1} km", self.total_distance_km);
        buffer
    }

    fn render_report(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Route found:");
        for step in &self.steps {
            let _ = writeln!(buffer, "{}", step.name);
        }
        let _ = writeln!(buffer, "Total time: {:.3} seconds", self.elapsed_ms / 1000.0);
        let _ = writeln!(
            buffer,
            "Total distance: {:.2} kilometers",
            self.total_distance_km
        );
        buffer
    }

    fn render_compact(&self) -> String {
        let joined = self
            .steps
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{joined}\n")
    }
}
