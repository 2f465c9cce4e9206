//! Output formatting for route rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use routefinder_lib::{RouteAlgorithm, RouteRenderMode, RouteStep, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable route with tagged endpoints.
    #[default]
    Text,
    /// Numbered steps without colour or tags.
    Plain,
    /// The route on a single `A -> B -> C` line.
    Compact,
    /// Pretty-printed JSON summary.
    Json,
}

impl OutputFormat {
    /// Write a route summary to `out` in this format.
    pub fn render_route<W: Write>(
        self,
        summary: &RouteSummary,
        palette: &ColorPalette,
        out: &mut W,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => render_text(summary, palette, out),
            OutputFormat::Plain => {
                out.write_all(summary.render(RouteRenderMode::PlainText).as_bytes())
            }
            OutputFormat::Compact => {
                out.write_all(summary.render(RouteRenderMode::Compact).as_bytes())
            }
            OutputFormat::Json => write_json(summary, out),
        }
    }

    /// Write the list of supported algorithms to `out`.
    pub fn render_algorithms<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            OutputFormat::Compact => {
                for algorithm in RouteAlgorithm::ALL {
                    writeln!(out, "{algorithm}")?;
                }
                Ok(())
            }
            OutputFormat::Text | OutputFormat::Plain => {
                for (index, algorithm) in RouteAlgorithm::ALL.iter().enumerate() {
                    let costs = if algorithm.is_cost_aware() {
                        "uses coordinates"
                    } else {
                        "ignores coordinates"
                    };
                    writeln!(
                        out,
                        "{}. {:<11} {} ({})",
                        index + 1,
                        algorithm.to_string(),
                        algorithm.description(),
                        costs
                    )?;
                }
                Ok(())
            }
            OutputFormat::Json => {
                let entries: Vec<AlgorithmEntry> = RouteAlgorithm::ALL
                    .iter()
                    .map(|&algorithm| AlgorithmEntry {
                        name: algorithm,
                        description: algorithm.description(),
                        uses_coordinates: algorithm.is_cost_aware(),
                    })
                    .collect();
                write_json(&entries, out)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct AlgorithmEntry {
    name: RouteAlgorithm,
    description: &'static str,
    uses_coordinates: bool,
}

fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Render a route summary as tagged text lines.
pub fn render_text<W: Write>(
    summary: &RouteSummary,
    palette: &ColorPalette,
    out: &mut W,
) -> io::Result<()> {
    let p = palette;
    writeln!(
        out,
        "Route from {}{}{} to {}{}{} ({} hops; algorithm: {}):",
        p.white_bold, summary.start, p.reset, p.white_bold, summary.goal, p.reset, summary.hops,
        summary.algorithm
    )?;

    let len = summary.steps.len();
    for (i, step) in summary.steps.iter().enumerate() {
        let (tag_color, tag) = if i == 0 {
            (p.tag_start, " STRT ")
        } else if i + 1 == len {
            (p.tag_goal, " GOAL ")
        } else {
            ("", "      ")
        };
        write!(out, "{tag_color}{tag}{} {}", p.reset, step.name)?;
        render_leg(step, palette, out)?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "\n{}Total distance:{} {:.1} km",
        p.cyan, p.reset, summary.total_distance_km
    )
}

fn render_leg<W: Write>(step: &RouteStep, palette: &ColorPalette, out: &mut W) -> io::Result<()> {
    match step.leg_km {
        Some(leg) => write!(out, " {}(+{:.1} km){}", palette.gray, leg, palette.reset),
        None if step.index > 0 => write!(out, " {}(no coordinates){}", palette.gray, palette.reset),
        None => Ok(()),
    }
}
