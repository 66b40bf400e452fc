use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{particles::Swarm, Float};

/// A struct that holds the results of a particle swarm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// The unique identifier of the run.
    pub run_id: String,
    /// The best score found.
    pub global_best_score: Float,
    /// The position of [`RunSummary::global_best_score`], or [`None`] if nothing was evaluated.
    pub global_best_position: Option<Vec<Float>>,
    /// Wall-clock seconds between building the swarm and finishing the run. This is [`None`]
    /// while the run is unfinished.
    pub time_taken_seconds: Option<Float>,
    /// Whether the global best score came within tolerance of the known optimum.
    pub converged: bool,
    /// The iteration on which the swarm converged.
    pub convergence_iteration: Option<usize>,
    /// The share of the iteration budget, in percent, used before converging.
    pub convergence_rate: Option<Float>,
}

impl From<&Swarm> for RunSummary {
    fn from(swarm: &Swarm) -> Self {
        Self {
            run_id: swarm.run_id().to_string(),
            global_best_score: swarm.global_best_score,
            global_best_position: swarm
                .global_best_position
                .as_ref()
                .map(|x| x.iter().copied().collect()),
            time_taken_seconds: swarm.finished_at.map(|finished| {
                (finished - swarm.created_at()).num_microseconds().unwrap_or(i64::MAX) as Float
                    / 1e6
            }),
            converged: swarm.converged,
            convergence_iteration: swarm.convergence_iteration,
            convergence_rate: swarm.convergence_rate,
        }
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use tabled::{
            builder::Builder,
            settings::{
                object::Row,
                style::HorizontalLine,
                themes::BorderCorrection,
                Alignment, Padding, Span, Style, Theme,
            },
        };
        let best_position = self.global_best_position.as_ref().map_or_else(
            || "-".to_string(),
            |x| {
                let coords: Vec<String> = x.iter().map(|xi| format!("{:.5}", xi)).collect();
                format!("[{}]", coords.join(", "))
            },
        );
        let time_taken = self
            .time_taken_seconds
            .map_or_else(|| "-".to_string(), |t| format!("{:.3} s", t));
        let status = match (self.convergence_iteration, self.convergence_rate) {
            (Some(i), Some(r)) if self.converged => {
                format!("Converged at iteration {} ({:.1}% of budget)", i, r)
            }
            _ => "Not converged".to_string(),
        };
        let mut builder = Builder::default();
        builder.push_record(["RUN RESULTS"]);
        builder.push_record(["Run ID", self.run_id.as_str()]);
        builder.push_record(["Best score".to_string(), format!("{:.5}", self.global_best_score)]);
        builder.push_record(["Best position", best_position.as_str()]);
        builder.push_record(["Time taken", time_taken.as_str()]);
        builder.push_record(["Status", status.as_str()]);
        let mut table = builder.build();
        let mut style = Theme::from_style(Style::rounded().remove_horizontals());
        style.insert_horizontal_line(1, HorizontalLine::inherit(Style::modern()));

        table
            .with(style)
            .modify(Row::from(0), (Padding::new(1, 1, 1, 1), Alignment::center()))
            .modify((0, 0), Span::column(2))
            .with(BorderCorrection::span());

        f.write_str(&table.to_string())
    }
}
