use polygonize::improve::ImproveStats;
use polygonize::point::PointSet;
use polygonize::tour::Tour;
use serde::Serialize;
use std::process::Command;

/// One labelled input point.
#[derive(Debug, Serialize)]
pub struct LabelledPoint {
    pub label: String,
    pub x: i64,
    pub y: i64,
}

/// A tour as reported: labels in visiting order plus its measures.
#[derive(Debug, Serialize)]
pub struct TourSummary {
    pub order: Vec<String>,
    pub perimeter: i128,
    pub intersections: usize,
}

impl From<&Tour> for TourSummary {
    fn from(tour: &Tour) -> Self {
        Self {
            order: tour.labels(),
            perimeter: tour.perimeter(),
            intersections: tour.intersection_count(),
        }
    }
}

/// Result of one `solve` invocation.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub code_rev: String,
    pub points: Vec<LabelledPoint>,
    pub construction: String,
    pub policy: String,
    pub initial: TourSummary,
    #[serde(rename = "final")]
    pub last: TourSummary,
    /// `converged`, `stuck` or `budget_exhausted`.
    pub outcome: &'static str,
    pub steps: usize,
    pub neighborhoods: usize,
    pub accepted: usize,
    pub anneal_iterations: usize,
}

impl RunSummary {
    pub fn new(
        points: &PointSet,
        construction: String,
        policy: String,
        initial: &Tour,
        last: &Tour,
        outcome: &'static str,
        stats: ImproveStats,
    ) -> Self {
        Self {
            code_rev: current_git_rev(),
            points: points
                .points()
                .iter()
                .map(|p| LabelledPoint {
                    label: p.label(),
                    x: p.x(),
                    y: p.y(),
                })
                .collect(),
            construction,
            policy,
            initial: initial.into(),
            last: last.into(),
            outcome,
            steps: stats.steps,
            neighborhoods: stats.neighborhoods,
            accepted: stats.accepted,
            anneal_iterations: stats.anneal_iterations,
        }
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("points:\n");
        for p in &self.points {
            out.push_str(&format!("  {} = ({}, {})\n", p.label, p.x, p.y));
        }
        out.push_str(&format!("construction: {}\n", self.construction));
        out.push_str(&format!(
            "initial: [{}] perimeter={} intersections={}\n",
            self.initial.order.join(", "),
            self.initial.perimeter,
            self.initial.intersections
        ));
        out.push_str(&format!("policy: {}\n", self.policy));
        out.push_str(&format!(
            "final: [{}] perimeter={} intersections={}\n",
            self.last.order.join(", "),
            self.last.perimeter,
            self.last.intersections
        ));
        out.push_str(&format!(
            "outcome: {} after {} step(s), {} neighborhood(s)\n",
            self.outcome, self.steps, self.neighborhoods
        ));
        out
    }
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
