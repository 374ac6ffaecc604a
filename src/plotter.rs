//! Turns a list of expression strings into a [`Figure`] sampled over a fixed domain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::expr::{self, EvalError};

/// Evaluation failure for one expression of a plot request.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot evaluate '{expression}': {source}")]
pub struct PlotError {
    pub expression: String,
    #[source]
    pub source: EvalError,
}

/// Most samples a domain may produce. Every expression is evaluated into
/// arrays of this length, so larger domains are rejected up front.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Half-open sampling range `[min, max)` with a fixed step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: -20.0,
            max: 20.0,
            step: 0.01,
        }
    }
}

impl Domain {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err("bounds and step must be finite".to_string());
        }
        if self.step <= 0.0 {
            return Err(format!("step must be positive, got {}", self.step));
        }
        if self.max <= self.min {
            return Err(format!("max ({}) must exceed min ({})", self.max, self.min));
        }
        let count = ((self.max - self.min) / self.step).ceil();
        if !count.is_finite() || count > MAX_SAMPLES as f64 {
            return Err(format!(
                "({} - {}) / {} gives more than {} samples",
                self.max, self.min, self.step, MAX_SAMPLES
            ));
        }
        Ok(())
    }

    /// Number of samples, `ceil((max - min) / step)`; zero for an invalid domain.
    pub fn len(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        ((self.max - self.min) / self.step).ceil() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn samples(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }
}

/// Title, axis labels and line look of a figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
    pub line_width: f32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            title: "Function plots".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            show_legend: true,
            line_width: 1.5,
        }
    }
}

/// One plotted line; `label` is the expression exactly as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    /// Runs of consecutive finite points. Non-finite samples (poles, log of a
    /// negative) split the line instead of being drawn.
    pub fn segments(&self) -> Vec<&[[f64; 2]]> {
        self.points
            .split(|p| !(p[0].is_finite() && p[1].is_finite()))
            .filter(|run| !run.is_empty())
            .collect()
    }
}

/// A rendered-ready chart: every series shares the same axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub style: FigureStyle,
    pub series: Vec<Series>,
}

impl Figure {
    /// Legend entries, in plot order.
    pub fn legend(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExpressionPlotter {
    pub domain: Domain,
    pub style: FigureStyle,
}

impl ExpressionPlotter {
    pub fn new(domain: Domain, style: FigureStyle) -> Self {
        Self { domain, style }
    }

    /// Plot with the configured figure style.
    pub fn plot(&self, expressions: &[String]) -> Result<Figure, PlotError> {
        self.plot_styled(expressions, &self.style)
    }

    /// Evaluate every expression over the domain and collect the series.
    ///
    /// Fails on the first expression that does not evaluate; no partial figure
    /// is returned.
    pub fn plot_styled(
        &self,
        expressions: &[String],
        style: &FigureStyle,
    ) -> Result<Figure, PlotError> {
        let xs = self.domain.samples();
        let mut series = Vec::with_capacity(expressions.len());
        for expression in expressions {
            let ys = expr::evaluate(expression, &xs).map_err(|source| PlotError {
                expression: expression.clone(),
                source,
            })?;
            let points = xs.iter().zip(ys).map(|(&x, y)| [x, y]).collect();
            series.push(Series {
                label: expression.clone(),
                points,
            });
        }
        tracing::debug!(series = series.len(), samples = xs.len(), "figure built");
        Ok(Figure {
            style: style.clone(),
            series,
        })
    }
}
