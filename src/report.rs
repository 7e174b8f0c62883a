//! Text rendering of demonstration results.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use tracing::warn;

const MARKERS: &[char] = &['*', '+', 'o', 'x', '#', '@'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned text tables
    #[default]
    Table,
    /// ASCII line plots for curves, tables for everything else
    Plot,
    Json,
}

#[derive(Debug, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// One or more membership arrays over a shared domain
    Curves {
        title: String,
        x: Vec<f64>,
        series: Vec<Series>,
    },
    Matrix {
        title: String,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        rows: Vec<Vec<f64>>,
    },
    Flags {
        title: String,
        flags: Vec<(String, bool)>,
    },
}

impl Report {
    pub fn title(&self) -> &str {
        match self {
            Self::Curves { title, .. } | Self::Matrix { title, .. } | Self::Flags { title, .. } => title,
        }
    }
}

pub struct Renderer {
    format: Format,
    width: usize,
    height: usize,
}

impl Renderer {
    pub fn new(format: Format, width: usize, height: usize) -> Self {
        Self {
            format,
            width: width.max(2),
            height: height.max(2),
        }
    }

    pub fn render(&self, out: &mut impl Write, report: &Report) -> io::Result<()> {
        match (self.format, report) {
            (Format::Json, _) => {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)
            },
            (Format::Plot, Report::Curves { title, x, series }) => self.plot(out, title, x, series),
            (Format::Plot, _) => {
                warn!(title = report.title(), "only curves can be plotted, printing a table instead");
                self.table(out, report)
            },
            (Format::Table, _) => self.table(out, report),
        }
    }

    fn table(&self, out: &mut impl Write, report: &Report) -> io::Result<()> {
        writeln!(out, "\n== {} ==", report.title())?;

        match report {
            Report::Curves { x, series, .. } => {
                write!(out, "{:>10}", "x")?;
                for s in series {
                    write!(out, " {:>14}", s.name)?;
                }
                writeln!(out)?;

                let stride = (x.len() / self.height).max(1);
                let mut indices: Vec<usize> = (0..x.len()).step_by(stride).collect();

                if let Some(last) = x.len().checked_sub(1) {
                    if indices.last() != Some(&last) {
                        indices.push(last);
                    }
                }

                for i in indices {
                    write!(out, "{:>10.3}", x[i])?;
                    for s in series {
                        write!(out, " {:>14.4}", s.values[i])?;
                    }
                    writeln!(out)?;
                }
            },
            Report::Matrix {
                row_labels,
                col_labels,
                rows,
                ..
            } => {
                let label_width = row_labels.iter().map(String::len).max().unwrap_or(0).max(2);
                let cell_width = col_labels.iter().map(String::len).max().unwrap_or(0).max(4);

                write!(out, " {:label_width$} |", "")?;
                for label in col_labels {
                    write!(out, " {label:>cell_width$} |")?;
                }
                writeln!(out)?;
                writeln!(out, "{}", "-".repeat(label_width + 3 + (cell_width + 3) * col_labels.len()))?;

                for (label, row) in row_labels.iter().zip(rows) {
                    write!(out, " {label:label_width$} |")?;
                    for value in row {
                        write!(out, " {value:>cell_width$.2} |")?;
                    }
                    writeln!(out)?;
                }
            },
            Report::Flags { flags, .. } => {
                for (name, value) in flags {
                    writeln!(out, "{name}: {value}")?;
                }
            },
        }

        Ok(())
    }

    fn plot(&self, out: &mut impl Write, title: &str, x: &[f64], series: &[Series]) -> io::Result<()> {
        let finite = |v: &&f64| v.is_finite();
        let x_min = x.iter().filter(finite).copied().fold(f64::INFINITY, f64::min);
        let x_max = x.iter().filter(finite).copied().fold(f64::NEG_INFINITY, f64::max);
        let values = series.iter().flat_map(|s| s.values.iter()).filter(finite).copied();
        let (y_min, y_max) = values.fold((0f64, 1f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let mut canvas = vec![vec![' '; self.width]; self.height];

        writeln!(out, "\n== {title} ==")?;

        if x_min >= x_max {
            return writeln!(out, "(nothing to plot)");
        }

        for (s, marker) in series.iter().zip(MARKERS.iter().cycle()) {
            for (&xi, &yi) in x.iter().zip(&s.values) {
                if !xi.is_finite() || !yi.is_finite() {
                    continue;
                }

                let col = ((xi - x_min) / (x_max - x_min) * (self.width - 1) as f64).round() as usize;
                let row = ((y_max - yi) / (y_max - y_min) * (self.height - 1) as f64).round() as usize;

                canvas[row.min(self.height - 1)][col.min(self.width - 1)] = *marker;
            }
        }

        for (i, line) in canvas.iter().enumerate() {
            let axis = match i {
                0 => format!("{y_max:>6.2}"),
                i if i == self.height - 1 => format!("{y_min:>6.2}"),
                _ => String::new(),
            };

            writeln!(out, "{axis:>6} |{}", line.iter().collect::<String>())?;
        }

        writeln!(out, "{:>6} +{}", "", "-".repeat(self.width))?;
        writeln!(out, "{:>8}{x_min:<.2}{x_max:>w$.2}", "", w = self.width.saturating_sub(6))?;

        for (s, marker) in series.iter().zip(MARKERS.iter().cycle()) {
            writeln!(out, "  {marker} {}", s.name)?;
        }

        Ok(())
    }
}
