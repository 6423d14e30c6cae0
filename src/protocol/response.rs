//! Response definitions and console rendering

use std::fmt;
use std::path::PathBuf;

use crate::config::DatasetKind;
use crate::error::StatsError;
use crate::report::format::{general, join};
use crate::report::{write_frequency_table, Summary};
use crate::stats::{FrequencyEntry, Quartiles};

use super::StatKind;

/// Result of executing a [`Command`](super::Command)
#[derive(Debug)]
pub enum Response {
    Inserted { value: f64 },
    InsertedRandom { count: usize },
    Loaded { path: PathBuf, count: usize },
    Removed { count: usize },
    KindSet { kind: DatasetKind },
    Size(usize),

    /// One statistic, computed under `kind`
    Stat {
        stat: StatKind,
        kind: DatasetKind,
        value: StatValue,
    },

    Frequency {
        table: Vec<FrequencyEntry>,
        total: usize,
    },

    Report(Box<Summary>),
    Saved { path: PathBuf },

    /// Buffer address, dataset kind and current values
    Overview {
        address: usize,
        kind: DatasetKind,
        values: Vec<f64>,
    },

    Cleared,
    Help,
    Quit,
}

/// Value of a single statistic
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Scalar(f64),
    List(Vec<f64>),
    Quartiles(Quartiles),
}

impl Response {
    pub fn is_quit(&self) -> bool {
        matches!(self, Response::Quit)
    }
}

/// Console line for a failed command
pub fn render_error(error: &StatsError) -> String {
    format!("Exception Error: {}", error)
}

/// Pointer-width, zero-padded, uppercase hex
pub fn format_address(address: usize) -> String {
    format!("{:0width$X}", address, width = std::mem::size_of::<usize>() * 2)
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Inserted { value } => {
                writeln!(f, "CONFIRMATION: Inserted {} into the Dataset.", general(*value))
            }
            Response::InsertedRandom { count } => {
                writeln!(f, "CONFIRMATION: Inserted {} random values.", count)
            }
            Response::Loaded { count, .. } => {
                writeln!(f, "CONFIRMATION: Inserted {} value(s) from file.", count)
            }
            Response::Removed { count } => writeln!(f, "Removed {} occurrence(s).", count),
            Response::KindSet { kind } => writeln!(f, "Dataset set to {}.", kind),
            Response::Size(n) => writeln!(f, "Size = {}", n),
            Response::Stat { stat, kind, value } => write_stat(f, *stat, *kind, value),
            Response::Frequency { table, total } => write_frequency_table(f, table, *total),
            Response::Report(summary) => write!(f, "{}", summary),
            Response::Saved { path } => writeln!(f, "Saved results to: {}", path.display()),
            Response::Overview {
                address,
                kind,
                values,
            } => {
                writeln!(f, "Descriptive Statistics Calculator")?;
                writeln!(f, "Address of Dynamic array: {}", format_address(*address))?;
                writeln!(f, "Dataset: ({})", kind)?;
                writeln!(f)?;
                writeln!(f, "{}", join(values, "  "))
            }
            Response::Cleared => writeln!(f, "Dataset cleared."),
            Response::Help => write_help(f),
            Response::Quit => writeln!(f, "Goodbye!"),
        }
    }
}

fn write_stat(
    f: &mut fmt::Formatter<'_>,
    stat: StatKind,
    kind: DatasetKind,
    value: &StatValue,
) -> fmt::Result {
    match value {
        StatValue::Quartiles(q) => {
            writeln!(f, "Quartiles:")?;
            writeln!(f, "Q1 = {}", general(q.q1))?;
            writeln!(f, "Q2 (Median) = {}", general(q.q2))?;
            writeln!(f, "Q3 = {}", general(q.q3))
        }
        StatValue::List(values) => {
            let label = match stat {
                StatKind::Outliers => "Outliers (Tukey +/- 1.5*IQR)",
                _ => "Mode(s)",
            };
            if values.is_empty() {
                writeln!(f, "{}: (none)", label)
            } else {
                writeln!(f, "{}: {}", label, join(values, " "))
            }
        }
        StatValue::Scalar(v) => writeln!(f, "{} = {}", scalar_label(stat, kind), general(*v)),
    }
}

fn scalar_label(stat: StatKind, kind: DatasetKind) -> String {
    let label = match stat {
        StatKind::Min => "Minimum",
        StatKind::Max => "Maximum",
        StatKind::Range => "Range",
        StatKind::Sum => "Sum",
        StatKind::Mean => "Mean",
        StatKind::Median => "Median",
        StatKind::StdDev => return format!("Standard Deviation ({})", kind.label()),
        StatKind::Variance => return format!("Variance ({})", kind.label()),
        StatKind::Midrange => "Midrange",
        StatKind::Iqr => "Interquartile Range (IQR)",
        StatKind::SumSquares => "Sum of Squares",
        StatKind::MeanAbsDeviation => "Mean Absolute Deviation",
        StatKind::Rms => "Root Mean Square (RMS)",
        StatKind::Sem => "Standard Error of Mean (SEM)",
        StatKind::Skewness => "Skewness",
        StatKind::Kurtosis => "Kurtosis (Pearson)",
        StatKind::KurtosisExcess => "Kurtosis Excess",
        StatKind::CoefficientOfVariation => "Coefficient of Variation",
        StatKind::RelativeStdDeviation => "Relative Standard Deviation (%)",
        StatKind::Modes | StatKind::Quartiles | StatKind::Outliers => stat.keyword(),
    };
    label.to_string()
}

fn write_help(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Commands (menu alias in brackets):")?;
    writeln!(f, "  [0] quit                 exit the shell")?;
    writeln!(f, "  [1] kind <S|P>           use sample or population statistics")?;
    writeln!(f, "  [2] insert <x>           insert one value")?;
    writeln!(f, "      random <count>       insert random integers")?;
    writeln!(f, "      load <path>          insert numbers from a file")?;
    writeln!(f, "  [3] delete <x>           delete all occurrences of a value")?;
    writeln!(f, "  [D] size                 number of values")?;
    for stat in StatKind::ALL {
        writeln!(
            f,
            "  [{}] {:<20} {}",
            stat.letter(),
            stat.keyword(),
            stat.description()
        )?;
    }
    writeln!(f, "  [X] freq                 display frequency table")?;
    writeln!(f, "  [Y] report               display all statistical results")?;
    writeln!(f, "  [Z] save [path]          output all statistical results to a file")?;
    writeln!(f, "      show                 show address, dataset kind and values")?;
    writeln!(f, "      clear                remove all values")
}
