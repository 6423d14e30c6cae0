//! Command definitions

use std::path::PathBuf;

use crate::config::DatasetKind;

/// A single request from the driver
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert one value
    Insert { value: f64 },

    /// Insert `count` random integers
    InsertRandom { count: usize },

    /// Insert every number found in a whitespace-separated file
    Load { path: PathBuf },

    /// Remove all occurrences of a value
    Delete { value: f64 },

    /// Switch between sample and population statistics
    SetKind { kind: DatasetKind },

    /// Number of stored values
    Size,

    /// Compute one statistic
    Stat { stat: StatKind },

    /// Print the frequency table
    Frequency,

    /// Render the full report
    Report,

    /// Write the full report to a file (configured default when `None`)
    Save { path: Option<PathBuf> },

    /// Show the buffer address, dataset kind and values
    Show,

    /// Remove every value
    Clear,

    Help,
    Quit,
}

/// Individually requestable statistics
///
/// Each variant has a menu letter (`A`..`W`, skipping `D` which is
/// [`Command::Size`]) and a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Min,
    Max,
    Range,
    Sum,
    Mean,
    Median,
    Modes,
    StdDev,
    Variance,
    Midrange,
    Quartiles,
    Iqr,
    Outliers,
    SumSquares,
    MeanAbsDeviation,
    Rms,
    Sem,
    Skewness,
    Kurtosis,
    KurtosisExcess,
    CoefficientOfVariation,
    RelativeStdDeviation,
}

impl StatKind {
    pub const ALL: [StatKind; 22] = [
        StatKind::Min,
        StatKind::Max,
        StatKind::Range,
        StatKind::Sum,
        StatKind::Mean,
        StatKind::Median,
        StatKind::Modes,
        StatKind::StdDev,
        StatKind::Variance,
        StatKind::Midrange,
        StatKind::Quartiles,
        StatKind::Iqr,
        StatKind::Outliers,
        StatKind::SumSquares,
        StatKind::MeanAbsDeviation,
        StatKind::Rms,
        StatKind::Sem,
        StatKind::Skewness,
        StatKind::Kurtosis,
        StatKind::KurtosisExcess,
        StatKind::CoefficientOfVariation,
        StatKind::RelativeStdDeviation,
    ];

    /// Menu letter
    pub fn letter(self) -> char {
        match self {
            StatKind::Min => 'A',
            StatKind::Max => 'B',
            StatKind::Range => 'C',
            StatKind::Sum => 'E',
            StatKind::Mean => 'F',
            StatKind::Median => 'G',
            StatKind::Modes => 'H',
            StatKind::StdDev => 'I',
            StatKind::Variance => 'J',
            StatKind::Midrange => 'K',
            StatKind::Quartiles => 'L',
            StatKind::Iqr => 'M',
            StatKind::Outliers => 'N',
            StatKind::SumSquares => 'O',
            StatKind::MeanAbsDeviation => 'P',
            StatKind::Rms => 'Q',
            StatKind::Sem => 'R',
            StatKind::Skewness => 'S',
            StatKind::Kurtosis => 'T',
            StatKind::KurtosisExcess => 'U',
            StatKind::CoefficientOfVariation => 'V',
            StatKind::RelativeStdDeviation => 'W',
        }
    }

    /// Keyword accepted by `stat <keyword>`
    pub fn keyword(self) -> &'static str {
        match self {
            StatKind::Min => "min",
            StatKind::Max => "max",
            StatKind::Range => "range",
            StatKind::Sum => "sum",
            StatKind::Mean => "mean",
            StatKind::Median => "median",
            StatKind::Modes => "mode",
            StatKind::StdDev => "stdev",
            StatKind::Variance => "variance",
            StatKind::Midrange => "midrange",
            StatKind::Quartiles => "quartiles",
            StatKind::Iqr => "iqr",
            StatKind::Outliers => "outliers",
            StatKind::SumSquares => "sumsq",
            StatKind::MeanAbsDeviation => "mad",
            StatKind::Rms => "rms",
            StatKind::Sem => "sem",
            StatKind::Skewness => "skewness",
            StatKind::Kurtosis => "kurtosis",
            StatKind::KurtosisExcess => "kurtosis-excess",
            StatKind::CoefficientOfVariation => "cv",
            StatKind::RelativeStdDeviation => "rsd",
        }
    }

    /// Menu description
    pub fn description(self) -> &'static str {
        match self {
            StatKind::Min => "Find Minimum",
            StatKind::Max => "Find Maximum",
            StatKind::Range => "Find Range",
            StatKind::Sum => "Find Sum",
            StatKind::Mean => "Find Mean",
            StatKind::Median => "Find Median",
            StatKind::Modes => "Find Mode(s)",
            StatKind::StdDev => "Find Standard Deviation",
            StatKind::Variance => "Find Variance",
            StatKind::Midrange => "Find Midrange",
            StatKind::Quartiles => "Find Quartiles",
            StatKind::Iqr => "Find Interquartile Range",
            StatKind::Outliers => "Find Outliers",
            StatKind::SumSquares => "Find Sum of Squares",
            StatKind::MeanAbsDeviation => "Find Mean Absolute Deviation",
            StatKind::Rms => "Find Root Mean Square",
            StatKind::Sem => "Find Standard Error of Mean",
            StatKind::Skewness => "Find Skewness",
            StatKind::Kurtosis => "Find Kurtosis",
            StatKind::KurtosisExcess => "Find Kurtosis Excess",
            StatKind::CoefficientOfVariation => "Find Coefficient of Variation",
            StatKind::RelativeStdDeviation => "Find Relative Standard Deviation",
        }
    }

    pub fn from_letter(letter: char) -> Option<StatKind> {
        let letter = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|s| s.letter() == letter)
    }

    /// Keyword lookup, case-insensitive
    pub fn from_keyword(word: &str) -> Option<StatKind> {
        let word = word.to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.keyword() == word)
    }
}
