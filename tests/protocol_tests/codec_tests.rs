//! Codec Tests
//!
//! Tests for shell line decoding, canonical encoding and console rendering.

use std::path::PathBuf;

use statsarray::protocol::{
    decode_command, decode_value, encode_command, format_address, render_error, Command,
    Response, StatKind, StatValue,
};
use statsarray::{DatasetKind, ErrorKind, Quartiles, StatsError};

// =============================================================================
// Command Decoding Tests
// =============================================================================

#[test]
fn test_decode_insert() {
    assert_eq!(
        decode_command("insert 2.5").unwrap(),
        Command::Insert { value: 2.5 }
    );
    assert_eq!(
        decode_command("  ADD   -7  ").unwrap(),
        Command::Insert { value: -7.0 }
    );
    assert_eq!(
        decode_command("2 1e3").unwrap(),
        Command::Insert { value: 1000.0 }
    );
}

#[test]
fn test_decode_delete() {
    assert_eq!(
        decode_command("delete 3").unwrap(),
        Command::Delete { value: 3.0 }
    );
    assert_eq!(
        decode_command("3 0.5").unwrap(),
        Command::Delete { value: 0.5 }
    );
}

#[test]
fn test_decode_kind() {
    assert_eq!(
        decode_command("1 P").unwrap(),
        Command::SetKind {
            kind: DatasetKind::Population
        }
    );
    assert_eq!(
        decode_command("kind sample").unwrap(),
        Command::SetKind {
            kind: DatasetKind::Sample
        }
    );
    assert!(decode_command("kind q").is_err());
    assert!(decode_command("1").is_err());
}

#[test]
fn test_decode_menu_letters() {
    assert_eq!(
        decode_command("A").unwrap(),
        Command::Stat { stat: StatKind::Min }
    );
    assert_eq!(
        decode_command("j").unwrap(),
        Command::Stat {
            stat: StatKind::Variance
        }
    );
    assert_eq!(
        decode_command("W").unwrap(),
        Command::Stat {
            stat: StatKind::RelativeStdDeviation
        }
    );
    assert_eq!(decode_command("D").unwrap(), Command::Size);
    assert_eq!(decode_command("x").unwrap(), Command::Frequency);
    assert_eq!(decode_command("Y").unwrap(), Command::Report);
    assert_eq!(decode_command("Z").unwrap(), Command::Save { path: None });
    assert_eq!(decode_command("0").unwrap(), Command::Quit);
}

#[test]
fn test_every_letter_and_keyword_decodes() {
    for stat in StatKind::ALL {
        assert_eq!(
            decode_command(&stat.letter().to_string()).unwrap(),
            Command::Stat { stat }
        );
        assert_eq!(
            decode_command(stat.keyword()).unwrap(),
            Command::Stat { stat }
        );
        assert_eq!(
            decode_command(&format!("stat {}", stat.keyword())).unwrap(),
            Command::Stat { stat }
        );
    }
}

#[test]
fn test_letters_are_distinct() {
    let mut letters: Vec<char> = StatKind::ALL.iter().map(|s| s.letter()).collect();
    letters.sort_unstable();
    letters.dedup();
    assert_eq!(letters.len(), StatKind::ALL.len());
    assert!(!letters.contains(&'D'));
}

#[test]
fn test_decode_save_with_path() {
    assert_eq!(
        decode_command("save out/report.txt").unwrap(),
        Command::Save {
            path: Some(PathBuf::from("out/report.txt"))
        }
    );
}

#[test]
fn test_decode_random_and_load() {
    assert_eq!(
        decode_command("random 20").unwrap(),
        Command::InsertRandom { count: 20 }
    );
    assert!(decode_command("random -1").is_err());
    assert!(decode_command("random").is_err());

    assert_eq!(
        decode_command("load data.txt").unwrap(),
        Command::Load {
            path: PathBuf::from("data.txt")
        }
    );
    assert!(decode_command("load").is_err());
}

#[test]
fn test_decode_plain_commands() {
    assert_eq!(decode_command("size").unwrap(), Command::Size);
    assert_eq!(decode_command("show").unwrap(), Command::Show);
    assert_eq!(decode_command("clear").unwrap(), Command::Clear);
    assert_eq!(decode_command("help").unwrap(), Command::Help);
    assert_eq!(decode_command("?").unwrap(), Command::Help);
    assert_eq!(decode_command("EXIT").unwrap(), Command::Quit);
}

// =============================================================================
// Decoding Error Tests
// =============================================================================

#[test]
fn test_decode_errors() {
    for line in ["", "   ", "bogus", "stat nothing", "insert", "insert abc", "size 3", "mean 5"] {
        let err = decode_command(line).unwrap_err();
        assert!(matches!(err, StatsError::Command(_)), "{:?}", line);
        assert_eq!(err.kind(), ErrorKind::Command);
    }
}

#[test]
fn test_unknown_command_message() {
    let err = decode_command("frobnicate").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Command error: unknown command: frobnicate (type 'help')"
    );
}

#[test]
fn test_decode_value() {
    assert_eq!(decode_value("42").unwrap(), 42.0);
    assert_eq!(decode_value("-0.125").unwrap(), -0.125);
    assert!(decode_value("").is_err());
    assert!(decode_value("nan").is_err());
    assert!(decode_value("inf").is_err());
    assert!(decode_value("1e999").is_err());
    assert!(decode_value("12kg").is_err());
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_decode_round_trip() {
    let commands = vec![
        Command::Insert { value: -2.75 },
        Command::InsertRandom { count: 5 },
        Command::Load {
            path: PathBuf::from("numbers.txt"),
        },
        Command::Delete { value: 8.0 },
        Command::SetKind {
            kind: DatasetKind::Population,
        },
        Command::Size,
        Command::Stat {
            stat: StatKind::KurtosisExcess,
        },
        Command::Frequency,
        Command::Report,
        Command::Save { path: None },
        Command::Save {
            path: Some(PathBuf::from("results.txt")),
        },
        Command::Show,
        Command::Clear,
        Command::Help,
        Command::Quit,
    ];

    for command in commands {
        let line = encode_command(&command);
        assert_eq!(decode_command(&line).unwrap(), command, "{}", line);
    }
}

#[test]
fn test_encode_canonical_text() {
    assert_eq!(encode_command(&Command::Insert { value: 3.0 }), "insert 3");
    assert_eq!(
        encode_command(&Command::Stat { stat: StatKind::Iqr }),
        "stat iqr"
    );
    assert_eq!(
        encode_command(&Command::SetKind {
            kind: DatasetKind::Sample
        }),
        "kind sample"
    );
}

// =============================================================================
// Response Rendering Tests
// =============================================================================

#[test]
fn test_render_confirmations() {
    assert_eq!(
        Response::Inserted { value: 3.5 }.to_string(),
        "CONFIRMATION: Inserted 3.5 into the Dataset.\n"
    );
    assert_eq!(
        Response::Removed { count: 2 }.to_string(),
        "Removed 2 occurrence(s).\n"
    );
    assert_eq!(Response::Size(4).to_string(), "Size = 4\n");
    assert_eq!(
        Response::KindSet {
            kind: DatasetKind::Population
        }
        .to_string(),
        "Dataset set to Population.\n"
    );
}

#[test]
fn test_render_scalar_stats() {
    let mean = Response::Stat {
        stat: StatKind::Mean,
        kind: DatasetKind::Sample,
        value: StatValue::Scalar(4.75),
    };
    assert_eq!(mean.to_string(), "Mean = 4.75\n");

    let stdev = Response::Stat {
        stat: StatKind::StdDev,
        kind: DatasetKind::Population,
        value: StatValue::Scalar(2.0),
    };
    assert_eq!(stdev.to_string(), "Standard Deviation (population) = 2\n");
}

#[test]
fn test_render_list_and_quartiles() {
    let modes = Response::Stat {
        stat: StatKind::Modes,
        kind: DatasetKind::Sample,
        value: StatValue::List(vec![1.0, 9.0]),
    };
    assert_eq!(modes.to_string(), "Mode(s): 1 9\n");

    let none = Response::Stat {
        stat: StatKind::Outliers,
        kind: DatasetKind::Sample,
        value: StatValue::List(Vec::new()),
    };
    assert_eq!(none.to_string(), "Outliers (Tukey +/- 1.5*IQR): (none)\n");

    let quartiles = Response::Stat {
        stat: StatKind::Quartiles,
        kind: DatasetKind::Sample,
        value: StatValue::Quartiles(Quartiles {
            q1: 3.0,
            q2: 4.0,
            q3: 6.5,
        }),
    };
    assert_eq!(
        quartiles.to_string(),
        "Quartiles:\nQ1 = 3\nQ2 (Median) = 4\nQ3 = 6.5\n"
    );
}

#[test]
fn test_render_overview() {
    let overview = Response::Overview {
        address: 0xBEEF,
        kind: DatasetKind::Sample,
        values: vec![1.0, 2.5, 10.0],
    };
    let text = overview.to_string();

    assert!(text.starts_with("Descriptive Statistics Calculator\n"));
    assert!(text.contains(&format!(
        "Address of Dynamic array: {}\n",
        format_address(0xBEEF)
    )));
    assert!(text.contains("Dataset: (Sample)\n"));
    assert!(text.ends_with("\n1  2.5  10\n"));
}

#[test]
fn test_format_address_is_padded_hex() {
    let width = std::mem::size_of::<usize>() * 2;
    let text = format_address(0xBEEF);

    assert_eq!(text.len(), width);
    assert!(text.ends_with("BEEF"));
    assert!(text.trim_end_matches("BEEF").chars().all(|c| c == '0'));
}

#[test]
fn test_render_error() {
    let err = StatsError::DatasetEmpty { operation: "Mean" };
    assert_eq!(render_error(&err), "Exception Error: Dataset is empty.");
    assert!(Response::Quit.is_quit());
    assert!(!Response::Cleared.is_quit());
}
