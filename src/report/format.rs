//! Number formatting for console output and reports
//!
//! Numbers print in `%g` style with 6 significant digits, the layout of the
//! saved report files.

/// Significant digits in `%g` output
const PRECISION: i32 = 6;

/// Format `x` like `printf("%g", x)`
///
/// Fixed notation when the decimal exponent is in `[-4, 6)`, scientific
/// otherwise; trailing zeros and a trailing decimal point are removed.
pub fn general(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target significant digits first; the exponent of the
    // rounded value decides the notation (999999.5 prints as 1e+06).
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, x);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

/// Two fixed decimals, used for percentages
pub fn fixed2(x: f64) -> String {
    format!("{:.2}", x)
}

/// Values joined by `sep`, each in general format
pub fn join(values: &[f64], sep: &str) -> String {
    values
        .iter()
        .map(|&v| general(v))
        .collect::<Vec<_>>()
        .join(sep)
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
