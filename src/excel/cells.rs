//! Cell coercion helpers for `calamine::Data`.

use calamine::Data;

/// Cell as a trimmed, non-empty string. Numbers render without a trailing
/// `.0`; empty/error cells yield `None`.
pub fn cell_str(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Cell as a number. Numeric strings parse; anything else yields `None`.
pub fn cell_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Cell truthiness: `true`, a nonzero number, or a non-empty string.
///
/// The workbook marks "arrived" with anything from TRUE to an `x`.
pub fn cell_truthy(cell: &Data) -> bool {
    match cell {
        Data::Bool(b) => *b,
        Data::Float(f) => *f != 0.0,
        Data::Int(i) => *i != 0,
        Data::String(s) => !s.trim().is_empty(),
        _ => false,
    }
}

/// Date-formatted cell as an ISO `YYYY-MM-DD` string. Non-date cells yield
/// `None`.
pub fn cell_date(cell: &Data) -> Option<String> {
    match cell {
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|ndt| ndt.date().format("%Y-%m-%d").to_string()),
        Data::DateTimeIso(s) => {
            let date = s.get(..10)?;
            chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()
                .map(|d| d.format("%Y-%m-%d").to_string())
        }
        _ => None,
    }
}
