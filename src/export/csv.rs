use chrono::NaiveDate;

/// A record that can be written as one CSV row.
pub trait CsvRow {
    fn headers() -> &'static [&'static str];

    /// One cell per header, in the same order.
    fn cells(&self) -> Vec<String>;
}

/// Quotes a field when it contains a comma, a quote or a line break, doubling embedded quotes.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serializes a header row followed by one row per record, joined by `\n`.
pub fn to_csv<'a, T>(rows: impl IntoIterator<Item = &'a T>) -> String
where
    T: CsvRow + 'a,
{
    let mut lines = vec![join(T::headers().iter().map(|h| h.to_string()))];
    lines.extend(rows.into_iter().map(|row| join(row.cells().into_iter())));

    lines.join("\n")
}

/// `<prefix>_<YYYY-MM-DD>.csv`
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

fn join(cells: impl Iterator<Item = String>) -> String {
    cells
        .map(|cell| escape_field(&cell))
        .collect::<Vec<_>>()
        .join(",")
}
