//! Spreadsheet-friendly CSV text: UTF-8 with a BOM, comma-separated, quoted on export.

pub const BOM: char = '\u{FEFF}';

/// Quote a field, doubling embedded quotes.
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// One output line with every field quoted.
pub fn quoted_line<S: AsRef<str>>(fields: &[S]) -> String {
    let line: Vec<String> = fields.iter().map(|f| quote(f.as_ref())).collect();
    line.join(",")
}

/// BOM, header and `rows`, each terminated by a newline.
pub fn document<I, S>(header: &str, rows: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    out.push(BOM);
    out.push_str(header);
    out.push('\n');
    for row in rows {
        out.push_str(row.as_ref());
        out.push('\n');
    }
    out
}

/// True when the body holds nothing but a BOM and whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim_start_matches(BOM).trim().is_empty()
}

/// Split CSV text into records. Handles quoted fields with commas, doubled quotes and newlines.
/// Blank lines are dropped.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.trim_start_matches(BOM).chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records.retain(|r| !r.iter().all(|f| f.trim().is_empty()));
    records
}

/// Records after an optional header row whose first field is `first_column` (any case).
pub fn data_records(text: &str, first_column: &str) -> Vec<Vec<String>> {
    let mut records = parse_records(text);
    if records
        .first()
        .and_then(|r| r.first())
        .is_some_and(|f| f.trim().eq_ignore_ascii_case(first_column))
    {
        records.remove(0);
    }
    records
}

/// Split a `separator`-joined multi-value field, dropping empty parts.
pub fn split_multi(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}
