//! CSV output: a plain table plus a numbered, human-friendly view.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::record::RestaurantRecord;

const SEP: char = ',';

/// Header of the plain table.
pub const HEADER: [&str; 4] = ["name", "url", "phone", "cuisine"];

/// Header of the formatted view.
pub const FORMATTED_HEADER: [&str; 4] = ["Name", "URL", "Phone", "Cuisine"];

/// Placeholder for unknown phone or cuisine in the formatted view.
pub const MISSING: &str = "N/A";

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one delimited row, quoting fields that need it.
///
/// # Errors
///
/// Propagates writer errors.
pub fn write_row<W: Write, S: AsRef<str>>(w: &mut W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{SEP}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Write `records` as `name,url,phone,cuisine` rows under a header.
///
/// # Errors
///
/// Propagates writer errors.
pub fn write_csv<W: Write>(mut w: W, records: &[RestaurantRecord]) -> io::Result<()> {
    write_row(&mut w, &HEADER)?;
    for r in records {
        write_row(&mut w, &[&r.name, &r.url, &r.phone, &r.cuisine])?;
    }
    w.flush()
}

/// Write the numbered view: `1. Name`, and `N/A` for an unknown phone or
/// cuisine.
///
/// # Errors
///
/// Propagates writer errors.
pub fn write_formatted_csv<W: Write>(mut w: W, records: &[RestaurantRecord]) -> io::Result<()> {
    write_row(&mut w, &FORMATTED_HEADER)?;
    for (i, r) in records.iter().enumerate() {
        let name = format!("{}. {}", i + 1, r.name);
        write_row(
            &mut w,
            &[name.as_str(), r.url.as_str(), or_missing(&r.phone), or_missing(&r.cuisine)],
        )?;
    }
    w.flush()
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() {
        MISSING
    } else {
        value
    }
}

/// `dir/name.csv` becomes `dir/name_formatted.csv`.
#[must_use]
pub fn formatted_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let ext = path
        .extension()
        .map_or_else(|| "csv".to_string(), |e| e.to_string_lossy().into_owned());
    path.with_file_name(format!("{stem}_formatted.{ext}"))
}

/// Write `records` to `path` and the formatted view next to it.
///
/// Returns the formatted file's path.
///
/// # Errors
///
/// Returns `Error::Io` if either file cannot be written.
pub fn save_csv(path: impl AsRef<Path>, records: &[RestaurantRecord]) -> Result<PathBuf> {
    let path = path.as_ref();
    write_csv(BufWriter::new(File::create(path)?), records)?;

    let formatted = formatted_path(path);
    write_formatted_csv(BufWriter::new(File::create(&formatted)?), records)?;

    info!(path = %path.display(), count = records.len(), "saved restaurants");
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RestaurantRecord> {
        vec![
            RestaurantRecord {
                name: "Canoe".into(),
                url: "https://www.opentable.ca/r/canoe".into(),
                phone: "(416) 364-0054".into(),
                cuisine: "Canadian".into(),
            },
            RestaurantRecord::named("Bar \"Raval\", Toronto"),
        ]
    }

    #[test]
    fn test_plain_csv() {
        let mut out = Vec::new();
        write_csv(&mut out, &sample()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "name,url,phone,cuisine\n\
             Canoe,https://www.opentable.ca/r/canoe,(416) 364-0054,Canadian\n\
             \"Bar \"\"Raval\"\", Toronto\",,,\n"
        );
    }

    #[test]
    fn test_formatted_csv() {
        let mut out = Vec::new();
        write_formatted_csv(&mut out, &sample()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Name,URL,Phone,Cuisine");
        assert_eq!(lines[1], "1. Canoe,https://www.opentable.ca/r/canoe,(416) 364-0054,Canadian");
        assert_eq!(lines[2], "\"2. Bar \"\"Raval\"\", Toronto\",,N/A,N/A");
    }

    #[test]
    fn test_formatted_path() {
        assert_eq!(
            formatted_path(Path::new("out/toronto.csv")),
            PathBuf::from("out/toronto_formatted.csv")
        );
        assert_eq!(formatted_path(Path::new("plain")), PathBuf::from("plain_formatted.csv"));
    }
}
