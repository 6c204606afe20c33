use crate::{CResult, ResultItem};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S_%6f";

/// Append-only table of labeled results. Columns are the union of item keys, first-seen order.
#[derive(Debug, Default, Clone)]
pub struct OutputTable {
    columns: Vec<String>,
    rows: Vec<ResultItem>,
}

impl OutputTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ResultItem) {
        for key in item.keys() {
            if !self.columns.iter().any(|c| c == key) {
                self.columns.push(key.to_string());
            }
        }
        self.rows.push(item);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ResultItem] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// writes a header line then one line per row; keys a row lacks become empty cells.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> CResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        if !self.columns.is_empty() {
            writer.write_record(&self.columns)?;
        }
        for row in &self.rows {
            writer.write_record(self.columns.iter().map(|c| row.get(c).unwrap_or_default()))?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// `<dir>/<name before the first '.'>-output_<timestamp>.csv`, next to the input file.
pub fn output_path(input: &Path, now: DateTime<Local>) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = name.split('.').next().unwrap_or_default();
    let file = format!("{base}-output_{}.csv", now.format(TIMESTAMP_FORMAT));
    match input.parent() {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn output_name_drops_every_extension() {
        let now = Local.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        let path = output_path(Path::new("data/terms.v2.csv"), now);
        assert_eq!(path, Path::new("data/terms-output_2024-03-05_07-08-09_000000.csv"));
    }

    #[test]
    fn columns_follow_first_insertion() {
        let mut table = OutputTable::new();
        let mut a = ResultItem::new();
        a.set("link", "l");
        a.set("title", "t");
        let mut b = ResultItem::new();
        b.set("link", "l2");
        b.set("extra", "e");
        table.push(a);
        table.push(b);
        assert_eq!(table.columns(), ["link", "title", "extra"]);
        assert_eq!(table.len(), 2);
    }
}
