// src/table.rs
//
// Export table: the contact store flattened into rows with a fixed column
// order, and its CSV rendering.

use std::io::Write;

use crate::config::consts::EXPORT_HEADERS;
use crate::store::{ContactStore, Letter, LetterBucket};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportScope {
    /// One letter's bucket, written to `<L>.csv`.
    Letter(Letter),
    /// Every bucket in A..Z order, written to a versioned `contacts*.csv`.
    Merged,
}

/// One output line. `index` is the position inside the letter's bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub index: usize,
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ExportRow {
    fn cells(&self) -> [&str; 4] {
        [&self.company, &self.name, &self.email, &self.phone]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub rows: Vec<ExportRow>,
}

impl ExportTable {
    pub fn from_store(store: &ContactStore, scope: ExportScope) -> Self {
        let mut rows = Vec::new();
        match scope {
            ExportScope::Letter(l) => push_bucket(&mut rows, store.bucket(l)),
            ExportScope::Merged => {
                for (_, bucket) in store.iter() {
                    push_bucket(&mut rows, bucket);
                }
            }
        }
        Self { rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Header + rows. The index column has an empty header cell.
    pub fn write_to<W: Write>(&self, w: W, include_index: bool) -> Result<(), csv::Error> {
        let mut out = csv::WriterBuilder::new().has_headers(false).from_writer(w);

        if include_index {
            out.write_record(std::iter::once("").chain(EXPORT_HEADERS))?;
        } else {
            out.write_record(EXPORT_HEADERS)?;
        }

        for row in &self.rows {
            if include_index {
                let idx = row.index.to_string();
                out.write_record(std::iter::once(idx.as_str()).chain(row.cells()))?;
            } else {
                out.write_record(row.cells())?;
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self, include_index: bool) -> Result<String, csv::Error> {
        let mut buf: Vec<u8> = Vec::new();
        self.write_to(&mut buf, include_index)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// First `n` rows, one line each, for log previews.
    pub fn head(&self, n: usize) -> Vec<String> {
        self.rows
            .iter()
            .take(n)
            .map(|r| format!("{:>4}  {}", r.index, r.cells().join("  |  ")))
            .collect()
    }
}

fn push_bucket(rows: &mut Vec<ExportRow>, bucket: &LetterBucket) {
    rows.extend(bucket.records().enumerate().map(|(index, r)| ExportRow {
        index,
        company: r.company,
        name: r.name,
        email: r.email,
        phone: r.phone,
    }));
}
