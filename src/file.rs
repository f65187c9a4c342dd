// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::config::consts::{EXPORT_EXT, MERGED_STEM, PREVIEW_ROWS};
use crate::config::options::ExportOptions;
use crate::error::Result;
use crate::store::ContactStore;
use crate::table::{ExportScope, ExportTable};

/// Highest single-digit version among `*.csv` names.
///
/// For every name containing `.csv`: drop the last four characters, then read
/// the final character as a digit. Anything else counts as version 0.
/// Only one digit is ever read, so `contacts12.csv` is version 2.
pub fn max_csv_version<I, S>(names: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|n| n.as_ref().contains(".csv"))
        .map(|n| {
            let chars: Vec<char> = n.as_ref().chars().collect();
            let stem_len = chars.len().saturating_sub(4);
            chars[..stem_len]
                .last()
                .and_then(|c| c.to_digit(10))
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

/// `contacts` when nothing versioned exists, else `contacts-<max+1>`.
/// Does not check that the result is free.
pub fn merged_stem<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match max_csv_version(names) {
        0 => MERGED_STEM.to_string(),
        v => format!("{MERGED_STEM}-{}", v + 1),
    }
}

/// File names (not paths) directly inside `dir`. Missing dir -> empty.
pub fn list_file_names(dir: &Path) -> io::Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        out.push(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(out)
}

/// Where the export for `scope` goes inside `dir`.
pub fn resolve_export_path(dir: &Path, scope: ExportScope) -> io::Result<PathBuf> {
    let stem = match scope {
        ExportScope::Letter(l) => l.to_string(),
        ExportScope::Merged => {
            let names = list_file_names(dir)?;
            for n in names.iter().filter(|n| n.contains(".csv")) {
                debug!("existing export: {n}");
            }
            merged_stem(&names)
        }
    };
    Ok(dir.join(format!("{stem}.{EXPORT_EXT}")))
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Build the export table for `scope`, pick its file name and write it.
/// Returns the path written to.
pub fn export_store(
    store: &ContactStore,
    scope: ExportScope,
    export: &ExportOptions,
) -> Result<PathBuf> {
    ensure_directory(&export.out_dir)?;
    let path = resolve_export_path(&export.out_dir, scope)?;
    let table = ExportTable::from_store(store, scope);

    for line in table.head(PREVIEW_ROWS) {
        info!("{line}");
    }

    let mut out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    table.write_to(&mut out, export.include_index)?;
    out.flush()?;

    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_files_means_unversioned() {
        assert_eq!(max_csv_version(Vec::<String>::new()), 0);
        assert_eq!(merged_stem(Vec::<String>::new()), "contacts");
    }

    #[test]
    fn unversioned_exports_count_as_zero() {
        assert_eq!(merged_stem(["contacts.csv", "A.csv", "notes.txt"]), "contacts");
    }

    #[test]
    fn trailing_digit_bumps_version() {
        assert_eq!(merged_stem(["contacts.csv", "contacts1.csv"]), "contacts-2");
        assert_eq!(merged_stem(["contacts-2.csv", "other7.csv"]), "contacts-8");
    }

    #[test]
    fn only_one_digit_is_read() {
        assert_eq!(max_csv_version(["contacts-12.csv"]), 2);
        assert_eq!(max_csv_version(["contacts-9.csv", "contacts-10.csv"]), 9);
    }

    #[test]
    fn substring_match_and_short_names() {
        // `.csv` anywhere in the name qualifies; the last four chars are dropped regardless.
        assert_eq!(max_csv_version(["data3.csv.bak"]), 0);
        assert_eq!(max_csv_version(["x.csv3.csv"]), 3);
        assert_eq!(max_csv_version([".csv"]), 0);
    }
}
