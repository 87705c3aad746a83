//! Session cache for the clean table
//!
//! The table is built once per source fingerprint (canonical path, mtime,
//! size) and handed out as a shared snapshot. The store mutex is held for
//! the duration of a build, which collapses concurrent load requests into a
//! single in-flight build.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use log::debug;
use once_cell::sync::Lazy;

use super::error::DataError;
use super::table::{build_clean_table, CleanTable};

/// Identity of one source workbook state. Any change to path, modification
/// time, or size invalidates the cached table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub path: PathBuf,
    pub modified: SystemTime,
    pub len: u64,
}

impl Fingerprint {
    pub fn of(path: &Path) -> Result<Fingerprint, DataError> {
        let canonical = path
            .canonicalize()
            .map_err(|e| DataError::file_access(path, e))?;
        let meta = std::fs::metadata(&canonical).map_err(|e| DataError::file_access(path, e))?;
        let modified = meta.modified().map_err(|e| DataError::file_access(path, e))?;
        Ok(Fingerprint {
            path: canonical,
            modified,
            len: meta.len(),
        })
    }
}

#[derive(Default)]
pub struct DataStore {
    cached: Mutex<Option<(Fingerprint, Arc<CleanTable>)>>,
}

impl DataStore {
    /// Return the clean table for `path`, building it only when the source
    /// fingerprint differs from the cached one.
    pub fn load(&self, path: &Path) -> Result<Arc<CleanTable>, DataError> {
        let fingerprint = Fingerprint::of(path)?;

        let mut cached = self.cached.lock().unwrap();
        if let Some((cached_fp, table)) = cached.as_ref() {
            if *cached_fp == fingerprint {
                debug!("clean table cache hit for {}", fingerprint.path.display());
                return Ok(Arc::clone(table));
            }
        }

        let table = Arc::new(build_clean_table(&fingerprint.path)?);
        *cached = Some((fingerprint, Arc::clone(&table)));
        Ok(table)
    }
}

static STORE: Lazy<DataStore> = Lazy::new(DataStore::default);

/// Load through the process-wide store.
pub fn load_table(path: &Path) -> Result<Arc<CleanTable>, DataError> {
    STORE.load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn write_fixture(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("packlist-{}-{}.xlsx", name, std::process::id()));

        let mut workbook = Workbook::new();
        let sheet1 = workbook.add_worksheet();
        sheet1.write(0, 0, "Unit").unwrap();
        sheet1.write(0, 1, "Order No").unwrap();
        sheet1.write(0, 2, "Item No").unwrap();
        sheet1.write(1, 0, "HSB480").unwrap();
        sheet1.write(1, 1, "OR 001").unwrap();
        sheet1.write(1, 2, "40 D 652").unwrap();
        sheet1.write(2, 0, "HSB481").unwrap();
        sheet1.write(2, 1, "OR 002").unwrap();
        sheet1.write(2, 2, "40 D 653").unwrap();

        let sheet2 = workbook.add_worksheet();
        sheet2.write(0, 0, "Unit").unwrap();
        sheet2.write(0, 1, "Description").unwrap();
        sheet2.write(0, 2, "Gross Weight (Kg)").unwrap();
        sheet2.write(1, 0, "KSB100").unwrap();
        sheet2.write(1, 1, "Toaster").unwrap();
        sheet2.write(1, 2, "21.900,00").unwrap();
        // row 2 left fully blank on purpose
        sheet2.write(3, 0, "KSB101").unwrap();
        sheet2.write(3, 1, "Pump").unwrap();
        sheet2.write(3, 2, 350.5).unwrap();

        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_end_to_end_build_from_workbook() {
        let path = write_fixture("e2e");
        let table = build_clean_table(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // 2 rows from sheet 1, 2 surviving rows from sheet 2
        assert_eq!(table.len(), 4);
        assert_eq!(table.rows[0].unit, "HSB480");
        assert_eq!(table.rows[0].description, crate::data::MISSING_VALUE);
        assert_eq!(table.rows[2].description, "Toaster");
        assert_eq!(table.rows[2].order_no, crate::data::MISSING_VALUE);
        assert_eq!(table.rows[2].gross_num, Some(21900.0));
        assert_eq!(table.rows[3].gross_num, Some(350.5));
    }

    #[test]
    fn test_store_reuses_snapshot_for_unchanged_source() {
        let path = write_fixture("cache");
        let store = DataStore::default();
        let first = store.load(&path).unwrap();
        let second = store.load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        // a fresh build from the same source is row-for-row identical
        let rebuilt = build_clean_table(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(*first, rebuilt);
    }

    #[test]
    fn test_missing_workbook_is_file_access_error() {
        let err = build_clean_table(Path::new("/no/such/workbook.xlsx")).unwrap_err();
        assert!(matches!(err, DataError::FileAccess { .. }));
    }
}
