//! Workbook reading: every sheet, one combined raw table
//!
//! Each sheet's first row is its header row. Headers are normalized (line
//! breaks become spaces, surrounding whitespace is trimmed, internal runs
//! collapse to a single space) and all sheets are concatenated into one
//! table whose columns are the union of every normalized header seen.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use log::debug;

use super::error::DataError;

/// Collapse whitespace in a raw header: line breaks and runs of spaces all
/// become a single space, with nothing leading or trailing.
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// All sheets of a workbook concatenated into one rectangular table.
///
/// Column headers are normalized but otherwise verbatim, so the same name
/// can appear more than once (duplicate headers are a fact of life in these
/// workbooks and are resolved later, first match wins).
#[derive(Debug, Default)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Data>>,
}

impl RawTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Data>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one sheet. Raw headers are normalized here; rows keep their
    /// source cell types.
    ///
    /// Columns align with already-seen columns by name and occurrence: the
    /// k-th column named `H` in this sheet lands in the k-th existing column
    /// named `H`, so duplicate headers within a sheet stay distinct columns.
    /// Headers with no existing slot extend the table; rows from earlier
    /// sheets read as blank in those new columns.
    pub fn push_sheet(&mut self, raw_headers: &[String], sheet_rows: Vec<Vec<Data>>) {
        let mut claimed = vec![false; self.headers.len()];
        let mut slot_of = Vec::with_capacity(raw_headers.len());

        for raw in raw_headers {
            let name = normalize_header(raw);
            let slot = self
                .headers
                .iter()
                .enumerate()
                .position(|(i, h)| !claimed[i] && *h == name);
            let slot = match slot {
                Some(i) => i,
                None => {
                    self.headers.push(name);
                    claimed.push(false);
                    // widen rows already in the table
                    for row in &mut self.rows {
                        row.push(Data::Empty);
                    }
                    self.headers.len() - 1
                }
            };
            claimed[slot] = true;
            slot_of.push(slot);
        }

        let width = self.headers.len();
        for cells in sheet_rows {
            let mut row = vec![Data::Empty; width];
            for (j, cell) in cells.into_iter().enumerate() {
                if let Some(&slot) = slot_of.get(j) {
                    row[slot] = cell;
                }
            }
            self.rows.push(row);
        }
    }
}

/// Read every sheet of the workbook at `path` into one combined table.
///
/// Fails if the file cannot be opened or parsed, if the workbook has no
/// sheets, or if no sheet contributed a single data row.
pub fn read_workbook(path: &Path) -> Result<RawTable, DataError> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| DataError::file_access(path, e))?;

    let sheet_names = workbook.sheet_names();
    if sheet_names.is_empty() {
        return Err(DataError::schema(path, "workbook has no sheets"));
    }

    let mut table = RawTable::default();
    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| DataError::file_access(path, e))?;

        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            debug!("sheet '{}' is empty, skipping", name);
            continue;
        };

        let headers: Vec<String> = header_row.iter().map(header_text).collect();
        let data_rows: Vec<Vec<Data>> = rows.map(|r| r.to_vec()).collect();
        debug!(
            "sheet '{}': {} columns, {} data rows",
            name,
            headers.len(),
            data_rows.len()
        );
        table.push_sheet(&headers, data_rows);
    }

    if table.is_empty() {
        return Err(DataError::schema(path, "no data rows in any sheet"));
    }

    Ok(table)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Unit  "), "Unit");
        assert_eq!(normalize_header("Order\nNo"), "Order No");
        assert_eq!(normalize_header("Net   Weight \n (Kg)"), "Net Weight (Kg)");
        assert_eq!(normalize_header(""), "");
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_sheets_concatenate_in_order() {
        let mut table = RawTable::default();
        table.push_sheet(
            &["Unit".into(), "Order No".into()],
            vec![vec![s("A"), s("1")], vec![s("B"), s("2")]],
        );
        table.push_sheet(&["Unit".into()], vec![vec![s("C")]]);

        assert_eq!(table.headers(), &["Unit", "Order No"]);
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.rows()[2][0], s("C"));
        // column absent from sheet 2 is blank for its rows
        assert_eq!(table.rows()[2][1], Data::Empty);
    }

    #[test]
    fn test_same_name_columns_align_across_sheets() {
        let mut table = RawTable::default();
        table.push_sheet(
            &["Order No".into(), "Unit".into()],
            vec![vec![s("1"), s("A")]],
        );
        // different column order in the second sheet
        table.push_sheet(
            &["Unit".into(), "Order No".into()],
            vec![vec![s("B"), s("2")]],
        );

        assert_eq!(table.headers(), &["Order No", "Unit"]);
        assert_eq!(table.rows()[1][0], s("2"));
        assert_eq!(table.rows()[1][1], s("B"));
    }

    #[test]
    fn test_duplicate_headers_stay_distinct_columns() {
        let mut table = RawTable::default();
        table.push_sheet(
            &["Length".into(), "Length".into()],
            vec![vec![s("10"), s("99")]],
        );
        table.push_sheet(
            &["Length".into(), "Length".into()],
            vec![vec![s("20"), s("88")]],
        );

        assert_eq!(table.headers(), &["Length", "Length"]);
        // first occurrence of each sheet feeds the first column
        assert_eq!(table.rows()[0][0], s("10"));
        assert_eq!(table.rows()[1][0], s("20"));
        assert_eq!(table.rows()[0][1], s("99"));
        assert_eq!(table.rows()[1][1], s("88"));
    }

    #[test]
    fn test_new_columns_widen_earlier_rows() {
        let mut table = RawTable::default();
        table.push_sheet(&["Unit".into()], vec![vec![s("A")]]);
        table.push_sheet(
            &["Unit".into(), "Description".into()],
            vec![vec![s("B"), s("toaster")]],
        );

        assert_eq!(table.headers(), &["Unit", "Description"]);
        assert_eq!(table.rows()[0], vec![s("A"), Data::Empty]);
        assert_eq!(table.rows()[1], vec![s("B"), s("toaster")]);
    }

    #[test]
    fn test_headers_normalized_on_push() {
        let mut table = RawTable::default();
        table.push_sheet(&[" Order\nNo ".into()], vec![vec![s("1")]]);
        assert_eq!(table.headers(), &["Order No"]);
    }
}
