//! Building the clean table from the combined raw table
//!
//! Resolution: each canonical column adopts the first raw column whose
//! normalized header matches it exactly; later duplicates are ignored and a
//! canonical column with no match is entirely blank. Sanitization: rows with
//! all twelve canonical cells blank are dropped, then every remaining blank
//! cell gets the missing-value marker. Identifier cleanup runs last.

use std::path::Path;

use calamine::Data;
use log::{info, warn};
use serde::Serialize;

use super::columns::{Column, MISSING_VALUE};
use super::error::DataError;
use super::numeric::cell_number;
use super::reader::{read_workbook, RawTable};

/// One record of the clean table. Display fields are always populated with
/// either a source value or the missing-value marker; the `*_num` shadows
/// carry the parsed numeric value for aggregation, `None` meaning "not a
/// number" (blank, marker, or unparseable).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanRow {
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Order No")]
    pub order_no: String,
    #[serde(rename = "Package Form")]
    pub package_form: String,
    #[serde(rename = "Item No")]
    pub item_no: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Net Weight (Kg)")]
    pub net_weight: String,
    #[serde(rename = "Gross Weight (Kg)")]
    pub gross_weight: String,
    #[serde(rename = "Length")]
    pub length: String,
    #[serde(rename = "Width")]
    pub width: String,
    #[serde(rename = "Height")]
    pub height: String,
    #[serde(rename = "Weighing Method")]
    pub weighing_method: String,

    #[serde(skip)]
    pub quantity_num: Option<f64>,
    #[serde(skip)]
    pub net_num: Option<f64>,
    #[serde(skip)]
    pub gross_num: Option<f64>,
}

impl CleanRow {
    /// Display value of a canonical column.
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Unit => &self.unit,
            Column::OrderNo => &self.order_no,
            Column::PackageForm => &self.package_form,
            Column::ItemNo => &self.item_no,
            Column::Description => &self.description,
            Column::Quantity => &self.quantity,
            Column::NetWeight => &self.net_weight,
            Column::GrossWeight => &self.gross_weight,
            Column::Length => &self.length,
            Column::Width => &self.width,
            Column::Height => &self.height,
            Column::WeighingMethod => &self.weighing_method,
        }
    }
}

/// The immutable post-pipeline snapshot all consumers read from.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct CleanTable {
    pub rows: Vec<CleanRow>,
}

impl CleanTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read the workbook at `path` and run the full cleaning pipeline.
pub fn build_clean_table(path: &Path) -> Result<CleanTable, DataError> {
    let raw = read_workbook(path)?;
    let table = clean_from_raw(&raw);
    info!(
        "built clean table from {}: {} rows ({} raw)",
        path.display(),
        table.len(),
        raw.rows().len()
    );
    Ok(table)
}

/// The cleaning pipeline proper, separated from file I/O so it can run on
/// synthetic tables.
pub fn clean_from_raw(raw: &RawTable) -> CleanTable {
    // first matching raw column per canonical name, or None for blank
    let slots: Vec<Option<usize>> = Column::ALL
        .iter()
        .map(|c| raw.headers().iter().position(|h| h.as_str() == c.name()))
        .collect();
    for (column, slot) in Column::ALL.iter().zip(&slots) {
        if slot.is_none() {
            warn!(
                "no source column for '{}', filling with \"{}\"",
                column, MISSING_VALUE
            );
        }
    }

    let mut rows = Vec::new();
    for raw_row in raw.rows() {
        let cells: Vec<Option<&Data>> = slots
            .iter()
            .map(|slot| slot.and_then(|i| raw_row.get(i)).filter(|c| !is_blank(c)))
            .collect();

        // drop-empty comes before marker fill: emptiness is judged on raw
        // blanks only
        if cells.iter().all(|c| c.is_none()) {
            continue;
        }

        let display = |idx: usize| -> String {
            cells[idx]
                .map(cell_display)
                .unwrap_or_else(|| MISSING_VALUE.to_string())
        };
        let number = |idx: usize| -> Option<f64> { cells[idx].and_then(cell_number) };

        rows.push(CleanRow {
            unit: display(0),
            order_no: display(1),
            package_form: display(2),
            item_no: display(3),
            description: display(4),
            quantity: display(5),
            net_weight: display(6),
            gross_weight: display(7),
            length: display(8),
            width: display(9),
            height: display(10),
            weighing_method: display(11),
            quantity_num: number(5),
            net_num: number(6),
            gross_num: number(7),
        });
    }

    clean_identifiers(&mut rows);

    CleanTable { rows }
}

/// Identifier cleanup, the last pipeline stage: units are trimmed, order
/// numbers additionally get embedded line breaks replaced with a space.
/// The missing-value marker passes through unchanged.
fn clean_identifiers(rows: &mut [CleanRow]) {
    for row in rows {
        row.unit = row.unit.trim().to_string();
        row.order_no = row.order_no.replace('\n', " ").trim().to_string();
    }
}

fn is_blank(cell: &Data) -> bool {
    matches!(cell, Data::Empty | Data::Error(_))
}

fn cell_display(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_every_canonical_cell_is_value_or_marker() {
        let mut raw = RawTable::default();
        raw.push_sheet(
            &headers(&["Unit", "Order No"]),
            vec![vec![s("HSB480"), Data::Empty]],
        );
        let table = clean_from_raw(&raw);

        assert_eq!(table.len(), 1);
        let row = &table.rows[0];
        for column in Column::ALL {
            assert!(!row.field(column).is_empty());
        }
        assert_eq!(row.unit, "HSB480");
        assert_eq!(row.order_no, MISSING_VALUE);
        assert_eq!(row.description, MISSING_VALUE);
    }

    #[test]
    fn test_fully_blank_rows_dropped_partial_rows_kept() {
        let mut raw = RawTable::default();
        raw.push_sheet(
            &headers(&["Unit", "Description"]),
            vec![
                vec![Data::Empty, Data::Empty],
                vec![Data::Empty, s("toaster")],
                vec![Data::Empty, Data::Empty],
            ],
        );
        let table = clean_from_raw(&raw);

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].description, "toaster");
        assert_eq!(table.rows[0].unit, MISSING_VALUE);
    }

    #[test]
    fn test_blank_rows_not_kept_by_unresolved_columns() {
        // a column nothing resolves to must not count as a populated field
        let mut raw = RawTable::default();
        raw.push_sheet(
            &headers(&["Unit", "Sipariş No"]),
            vec![vec![Data::Empty, s("OR 001")]],
        );
        let table = clean_from_raw(&raw);
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_headers_first_match_wins() {
        let mut raw = RawTable::default();
        raw.push_sheet(
            &headers(&["Unit", "Length", "Length"]),
            vec![vec![s("A"), s("10"), s("99")]],
        );
        raw.push_sheet(
            &headers(&["Unit", "Length", "Length"]),
            vec![vec![s("B"), s("20"), s("88")]],
        );
        let table = clean_from_raw(&raw);

        assert_eq!(table.rows[0].length, "10");
        assert_eq!(table.rows[1].length, "20");
    }

    #[test]
    fn test_numeric_shadows() {
        let mut raw = RawTable::default();
        raw.push_sheet(
            &headers(&["Unit", "Net Weight (Kg)", "Gross Weight (Kg)", "Quantity"]),
            vec![
                vec![s("A"), s("21.900,00"), s("abc"), Data::Float(5.0)],
                vec![s("B"), Data::Empty, s("1.250,5"), s("3")],
            ],
        );
        let table = clean_from_raw(&raw);

        assert_eq!(table.rows[0].net_num, Some(21900.0));
        assert_eq!(table.rows[0].gross_num, None);
        assert_eq!(table.rows[0].quantity_num, Some(5.0));
        assert_eq!(table.rows[0].quantity, "5");

        // marker-filled cell has no numeric shadow
        assert_eq!(table.rows[1].net_weight, MISSING_VALUE);
        assert_eq!(table.rows[1].net_num, None);
        assert_eq!(table.rows[1].gross_num, Some(1250.5));
    }

    #[test]
    fn test_identifier_cleaning() {
        let mut raw = RawTable::default();
        raw.push_sheet(
            &headers(&["Unit", "Order No"]),
            vec![vec![s("  HSB480 "), s("OR 006\n2016 ")]],
        );
        let table = clean_from_raw(&raw);

        assert_eq!(table.rows[0].unit, "HSB480");
        assert_eq!(table.rows[0].order_no, "OR 006 2016");
    }

    #[test]
    fn test_marker_survives_identifier_cleaning() {
        let mut raw = RawTable::default();
        raw.push_sheet(&headers(&["Description"]), vec![vec![s("pump")]]);
        let table = clean_from_raw(&raw);

        assert_eq!(table.rows[0].unit, MISSING_VALUE);
        assert_eq!(table.rows[0].order_no, MISSING_VALUE);
    }

    #[test]
    fn test_two_sheet_schema_variance() {
        // sheet 1 and sheet 2 disagree on columns; sheet 2 has one fully
        // blank row that must vanish
        let mut raw = RawTable::default();
        raw.push_sheet(
            &headers(&["Unit", "Order No", "Item No"]),
            vec![
                vec![s("HSB480"), s("OR 001"), s("40 D 652")],
                vec![s("HSB481"), s("OR 002"), s("40 D 653")],
            ],
        );
        raw.push_sheet(
            &headers(&["Unit", "Description"]),
            vec![
                vec![s("KSB100"), s("Toaster")],
                vec![Data::Empty, Data::Empty],
            ],
        );
        let table = clean_from_raw(&raw);

        assert_eq!(table.len(), 3);
        // sheet-1 rows get the marker for columns only sheet 2 has
        assert_eq!(table.rows[0].description, MISSING_VALUE);
        // and vice versa
        assert_eq!(table.rows[2].order_no, MISSING_VALUE);
        assert_eq!(table.rows[2].description, "Toaster");
    }
}
