//! Read-only derived operations over the clean table
//!
//! Everything the CLI and the dashboard show is computed here: filtering,
//! summary metrics, dropdown value lists, and the two aggregations behind
//! the analysis charts. Sums run over the numeric shadows, so cells holding
//! the missing-value marker never count as zero.

use crate::data::{CleanRow, CleanTable};

/// Combined filter: free-text substring search (case-insensitive, matched
/// against unit, order number, item number, and description) plus optional
/// exact-match unit and order filters. All active parts must match.
#[derive(Debug, Default, Clone)]
pub struct RowFilter {
    pub query: Option<String>,
    pub unit: Option<String>,
    pub order_no: Option<String>,
}

impl RowFilter {
    pub fn matches(&self, row: &CleanRow) -> bool {
        if let Some(unit) = &self.unit {
            if row.unit != *unit {
                return false;
            }
        }
        if let Some(order_no) = &self.order_no {
            if row.order_no != *order_no {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let q = query.to_lowercase();
            let hit = [&row.unit, &row.order_no, &row.item_no, &row.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&q));
            if !hit {
                return false;
            }
        }
        true
    }

    /// Indices of matching rows, in table order.
    pub fn apply(&self, table: &CleanTable) -> Vec<usize> {
        table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.matches(row))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Metrics shown above every result table.
#[derive(Debug, PartialEq)]
pub struct Summary {
    pub rows: usize,
    pub net_total: f64,
    pub gross_total: f64,
}

pub fn summarize(table: &CleanTable, indices: &[usize]) -> Summary {
    let mut net_total = 0.0;
    let mut gross_total = 0.0;
    for &i in indices {
        let row = &table.rows[i];
        net_total += row.net_num.unwrap_or(0.0);
        gross_total += row.gross_num.unwrap_or(0.0);
    }
    Summary {
        rows: indices.len(),
        net_total,
        gross_total,
    }
}

/// Sorted distinct unit names (dropdown source).
pub fn unique_units(table: &CleanTable) -> Vec<String> {
    unique_of(table, |row| &row.unit)
}

/// Sorted distinct order numbers (dropdown source).
pub fn unique_orders(table: &CleanTable) -> Vec<String> {
    unique_of(table, |row| &row.order_no)
}

fn unique_of(table: &CleanTable, field: impl Fn(&CleanRow) -> &String) -> Vec<String> {
    let mut values: Vec<String> = table.rows.iter().map(|row| field(row).clone()).collect();
    values.sort();
    values.dedup();
    values
}

/// Gross-weight sum per unit, sorted by unit name. Rows without a numeric
/// gross weight contribute nothing but still make their unit appear.
pub fn gross_by_unit(table: &CleanTable) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for row in &table.rows {
        let gross = row.gross_num.unwrap_or(0.0);
        match totals.iter_mut().find(|(unit, _)| *unit == row.unit) {
            Some((_, total)) => *total += gross,
            None => totals.push((row.unit.clone(), gross)),
        }
    }
    totals.sort_by(|a, b| a.0.cmp(&b.0));
    totals
}

/// Indices of the `n` heaviest rows by gross weight, descending. Rows
/// without a numeric gross weight are not ranked.
pub fn top_by_gross(table: &CleanTable, n: usize) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| row.gross_num.map(|g| (i, g)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked.into_iter().map(|(i, _)| i).collect()
}
