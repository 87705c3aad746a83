//! The data-cleaning pipeline
//!
//! One workbook in, one clean table out: read every sheet, resolve the
//! canonical columns, drop fully-blank rows, fill blanks with the
//! missing-value marker, derive numeric shadows, tidy identifiers. The
//! result is cached per source fingerprint for the life of the process.

pub mod columns;
pub mod error;
pub mod numeric;
pub mod reader;
pub mod store;
pub mod table;

pub use columns::{Column, MISSING_VALUE};
pub use error::DataError;
pub use store::{load_table, Fingerprint};
pub use table::{CleanRow, CleanTable};
