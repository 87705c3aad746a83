//! The canonical column contract every consumer of the clean table relies on

/// Placeholder written into every required cell that the source workbook
/// left blank. Consumers render it as-is and must never treat it as zero.
pub const MISSING_VALUE: &str = "unentered value";

/// The 12 required output columns, in display order.
///
/// Whatever schema variance the source sheets have, the clean table exposes
/// exactly these columns. The variant order here is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Unit,
    OrderNo,
    PackageForm,
    ItemNo,
    Description,
    Quantity,
    NetWeight,
    GrossWeight,
    Length,
    Width,
    Height,
    WeighingMethod,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::Unit,
        Column::OrderNo,
        Column::PackageForm,
        Column::ItemNo,
        Column::Description,
        Column::Quantity,
        Column::NetWeight,
        Column::GrossWeight,
        Column::Length,
        Column::Width,
        Column::Height,
        Column::WeighingMethod,
    ];

    /// Header text, both as matched against source sheets and as displayed.
    pub fn name(self) -> &'static str {
        match self {
            Column::Unit => "Unit",
            Column::OrderNo => "Order No",
            Column::PackageForm => "Package Form",
            Column::ItemNo => "Item No",
            Column::Description => "Description",
            Column::Quantity => "Quantity",
            Column::NetWeight => "Net Weight (Kg)",
            Column::GrossWeight => "Gross Weight (Kg)",
            Column::Length => "Length",
            Column::Width => "Width",
            Column::Height => "Height",
            Column::WeighingMethod => "Weighing Method",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
