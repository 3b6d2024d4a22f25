//! Fixed column schema of the persisted damage log.

/// Column names, in persisted order. The header row of every damage log file
/// is exactly these names, comma separated.
pub const COLUMNS: [&str; 8] = [
    "Date",
    "SKU",
    "Product Name",
    "Quantity",
    "Damage Type",
    "Storage Zone",
    "Team",
    "Notes",
];

/// Header line as it appears on disk.
pub fn header_line() -> String {
    COLUMNS.join(",")
}
