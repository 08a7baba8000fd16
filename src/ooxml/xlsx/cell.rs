//! Cell coordinates for Excel worksheets.

use crate::ooxml::error::{OoxmlError, Result};
use crate::sheet::CellValue;

/// A parsed cell with its 1-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based)
    pub column: u32,
    /// Cell value
    pub value: CellValue,
}

impl Cell {
    /// Create a new cell.
    pub fn new(row: u32, column: u32, value: CellValue) -> Self {
        Self { row, column, value }
    }
}

/// Last column of a worksheet (`XFD`).
pub const MAX_COLUMN: u32 = 16_384;
/// Last row of a worksheet.
pub const MAX_ROW: u32 = 1_048_576;

/// Fail unless `(column, row)` lies inside `A1:XFD1048576`.
pub fn check_bounds(column: u32, row: u32) -> Result<()> {
    if !(1..=MAX_COLUMN).contains(&column) {
        return Err(OoxmlError::InvalidFormat(format!(
            "Column {} outside A:{}",
            column,
            column_to_letters(MAX_COLUMN)
        )));
    }
    if !(1..=MAX_ROW).contains(&row) {
        return Err(OoxmlError::InvalidFormat(format!("Row {} outside 1:{}", row, MAX_ROW)));
    }
    Ok(())
}

/// Convert column number to Excel column letters (e.g., 1 -> "A", 26 -> "Z", 27 -> "AA").
pub fn column_to_letters(col: u32) -> String {
    let mut letters = String::new();
    let mut col = col;

    while col > 0 {
        col -= 1;
        let letter = ((col % 26) as u8 + b'A') as char;
        letters.insert(0, letter);
        col /= 26;
    }

    letters
}

/// Convert an Excel reference (e.g., "B7" or "$B$7") to `(column, row)`.
pub fn reference_to_coords(reference: &str) -> Result<(u32, u32)> {
    let bytes: Vec<u8> = reference.bytes().filter(|&b| b != b'$').collect();
    let col_str_end = bytes
        .iter()
        .position(|b| b.is_ascii_digit())
        .unwrap_or(bytes.len());

    if col_str_end == 0 || col_str_end == bytes.len() {
        return Err(OoxmlError::InvalidFormat(format!("Invalid cell reference: {}", reference)));
    }

    // Convert column letters to number (A=1, B=2, ..., Z=26, AA=27, etc.)
    let mut col_num = 0u32;
    for &byte in &bytes[..col_str_end] {
        if !byte.is_ascii_alphabetic() {
            return Err(OoxmlError::InvalidFormat(format!(
                "Invalid column in reference: {}",
                reference
            )));
        }
        col_num = col_num
            .checked_mul(26)
            .and_then(|n| n.checked_add((byte.to_ascii_uppercase() - b'A' + 1) as u32))
            .ok_or_else(|| {
                OoxmlError::InvalidFormat(format!("Column out of range in reference: {}", reference))
            })?;
    }

    let row_num: u32 = atoi_simd::parse(&bytes[col_str_end..]).map_err(|_| {
        OoxmlError::InvalidFormat(format!("Invalid row number in reference: {}", reference))
    })?;
    if row_num == 0 {
        return Err(OoxmlError::InvalidFormat(format!("Row 0 in reference: {}", reference)));
    }

    check_bounds(col_num, row_num)?;
    Ok((col_num, row_num))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_to_letters(1), "A");
        assert_eq!(column_to_letters(26), "Z");
        assert_eq!(column_to_letters(27), "AA");
        assert_eq!(column_to_letters(702), "ZZ");
        assert_eq!(column_to_letters(703), "AAA");
    }

    #[test]
    fn test_reference_to_coords() {
        assert_eq!(reference_to_coords("A1").unwrap(), (1, 1));
        assert_eq!(reference_to_coords("c12").unwrap(), (3, 12));
        assert_eq!(reference_to_coords("AA100").unwrap(), (27, 100));
        assert_eq!(reference_to_coords("$B$7").unwrap(), (2, 7));
    }

    #[test]
    fn test_invalid_references() {
        assert!(reference_to_coords("").is_err());
        assert!(reference_to_coords("12").is_err());
        assert!(reference_to_coords("AB").is_err());
        assert!(reference_to_coords("A0").is_err());
        assert!(reference_to_coords("A-1").is_err());
    }

    #[test]
    fn test_sheet_limits() {
        assert_eq!(reference_to_coords("XFD1048576").unwrap(), (MAX_COLUMN, MAX_ROW));
        assert!(matches!(
            reference_to_coords("XFE1"),
            Err(OoxmlError::InvalidFormat(_))
        ));
        assert!(matches!(
            reference_to_coords("A1048577"),
            Err(OoxmlError::InvalidFormat(_))
        ));
        assert!(reference_to_coords("ZZZZZZ1").is_err());
        assert!(reference_to_coords("A99999999").is_err());
        assert!(check_bounds(MAX_COLUMN, MAX_ROW).is_ok());
        assert!(check_bounds(MAX_COLUMN + 1, 1).is_err());
        assert!(check_bounds(1, 0).is_err());
    }
}
