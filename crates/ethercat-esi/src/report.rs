// crates/ethercat-esi/src/report.rs

//! Line-oriented parser for the plain-text slave information report.
//!
//! A report is the output of the `ethercat` command line tool: an identity
//! block with parenthesized decimal identifiers, followed by the PDO layout
//! with one header line per PDO and one line per mapping entry. Entry lines
//! always follow the header of the PDO they belong to; everything else in
//! the report is noise and gets skipped.

use crate::error::EsiError;
use crate::types::{Device, Pdo, PdoDirection, PdoEntry};
use log::debug;
use regex::Regex;

/// The five line patterns recognized in a report.
struct ReportPatterns {
    vendor: Regex,
    product: Regex,
    revision: Regex,
    pdo: Regex,
    entry: Regex,
}

impl ReportPatterns {
    fn new() -> Result<Self, EsiError> {
        Ok(Self {
            vendor: Regex::new(r"Vendor ID:.*\((\d+)\)")?,
            product: Regex::new(r"Product code:.*\((\d+)\)")?,
            revision: Regex::new(r"Revision number:.*\((\d+)\)")?,
            pdo: Regex::new(r"([RT])xPdo\s+0x([0-9A-Fa-f]+)")?,
            entry: Regex::new(r#"0x([0-9A-Fa-f]+):([0-9A-Fa-f]+),\s+(\d+) bit,\s+"([^"]*)""#)?,
        })
    }
}

/// Parses a slave information report into a [`Device`].
///
/// The pass is single and strictly line-by-line. Lines matching none of the
/// report patterns are skipped, and identity fields keep their zero defaults
/// when the report lacks them. Structural problems are typed errors carrying
/// the 1-based line number: an entry line before any PDO header, a number
/// too large for its field, or a bit length no EtherCAT data type can
/// express.
pub fn load_report_from_str(report: &str) -> Result<Device, EsiError> {
    let patterns = ReportPatterns::new()?;
    let mut device = Device::default();

    for (number, line) in report.lines().enumerate() {
        let number = number + 1;

        if let Some(caps) = patterns.vendor.captures(line) {
            device.vendor = parse_decimal_u32(&caps[1], "vendor id", number)?;
        } else if let Some(caps) = patterns.product.captures(line) {
            device.product = parse_decimal_u32(&caps[1], "product code", number)?;
        } else if let Some(caps) = patterns.revision.captures(line) {
            device.revision = parse_decimal_u32(&caps[1], "revision number", number)?;
        } else if let Some(caps) = patterns.pdo.captures(line) {
            let direction = match &caps[1] {
                "R" => PdoDirection::Rx,
                _ => PdoDirection::Tx,
            };
            device.pdos.push(Pdo {
                direction,
                index: parse_hex_u16(&caps[2], "PDO index", number)?,
                entries: Vec::new(),
            });
        } else if let Some(caps) = patterns.entry.captures(line) {
            let entry = PdoEntry {
                index: parse_hex_u16(&caps[1], "entry index", number)?,
                subindex: parse_hex_u8(&caps[2], "entry subindex", number)?,
                bit_len: parse_decimal_u16(&caps[3], "entry bit length", number)?,
                name: caps[4].to_string(),
            };

            // Gap entries may be any width; inference never sees them.
            if entry.index != 0 {
                if let Err(e) = entry.data_type() {
                    return Err(e.with_line(number));
                }
            }

            device
                .pdos
                .last_mut()
                .ok_or(EsiError::EntryWithoutPdo { line: number })?
                .entries
                .push(entry);
        } else if !line.trim().is_empty() {
            debug!("line {}: no report pattern matched", number);
        }
    }

    Ok(device)
}

// --- Capture Parsing Helpers ---

fn parse_decimal_u32(s: &str, field: &'static str, line: usize) -> Result<u32, EsiError> {
    s.parse().map_err(|_| EsiError::FieldOverflow { field, line })
}

fn parse_decimal_u16(s: &str, field: &'static str, line: usize) -> Result<u16, EsiError> {
    s.parse().map_err(|_| EsiError::FieldOverflow { field, line })
}

fn parse_hex_u16(s: &str, field: &'static str, line: usize) -> Result<u16, EsiError> {
    u16::from_str_radix(s, 16).map_err(|_| EsiError::FieldOverflow { field, line })
}

fn parse_hex_u8(s: &str, field: &'static str, line: usize) -> Result<u8, EsiError> {
    u8::from_str_radix(s, 16).map_err(|_| EsiError::FieldOverflow { field, line })
}

#[cfg(test)]
mod tests {
    use super::load_report_from_str;
    use crate::error::EsiError;
    use crate::types::PdoDirection;

    #[test]
    fn test_identity_lines() {
        let report = "\
Identity:
  Vendor ID:       0x00000539 (1337)
  Product code:    0x00001389 (5001)
  Revision number: 0x00100000 (1048576)
  Serial number:   0x00000000 (0)
";
        let device = load_report_from_str(report).unwrap();
        assert_eq!(device.vendor, 1337);
        assert_eq!(device.product, 5001);
        assert_eq!(device.revision, 1048576);
        assert!(device.pdos.is_empty());
    }

    #[test]
    fn test_missing_identity_defaults_to_zero() {
        let device = load_report_from_str("TxPdo 0x1a00\n").unwrap();
        assert_eq!(device.vendor, 0);
        assert_eq!(device.product, 0);
        assert_eq!(device.revision, 0);
    }

    #[test]
    fn test_pdo_headers_keep_report_order() {
        let report = "\
  TxPdo 0x1a00 \"Inputs\"
  RxPdo 0x1600 \"Outputs\"
";
        let device = load_report_from_str(report).unwrap();
        assert_eq!(device.pdos.len(), 2);
        assert_eq!(device.pdos[0].direction, PdoDirection::Tx);
        assert_eq!(device.pdos[0].index, 0x1a00);
        assert_eq!(device.pdos[1].direction, PdoDirection::Rx);
        assert_eq!(device.pdos[1].index, 0x1600);
    }

    #[test]
    fn test_entries_attach_to_latest_pdo() {
        let report = "\
  RxPdo 0x1600 \"Outputs\"
    Pdo entry 0x7000:01, 1 bit, \"Output\"
  TxPdo 0x1a00 \"Inputs\"
    Pdo entry 0x6000:01, 8 bit, \"Status\"
    Pdo entry 0x6000:11, 16 bit, \"Value\"
";
        let device = load_report_from_str(report).unwrap();
        assert_eq!(device.pdos[0].entries.len(), 1);
        assert_eq!(device.pdos[1].entries.len(), 2);
        assert_eq!(device.pdos[1].entries[0].name, "Status");
        assert_eq!(device.pdos[1].entries[1].index, 0x6000);
        assert_eq!(device.pdos[1].entries[1].subindex, 0x11);
        assert_eq!(device.pdos[1].entries[1].bit_len, 16);
    }

    #[test]
    fn test_hex_captures_accept_both_cases() {
        let report = "\
  TxPdo 0x1A00
    Pdo entry 0x6aB0:0F, 8 bit, \"Mixed\"
";
        let device = load_report_from_str(report).unwrap();
        assert_eq!(device.pdos[0].index, 0x1a00);
        assert_eq!(device.pdos[0].entries[0].index, 0x6ab0);
        assert_eq!(device.pdos[0].entries[0].subindex, 0x0f);
    }

    #[test]
    fn test_unmatched_lines_are_skipped() {
        let report = "\
SM2: PhysAddr 0x1100, DefaultSize 3, ControlRegister 0x24, Enable 1
garbage that matches nothing
  RxPdo 0x1600
";
        let device = load_report_from_str(report).unwrap();
        assert_eq!(device.pdos.len(), 1);
        assert!(device.pdos[0].entries.is_empty());
    }

    #[test]
    fn test_entry_before_any_header_is_an_error() {
        let report = "Identity:\n    Pdo entry 0x6000:01, 8 bit, \"Status\"\n";
        let err = load_report_from_str(report).unwrap_err();
        assert!(matches!(err, EsiError::EntryWithoutPdo { line: 2 }));
    }

    #[test]
    fn test_unaligned_bit_length_reports_its_line() {
        let report = "\
  RxPdo 0x1600
    Pdo entry 0x7000:01, 3 bit, \"Odd\"
";
        let err = load_report_from_str(report).unwrap_err();
        assert!(matches!(
            err,
            EsiError::InvalidBitLength {
                line: Some(2),
                index: 0x7000,
                subindex: 1,
                bit_len: 3,
            }
        ));
    }

    #[test]
    fn test_gap_entries_may_be_any_width() {
        let report = "\
  RxPdo 0x1600
    Pdo entry 0x0000:00, 5 bit, \"\"
";
        let device = load_report_from_str(report).unwrap();
        assert_eq!(device.pdos[0].entries[0].index, 0);
        assert_eq!(device.pdos[0].entries[0].bit_len, 5);
    }

    #[test]
    fn test_oversized_pdo_index_is_an_error() {
        let err = load_report_from_str("  RxPdo 0x12345\n").unwrap_err();
        assert!(matches!(
            err,
            EsiError::FieldOverflow {
                field: "PDO index",
                line: 1,
            }
        ));
    }

    #[test]
    fn test_oversized_subindex_is_an_error() {
        let report = "  RxPdo 0x1600\n    Pdo entry 0x7000:100, 8 bit, \"X\"\n";
        let err = load_report_from_str(report).unwrap_err();
        assert!(matches!(
            err,
            EsiError::FieldOverflow {
                field: "entry subindex",
                line: 2,
            }
        ));
    }
}
