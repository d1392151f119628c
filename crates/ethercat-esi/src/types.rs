// crates/ethercat-esi/src/types.rs

//! Public data structures for a parsed slave information report.

use crate::error::EsiError;

/// Direction of a process data object, seen from the master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdoDirection {
    /// `RxPdo`, master to slave.
    Rx,
    /// `TxPdo`, slave to master.
    Tx,
}

/// One mapping entry within a PDO's data layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdoEntry {
    /// Object index; 0 marks a sync-manager gap entry.
    pub index: u16,
    /// Object subindex.
    pub subindex: u8,
    /// Entry name as quoted in the report.
    pub name: String,
    /// Width of the entry in bits.
    pub bit_len: u16,
}

impl PdoEntry {
    /// Derives the EtherCAT data-type name for this entry's bit length.
    ///
    /// A single bit is `BOOL`, byte-aligned widths up to 64 bits map to the
    /// unsigned integer types, and wider byte-aligned entries become octet
    /// strings. Gap entries (index 0) carry no data type and are never asked
    /// for one.
    pub fn data_type(&self) -> Result<String, EsiError> {
        match self.bit_len {
            1 => Ok("BOOL".into()),
            n if n % 8 == 0 && n <= 64 => Ok(format!("UINT{}", n)),
            n if n % 8 == 0 => Ok(format!("STRING({})", n / 8)),
            n => Err(EsiError::InvalidBitLength {
                line: None,
                index: self.index,
                subindex: self.subindex,
                bit_len: n,
            }),
        }
    }
}

/// One PDO with its mapping entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdo {
    pub direction: PdoDirection,
    /// PDO index from the header line.
    pub index: u16,
    /// Entries in report order; the order defines the bit offsets.
    pub entries: Vec<PdoEntry>,
}

/// A slave device assembled from one report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Device {
    /// Decimal vendor id; 0 when the report lacks an identity block.
    pub vendor: u32,
    pub product: u32,
    pub revision: u32,
    /// PDOs in report order.
    pub pdos: Vec<Pdo>,
}
