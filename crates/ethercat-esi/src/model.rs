//! Internal `serde` data structures that map directly to the `EtherCATInfo`
//! XML schema fragment this tool emits.
//!
//! These structs are annotated for `quick-xml` and are not part of the
//! public API; the builder converts the public `types` into them right
//! before serialization.

use serde::{Deserialize, Serialize};

/// The root `<EtherCATInfo>` element.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "EtherCATInfo")]
pub struct EtherCatInfo {
    #[serde(rename = "Vendor")]
    pub vendor: Vendor,

    #[serde(rename = "Descriptions")]
    pub descriptions: Descriptions,
}

/// `<Vendor>` with the decimal vendor id.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Vendor {
    #[serde(rename = "Id")]
    pub id: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Descriptions {
    #[serde(rename = "Devices")]
    pub devices: Devices,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Devices {
    #[serde(rename = "Device", default)]
    pub device: Vec<DeviceElement>,
}

/// `<Device>` content: one `<Type>` followed by the PDO elements.
///
/// The children are an ordered choice list so that `RxPdo` and `TxPdo`
/// elements interleave exactly as the PDOs appeared in the report.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct DeviceElement {
    #[serde(rename = "$value", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<DeviceItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub enum DeviceItem {
    #[serde(rename = "Type")]
    Type(DeviceType),
    #[serde(rename = "RxPdo")]
    RxPdo(PdoElement),
    #[serde(rename = "TxPdo")]
    TxPdo(PdoElement),
}

/// `<Type ProductCode="#x…" RevisionNo="#x…"/>`, both zero-padded to
/// eight hex digits.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct DeviceType {
    #[serde(rename = "@ProductCode")]
    pub product_code: String,

    #[serde(rename = "@RevisionNo")]
    pub revision_no: String,
}

/// An `<RxPdo>` or `<TxPdo>` element.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct PdoElement {
    /// `#x`-prefixed, four hex digits.
    #[serde(rename = "Index")]
    pub index: String,

    /// Placeholder; the report carries no PDO names.
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Entry", default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<EntryElement>,
}

/// One `<Entry>` element. Gap entries (index 0) keep only `Index` and
/// `BitLen`; the optional children stay unset.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct EntryElement {
    /// `#x`-prefixed, four hex digits.
    #[serde(rename = "Index")]
    pub index: String,

    /// Decimal subindex.
    #[serde(rename = "SubIndex", default, skip_serializing_if = "Option::is_none")]
    pub sub_index: Option<u8>,

    #[serde(rename = "BitLen")]
    pub bit_len: u16,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "DataType", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}
