//! Serializes a [`Device`] into an `EtherCATInfo` XML string.
//!
//! This module implements the conversion from the public `types` to the
//! internal `model` structs required by `quick-xml` for correct
//! serialization, plus the `#x`-prefixed hex formatting the ESI convention
//! uses for indices and identifiers.

use crate::error::EsiError;
use crate::model;
use crate::types::{Device, Pdo, PdoDirection, PdoEntry};
use serde::Serialize;
use std::fmt::Write;

/// Serializes a [`Device`] into an ESI XML document string.
///
/// The document is pretty-printed with two-space indentation behind an XML
/// declaration, ready to be written to a file or stdout. Nothing is emitted
/// if any entry carries a bit length no EtherCAT data type can express.
pub fn save_esi_to_string(device: &Device) -> Result<String, EsiError> {
    let info = build_info(device)?;

    let mut buffer = String::new();
    write!(
        &mut buffer,
        "{}",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
    )?;

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 2);

    info.serialize(serializer)?;
    Ok(buffer)
}

/// Constructs the `EtherCATInfo` model tree for one device.
fn build_info(device: &Device) -> Result<model::EtherCatInfo, EsiError> {
    let mut items = vec![model::DeviceItem::Type(model::DeviceType {
        product_code: format_hex_u32(device.product),
        revision_no: format_hex_u32(device.revision),
    })];

    for pdo in &device.pdos {
        items.push(build_pdo(pdo)?);
    }

    Ok(model::EtherCatInfo {
        vendor: model::Vendor { id: device.vendor },
        descriptions: model::Descriptions {
            devices: model::Devices {
                device: vec![model::DeviceElement { items }],
            },
        },
    })
}

fn build_pdo(pdo: &Pdo) -> Result<model::DeviceItem, EsiError> {
    let entry = pdo
        .entries
        .iter()
        .map(build_entry)
        .collect::<Result<Vec<_>, EsiError>>()?;

    let element = model::PdoElement {
        index: format_hex_u16(pdo.index),
        name: String::new(),
        entry,
    };

    Ok(match pdo.direction {
        PdoDirection::Rx => model::DeviceItem::RxPdo(element),
        PdoDirection::Tx => model::DeviceItem::TxPdo(element),
    })
}

/// Gap entries (index 0) carry only their index and width; all other
/// entries get the full subindex/name/data-type description.
fn build_entry(entry: &PdoEntry) -> Result<model::EntryElement, EsiError> {
    let mut element = model::EntryElement {
        index: format_hex_u16(entry.index),
        bit_len: entry.bit_len,
        ..Default::default()
    };

    if entry.index != 0 {
        element.sub_index = Some(entry.subindex);
        element.name = Some(entry.name.clone());
        element.data_type = Some(entry.data_type()?);
    }

    Ok(element)
}

// --- Helper Functions ---

fn format_hex_u16(val: u16) -> String {
    format!("#x{:04x}", val)
}

fn format_hex_u32(val: u32) -> String {
    format!("#x{:08x}", val)
}
