//! Generates ESI (EtherCAT Slave Information) XML device descriptions from
//! plain-text slave information reports.
//!
//! The pipeline has two independent halves:
//! - [`load_report_from_str`]: pattern-matches the report lines into a plain
//!   [`Device`] tree.
//! - [`save_esi_to_string`]: projects that tree onto the `EtherCATInfo`
//!   schema fragment and pretty-prints it.

// --- Crate Modules ---

mod builder;
mod error;
mod model;
mod report;
mod types;

// --- Public API Re-exports ---

pub use builder::save_esi_to_string;
pub use error::EsiError;
pub use report::load_report_from_str;
pub use types::{Device, Pdo, PdoDirection, PdoEntry};
