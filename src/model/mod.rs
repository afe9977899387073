//! Core data types for scan rules and report tables.
//!
//! - [`ScanRules`] - Extension sets, reserved labels and vendor grouping
//! - [`ExtensionSet`] - A case-insensitive set of file extensions
//! - [`VendorTable`] - Ordered mapping from vendor label to found items
//!
//! # Example
//!
//! ```
//! use vst3_list::{ReservedLabels, VendorTable};
//!
//! let mut table = VendorTable::new(ReservedLabels::default());
//! table.push("Acme", "Synth.vst3");
//!
//! assert_eq!(table.get("Acme").unwrap(), &["Synth.vst3".to_string()]);
//! assert!(table.get("_Unknown").unwrap().is_empty());
//! ```

mod rules;
mod table;

pub use rules::*;
pub use table::*;
