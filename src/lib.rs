pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod platform;
pub mod scanner;

pub use config::Config;
pub use error::ScanError;
pub use model::{ExtensionSet, ReservedLabels, ScanRules, VendorGrouping, VendorTable};
pub use scanner::{PluginScanner, ScanReport};
