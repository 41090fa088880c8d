pub mod analyzers;
pub mod config;
pub mod error;
pub mod importer;
pub mod output;
pub mod records;
pub mod session;
pub mod stats;
