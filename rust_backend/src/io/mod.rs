//! Loading observation records.
//!
//! # Example
//!
//! ```no_run
//! use altaz::io::load_records;
//! use std::path::Path;
//!
//! let records = load_records(Path::new("data.txt")).expect("Failed to load");
//! println!("Loaded {} records", records.len());
//! ```

pub mod records;

pub use records::{load_records, parse_records_str, ObservationRecord};
