//! SheetSense: schema-free ingestion of contact spreadsheets.
//!
//! SheetSense turns an arbitrary spreadsheet or delimited-text file into
//! typed contact records without knowing its layout in advance. Format,
//! delimiter, header presence and column meaning are all inferred.
//!
//! # Phases
//!
//! - **Analysis**: bytes are decoded into a grid, the first row is classified
//!   as header or data, and a name/phone mapping is suggested.
//! - **Normalization**: once an operator has confirmed or edited the mapping,
//!   body rows become [`Contact`]s.
//!
//! # Example
//!
//! ```no_run
//! use sheetsense::SheetSense;
//!
//! let sense = SheetSense::new();
//! let analysis = sense.analyze_file("contatos.csv").unwrap();
//!
//! println!("Columns: {:?}", analysis.headers);
//! let contacts = sense.contacts(&analysis, &analysis.mapping);
//! println!("Contacts: {}", contacts.len());
//! ```

pub mod contact;
pub mod error;
pub mod header;
pub mod inference;
pub mod input;
pub mod mapping;
pub mod records;

mod sheetsense;

pub use crate::sheetsense::{Analysis, SheetSense, SheetSenseConfig};
pub use contact::{Contact, ContactNormalizer, NormalizeOptions};
pub use error::{Result, SheetError};
pub use header::{HeaderClassification, HeaderClassifier, HeaderConfig, Preview};
pub use inference::{RoleInferencer, RoleRules};
pub use input::{Grid, RowExtractor, SourceFormat, SourceMetadata, Tokenizer, TokenizerConfig};
pub use mapping::{Mapping, Role};
pub use records::{Record, machine_keys, rows_to_objects};
