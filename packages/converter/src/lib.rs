//! Revio Metadata Converter - Extract sample data from Revio run metadata.
//!
//! Revio sequencing runs leave behind a metadata XML document describing the
//! samples loaded on each SMRT Cell. This crate decodes that document into a
//! typed tree and derives delimited text output from it: bare sample names,
//! sample names paired with their results folder, or the paths of the
//! demultiplexed HiFi BAM files.
//!
//! # Example
//!
//! ```
//! use revio_converter::extract::{extract_sample_data, ExtractOptions};
//! use revio_converter::metadata::parse_metadata_xml;
//!
//! let xml = r#"<PacBioDataModel><ExperimentContainer><Runs><Run>
//!   <Outputs><SubreadSets><SubreadSet><DataSetMetadata><Collections>
//!     <CollectionMetadata Context="m84297_250101_000000_s1">
//!       <WellSample><BioSamples><BioSample Name="S1"/></BioSamples></WellSample>
//!       <Primary><OutputOptions><ResultsFolder>r1/</ResultsFolder></OutputOptions></Primary>
//!     </CollectionMetadata>
//!   </Collections></DataSetMetadata></SubreadSet></SubreadSets></Outputs>
//! </Run></Runs></ExperimentContainer></PacBioDataModel>"#;
//!
//! let data = parse_metadata_xml(xml)?;
//! let lines = extract_sample_data(&data, ExtractOptions::default())?;
//! assert_eq!(lines, vec!["S1".to_string()]);
//! # Ok::<(), revio_converter::ConverterError>(())
//! ```
//!
//! # Architecture
//!
//! - [`types`]: Typed document model for the metadata tree
//! - [`metadata`]: XML decoding into the document model
//! - [`extract`]: Extraction engine producing the output lines
//! - [`config`]: Constants and output path construction
//! - [`xml`]: DOM navigation helpers
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use error::{ConverterError, Result};
pub use extract::{extract_sample_data, ExtractOptions};
pub use metadata::{parse_metadata, parse_metadata_xml, read_metadata_file};
