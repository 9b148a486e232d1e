//! Revio run metadata XML decoding.
//!
//! A Revio instrument writes one metadata XML document per run describing
//! the samples loaded on each SMRT Cell: runs, their subread sets, and per
//! collection the well samples, demultiplexing barcodes, and primary-analysis
//! output folder. Decoding walks the DOM top-down into the typed model from
//! [`crate::types`].
//!
//! Elements and attributes outside the modeled hierarchy are ignored, and
//! missing optional elements decode to empty values, so documents from newer
//! instrument software keep decoding.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::error::{ConverterError, Result};
use crate::types::{
    BioSample, CollectionMetadata, DataSetMetadata, DnaBarcode, ExperimentContainer,
    OutputOptions, Outputs, PacBioDataModel, Primary, Run, SubreadSet, WellSample,
};
use crate::xml::{find_child, find_children, get_attribute, get_text};

/// Read and decode a Revio metadata file.
///
/// # Arguments
/// * `path` - Path to the metadata XML file
///
/// # Returns
/// The decoded document model, or an error when the file cannot be read or
/// is not well-formed XML.
pub fn read_metadata_file(path: &Path) -> Result<PacBioDataModel> {
    let xml = fs::read_to_string(path).map_err(|source| ConverterError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    parse_metadata_xml(&xml)
}

/// Decode a metadata XML string into the typed document model.
pub fn parse_metadata_xml(xml: &str) -> Result<PacBioDataModel> {
    let doc = Document::parse(xml)?;
    Ok(parse_metadata(&doc))
}

/// Decode a parsed XML document into the typed document model.
pub fn parse_metadata(doc: &Document<'_>) -> PacBioDataModel {
    let root = doc.root_element();

    let experiment_container = find_child(root, "ExperimentContainer")
        .map(parse_experiment_container)
        .unwrap_or_default();

    tracing::debug!(
        runs = experiment_container.runs.len(),
        "decoded run metadata"
    );

    PacBioDataModel {
        experiment_container,
    }
}

fn parse_experiment_container(node: Node<'_, '_>) -> ExperimentContainer {
    let runs = find_child(node, "Runs")
        .map(|runs| find_children(runs, "Run").map(parse_run).collect())
        .unwrap_or_default();

    ExperimentContainer { runs }
}

fn parse_run(node: Node<'_, '_>) -> Run {
    let outputs = find_child(node, "Outputs")
        .map(parse_outputs)
        .unwrap_or_default();

    Run { outputs }
}

fn parse_outputs(node: Node<'_, '_>) -> Outputs {
    let subread_sets = find_child(node, "SubreadSets")
        .map(|sets| {
            find_children(sets, "SubreadSet")
                .map(parse_subread_set)
                .collect()
        })
        .unwrap_or_default();

    Outputs { subread_sets }
}

fn parse_subread_set(node: Node<'_, '_>) -> SubreadSet {
    let dataset_metadata = find_child(node, "DataSetMetadata")
        .map(parse_dataset_metadata)
        .unwrap_or_default();

    SubreadSet { dataset_metadata }
}

fn parse_dataset_metadata(node: Node<'_, '_>) -> DataSetMetadata {
    let collections = find_child(node, "Collections")
        .map(|collections| {
            find_children(collections, "CollectionMetadata")
                .map(parse_collection)
                .collect()
        })
        .unwrap_or_default();

    DataSetMetadata { collections }
}

fn parse_collection(node: Node<'_, '_>) -> CollectionMetadata {
    let context = get_attribute(node, "Context").unwrap_or_default().to_string();

    let well_sample = find_child(node, "WellSample")
        .map(parse_well_sample)
        .unwrap_or_default();

    let primary = find_child(node, "Primary")
        .map(parse_primary)
        .unwrap_or_default();

    CollectionMetadata {
        context,
        well_sample,
        primary,
    }
}

fn parse_well_sample(node: Node<'_, '_>) -> WellSample {
    let bio_samples = find_child(node, "BioSamples")
        .map(|samples| {
            find_children(samples, "BioSample")
                .map(parse_bio_sample)
                .collect()
        })
        .unwrap_or_default();

    WellSample { bio_samples }
}

fn parse_bio_sample(node: Node<'_, '_>) -> BioSample {
    let name = get_attribute(node, "Name").unwrap_or_default().to_string();

    let barcodes = find_child(node, "DNABarcodes")
        .map(|barcodes| {
            find_children(barcodes, "DNABarcode")
                .map(|barcode| DnaBarcode {
                    name: get_attribute(barcode, "Name").unwrap_or_default().to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    BioSample { name, barcodes }
}

fn parse_primary(node: Node<'_, '_>) -> Primary {
    let output_options = find_child(node, "OutputOptions")
        .map(|options| OutputOptions {
            results_folder: find_child(options, "ResultsFolder")
                .map(get_text)
                .unwrap_or_default(),
        })
        .unwrap_or_default();

    Primary { output_options }
}
