//! Sample data extraction from decoded run metadata.
//!
//! Walks the document tree depth-first (runs, then subread sets, then
//! collections, each in document order) and produces one output line set per
//! collection. The output shape is selected by [`ExtractOptions`]; file-name
//! generation wins over the results-folder mode.

use crate::config::hifi_reads_bam_path;
use crate::error::{ConverterError, Result};
use crate::types::{BioSample, CollectionMetadata, PacBioDataModel};

/// Output mode selection for [`extract_sample_data`].
///
/// Both flags default to off, which emits one comma-joined line of sample
/// names per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Emit one `<name>;<resultsFolder>` line per sample.
    pub include_results_folder: bool,

    /// Emit HiFi BAM file paths instead of bare sample names. Takes priority
    /// over `include_results_folder`.
    pub include_file_names: bool,
}

/// Extract sample data from a decoded metadata document.
///
/// # Arguments
/// * `data` - The decoded document model
/// * `options` - Output mode selection
///
/// # Returns
/// Output lines in document order, one unit of output per collection (file
/// name generation may produce several lines per collection).
pub fn extract_sample_data(
    data: &PacBioDataModel,
    options: ExtractOptions,
) -> Result<Vec<String>> {
    let mut output = Vec::new();

    for run in &data.experiment_container.runs {
        for subread_set in &run.outputs.subread_sets {
            for collection in &subread_set.dataset_metadata.collections {
                if options.include_file_names {
                    output.extend(generate_filenames(collection)?);
                } else {
                    let sample_names = extract_sample_names(&collection.well_sample.bio_samples);

                    if options.include_results_folder {
                        let results_folder = &collection.primary.output_options.results_folder;
                        for sample_name in &sample_names {
                            output.push(format!("{sample_name};{results_folder}"));
                        }
                    } else {
                        output.push(sample_names.join(","));
                    }
                }
            }
        }
    }

    tracing::debug!(lines = output.len(), "extracted sample data");

    Ok(output)
}

/// Collect the sample names of a well, in document order.
fn extract_sample_names(bio_samples: &[BioSample]) -> Vec<String> {
    bio_samples.iter().map(|s| s.name.clone()).collect()
}

/// Generate HiFi BAM filename lines for one collection.
///
/// When any sample in the well carries barcodes, demultiplexed output is
/// assumed: one line per barcode of every barcoded sample, with the short
/// barcode code in the filename. Samples without barcodes emit nothing in
/// that case. When no sample has barcodes the run produced a single BAM, and
/// the first sample names it.
fn generate_filenames(collection: &CollectionMetadata) -> Result<Vec<String>> {
    let results_folder = &collection.primary.output_options.results_folder;
    let context = &collection.context;
    let bio_samples = &collection.well_sample.bio_samples;

    if collection.well_sample.has_barcoded_samples() {
        let mut filenames = Vec::new();
        for bio_sample in bio_samples {
            for barcode in &bio_sample.barcodes {
                let filename =
                    hifi_reads_bam_path(results_folder, context, Some(barcode.short_code()));
                filenames.push(format!("{},{}", bio_sample.name, filename));
            }
        }
        Ok(filenames)
    } else {
        let first = bio_samples
            .first()
            .ok_or_else(|| ConverterError::MissingBioSample {
                context: context.clone(),
            })?;
        let filename = hifi_reads_bam_path(results_folder, context, None);
        Ok(vec![format!("{},{}", first.name, filename)])
    }
}
