//! Typed document model for Revio run metadata.
//!
//! These types mirror the element hierarchy of the metadata XML that Revio
//! instruments write next to each run. They are built once during decoding
//! and never mutated afterwards; repeated elements keep document order.

/// Top-level metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacBioDataModel {
    /// The experiment container holding all runs.
    pub experiment_container: ExperimentContainer,
}

/// Container for the sequencing runs of an experiment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentContainer {
    /// Runs in document order (from `Runs > Run`).
    pub runs: Vec<Run>,
}

/// One sequencing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    /// Output artifacts of the run.
    pub outputs: Outputs,
}

/// Output artifacts of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outputs {
    /// Subread sets in document order (from `SubreadSets > SubreadSet`).
    pub subread_sets: Vec<SubreadSet>,
}

/// One sequencing dataset produced by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubreadSet {
    /// Dataset-level metadata.
    pub dataset_metadata: DataSetMetadata,
}

/// Dataset-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSetMetadata {
    /// Collections in document order (from `Collections > CollectionMetadata`).
    pub collections: Vec<CollectionMetadata>,
}

/// One sample collection unit, identified by its movie context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionMetadata {
    /// Movie context identifier (e.g., "m84297_250919_165138_s3"), used as a
    /// filename component.
    pub context: String,

    /// The physical sample well.
    pub well_sample: WellSample,

    /// Primary-analysis output configuration.
    pub primary: Primary,
}

/// Physical sample well of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellSample {
    /// Biological samples in document order (from `BioSamples > BioSample`).
    pub bio_samples: Vec<BioSample>,
}

impl WellSample {
    /// Whether any sample in this well carries demultiplexing barcodes.
    #[must_use]
    pub fn has_barcoded_samples(&self) -> bool {
        self.bio_samples.iter().any(|s| !s.barcodes.is_empty())
    }
}

/// A named biological sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BioSample {
    /// Sample name (attribute `Name`).
    pub name: String,

    /// Demultiplexing barcodes in document order (from `DNABarcodes > DNABarcode`).
    pub barcodes: Vec<DnaBarcode>,
}

/// A demultiplexing barcode tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnaBarcode {
    /// Barcode name (attribute `Name`), formatted as repeated codes joined by
    /// `--` (e.g., "bc2001--bc2001").
    pub name: String,
}

impl DnaBarcode {
    /// The short barcode form used in HiFi BAM filenames: everything before
    /// the first `-`, or the whole name when no hyphen is present.
    ///
    /// # Examples
    /// ```
    /// use revio_converter::types::DnaBarcode;
    ///
    /// let barcode = DnaBarcode { name: "bc2001--bc2001".to_string() };
    /// assert_eq!(barcode.short_code(), "bc2001");
    ///
    /// let plain = DnaBarcode { name: "bc42".to_string() };
    /// assert_eq!(plain.short_code(), "bc42");
    /// ```
    #[must_use]
    pub fn short_code(&self) -> &str {
        self.name.split('-').next().unwrap_or(&self.name)
    }
}

/// Primary-analysis output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Primary {
    /// Output path configuration.
    pub output_options: OutputOptions,
}

/// Output path configuration of the primary analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Results folder path (text of `ResultsFolder`). May be empty and is not
    /// guaranteed to end in a separator; it is concatenated verbatim into
    /// output paths.
    pub results_folder: String,
}
