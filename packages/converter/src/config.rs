//! Constants and output path construction.

/// Directory segment under the results folder where HiFi BAM files land.
pub const HIFI_READS_DIR: &str = "hifi_reads";

/// Build the quoted path of a HiFi reads BAM file for a collection.
///
/// The results folder is concatenated verbatim: if it lacks a trailing
/// separator none is inserted, matching the paths the instrument reports.
///
/// # Arguments
/// * `results_folder` - Results folder path prefix (may be empty)
/// * `context` - Movie context identifier of the collection
/// * `barcode` - Short barcode code for demultiplexed output, `None` for a
///   single unbarcoded sample
///
/// # Examples
/// ```
/// use revio_converter::config::hifi_reads_bam_path;
///
/// assert_eq!(
///     hifi_reads_bam_path("r1/", "m1_s1", Some("bc2001")),
///     "\"r1/hifi_reads/m1_s1.hifi_reads.bc2001.bam\""
/// );
/// assert_eq!(
///     hifi_reads_bam_path("r1/", "m1_s1", None),
///     "\"r1/hifi_reads/m1_s1.hifi_reads.bam\""
/// );
/// ```
#[must_use]
pub fn hifi_reads_bam_path(results_folder: &str, context: &str, barcode: Option<&str>) -> String {
    match barcode {
        Some(code) => {
            format!("\"{results_folder}{HIFI_READS_DIR}/{context}.hifi_reads.{code}.bam\"")
        }
        None => format!("\"{results_folder}{HIFI_READS_DIR}/{context}.hifi_reads.bam\""),
    }
}
