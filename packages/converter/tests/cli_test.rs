//! Process-level tests for the `convert` command.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

/// Path to the standard metadata fixture.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("revio")
        .join("metadata.xml")
}

fn converter() -> Command {
    Command::cargo_bin("revio-converter").expect("binary should build")
}

#[test]
fn test_convert_default_mode() {
    converter()
        .arg("convert")
        .arg("--input")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout("289313PR1_02,289314PR1_02\n275351PR1_02\n291000PR1_01,291001PR1_01\n");
}

#[test]
fn test_convert_results_folder_mode() {
    converter()
        .args(["convert", "--resultsFolder", "-i"])
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "289313PR1_02;r84297_20250919_123822/1_C01/",
        ))
        .stdout(predicate::str::contains(
            "275351PR1_02;r84297_20250922_085610/1_A01/",
        ));
}

#[test]
fn test_convert_file_names_mode() {
    converter()
        .args(["convert", "--fileNames", "-i"])
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "289313PR1_02,\"r84297_20250919_123822/1_C01/hifi_reads/m84297_250919_165138_s3.hifi_reads.bc2001.bam\"",
        ))
        .stdout(predicate::str::contains(
            "275351PR1_02,\"r84297_20250922_085610/1_A01/hifi_reads/m84297_250922_090411_s1.hifi_reads.bam\"",
        ));
}

#[test]
fn test_convert_requires_input_flag() {
    converter()
        .arg("convert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn test_convert_missing_file() {
    converter()
        .args(["convert", "-i", "/nonexistent/metadata.xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Failed to read metadata file"));
}

#[test]
fn test_convert_malformed_xml() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "<PacBioDataModel><unclosed>").expect("write temp file");

    converter()
        .arg("convert")
        .arg("-i")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("XML parsing failed"));
}

#[test]
fn test_convert_file_names_empty_well() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"<PacBioDataModel>
  <ExperimentContainer>
    <Runs>
      <Run>
        <Outputs>
          <SubreadSets>
            <SubreadSet>
              <DataSetMetadata>
                <Collections>
                  <CollectionMetadata Context="m84297_250919_165138_s3">
                    <WellSample><BioSamples/></WellSample>
                    <Primary><OutputOptions><ResultsFolder>r1/</ResultsFolder></OutputOptions></Primary>
                  </CollectionMetadata>
                </Collections>
              </DataSetMetadata>
            </SubreadSet>
          </SubreadSets>
        </Outputs>
      </Run>
    </Runs>
  </ExperimentContainer>
</PacBioDataModel>"#
    )
    .expect("write temp file");

    converter()
        .args(["convert", "--fileNames", "-i"])
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("has no bio samples"));
}

#[test]
fn test_convert_empty_document_prints_empty_line() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "<PacBioDataModel/>").expect("write temp file");

    converter()
        .arg("convert")
        .arg("-i")
        .arg(file.path())
        .assert()
        .success()
        .stdout("\n");
}
