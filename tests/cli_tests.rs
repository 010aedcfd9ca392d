//! Command-line tests: the binary is run as a user would run it.

use assert_cmd::Command;
use predicates::prelude::*;

fn motif_scan() -> Command {
    Command::cargo_bin("motif-scan").expect("binary should build")
}

#[test]
fn test_scan_text_output() {
    motif_scan()
        .args(["scan", "GAATCC", "--motif", "GAATC"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Here is the 5'-3' DNA sequence GAATCC.",
        ))
        .stdout(predicate::str::contains(
            "GAATC also named as EcoRI found at positions 0.",
        ))
        .stdout(predicate::str::contains(
            "CTTAG also named as compl_EcoRI found at positions 0.",
        ));
}

#[test]
fn test_scan_json_output() {
    let output = motif_scan()
        .args(["scan", "GAATCCGAATCC", "--select", "0", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sense_sequence"], "GAATCCGAATCC");
    assert_eq!(json["antisense_sequence"], "CTTAGGCTTAGG");
    assert_eq!(json["sense"][0]["label"], "EcoRI");
    assert_eq!(json["sense"][0]["positions"], serde_json::json!([0, 6]));
    assert_eq!(json["antisense"][0]["label"], "compl_EcoRI");
    assert_eq!(json["motifs"].as_array().unwrap().len(), 2);
}

#[test]
fn test_scan_select_toggle_deselects() {
    // Row 0 toggled twice leaves only row 1 (XbaI)
    motif_scan()
        .args([
            "scan", "GAATCCTCTAGA", "-s", "0", "-s", "1", "-s", "0", "--format", "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sense\tTCTAGA\tXbaI\t6"))
        .stdout(predicate::str::contains("EcoRI").not());
}

#[test]
fn test_scan_with_library_edit() {
    motif_scan()
        .args([
            "scan",
            "AAGCTTAAA",
            "--set",
            "AAGCTT=HindIII",
            "--motif",
            "AAGCTT",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "AAGCTT also named as HindIII found at positions 0.",
        ));
}

#[test]
fn test_scan_rejects_invalid_sequence() {
    motif_scan()
        .args(["scan", "GAATC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sequence length 5"));

    motif_scan()
        .args(["scan", "gaatcc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base 'g' at position 0"));
}

#[test]
fn test_scan_unknown_selection_index() {
    motif_scan()
        .args(["scan", "GAATCC", "--select", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 99 out of range"));
}

#[test]
fn test_scan_delete_missing_pattern() {
    motif_scan()
        .args(["scan", "GAATCC", "--set", "AAAA="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pattern 'AAAA' not found"));
}

#[test]
fn test_scan_fasta_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("insert.fa");
    std::fs::write(&path, ">insert\nAAACTG\nCAGAAA\n").unwrap();

    motif_scan()
        .args(["scan", "--input"])
        .arg(&path)
        .args(["--motif", "CTGCAG", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sense\tCTGCAG\tPstI\t3"))
        .stdout(predicate::str::contains("antisense\tGACGTC\tcompl_PstI\t3"));
}

#[test]
fn test_scan_stdin_input() {
    motif_scan()
        .args(["scan", "--input", "-", "--motif", "GGTCTC", "--format", "tsv"])
        .write_stdin("GGT\nCTC\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("sense\tGGTCTC\tBcaI\t0"));
}

#[test]
fn test_scan_rejects_multi_record_fasta() {
    motif_scan()
        .args(["scan", "--input", "-"])
        .write_stdin(">a\nGAATCC\n>b\nGAATCC\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than one sequence record"));
}

#[test]
fn test_complement_command() {
    motif_scan()
        .args(["complement", "GAATCC"])
        .assert()
        .success()
        .stdout("CTTAGG\n");
}

#[test]
fn test_validate_command() {
    motif_scan()
        .args(["validate", "GAATCC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 bases (2 codons)"));

    motif_scan()
        .args(["validate", "GAATCN"])
        .assert()
        .failure();
}

#[test]
fn test_library_list() {
    motif_scan()
        .args(["library", "list", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0\tGAATC\tEcoRI"))
        .stdout(predicate::str::contains("6\tGGTCTC\tBcaI"));
}

#[test]
fn test_library_show() {
    motif_scan()
        .args(["library", "show", "GCGGCCGC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NotI"))
        .stdout(predicate::str::contains("Complement: CGCCGGCG"));
}

#[test]
fn test_library_rejects_bad_pattern_length() {
    motif_scan()
        .args(["library", "list", "--set", "GAA=Short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern length 3"));
}
