#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("escala-cli").unwrap()
}

#[test]
fn annual_prints_total_and_schedule() {
    cli()
        .args(["annual", "--year", "2026", "--seed", "42", "--people", "A,B,C,D,E,F,G,H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Escala 2026: 260 assignments"))
        .stdout(predicate::str::contains("03/01/2026 (SABADO):"));
}

#[test]
fn annual_is_reproducible_with_seed() {
    let run = || {
        cli()
            .args(["annual", "--year", "2027", "--seed", "7", "--people", "Ana,Rui,Eva"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn annual_exports_and_show_reads_back() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("diaconos.txt");
    fs::write(&roster, "João\nMaria\nPedro\n").unwrap();
    let saved = dir.path().join("escala.json");
    let csv = dir.path().join("escala.csv");

    cli()
        .args(["annual", "--year", "2026", "--seed", "1", "--people-file"])
        .arg(&roster)
        .arg("--save")
        .arg(&saved)
        .arg("--out-csv")
        .arg(&csv)
        .assert()
        .success();

    assert!(fs::read_to_string(&csv).unwrap().starts_with("date,day,role,volunteer"));

    cli()
        .args(["show", "--by-role", "--from"])
        .arg(&saved)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CHAVE:"))
        .stdout(predicate::str::contains("OFERTA:"));
}

#[test]
fn weekly_with_too_few_volunteers_fails() {
    cli()
        .args(["weekly", "--people", "A,B,C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no volunteer available"));
}

#[test]
fn weekly_allow_repeat_succeeds_with_small_roster() {
    cli()
        .args(["weekly", "--allow-repeat", "--seed", "3", "--people", "A,B,C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DOMINGO:"))
        .stdout(predicate::str::contains("SABADO:"));
}

#[test]
fn missing_roster_is_reported() {
    cli()
        .args(["annual", "--year", "2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing roster"));
}
