// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end tests for the `phonebook` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const BOOK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<phonebook>
  <event>Event X</event>
  <entries>
    <entry><name>Bob</name><extension>5</extension></entry>
    <entry><name>amy</name><extension>12</extension></entry>
    <entry><name>Carl</name><extension>3</extension></entry>
  </entries>
</phonebook>"#;

fn write_book(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("book.xml");
    std::fs::write(&path, body).unwrap();
    path
}

fn phonebook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.current_dir(dir).env("RUST_LOG", "warn");
    cmd
}

fn data_names(text: &str) -> Vec<String> {
    text.lines()
        .skip(2)
        .map(|l| l.split_whitespace().next().unwrap_or("").to_string())
        .collect()
}

#[test]
fn missing_file_argument_fails_before_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    phonebook(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No file specified"));

    assert!(!temp_dir.path().join("phonebook.pdf").exists());
    assert!(!temp_dir.path().join("phonebook.txt").exists());
}

#[test]
fn text_output_sorted_by_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book = write_book(temp_dir.path(), BOOK);

    phonebook(temp_dir.path())
        .arg("--text")
        .arg(&book)
        .assert()
        .success();

    let text = std::fs::read_to_string(temp_dir.path().join("phonebook.txt")).unwrap();
    assert!(text.lines().all(|l| l.chars().count() == 80));
    assert_eq!(data_names(&text), ["amy", "Bob", "Carl"]);
    assert!(!temp_dir.path().join("phonebook.pdf").exists());
}

#[test]
fn text_output_sorted_by_extension() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book = write_book(temp_dir.path(), BOOK);

    phonebook(temp_dir.path())
        .args(["--text", "--sort", "extension", "--width", "40"])
        .arg(&book)
        .assert()
        .success();

    let text = std::fs::read_to_string(temp_dir.path().join("phonebook.txt")).unwrap();
    assert!(text.lines().all(|l| l.chars().count() == 40));
    assert_eq!(data_names(&text), ["Carl", "Bob", "amy"]);
}

#[test]
fn unknown_sort_key_warns_and_keeps_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book = write_book(temp_dir.path(), BOOK);

    phonebook(temp_dir.path())
        .args(["--text", "--sort", "foo"])
        .arg(&book)
        .assert()
        .success()
        .stderr(predicate::str::contains("unsupported sort option"));

    let text = std::fs::read_to_string(temp_dir.path().join("phonebook.txt")).unwrap();
    assert_eq!(data_names(&text), ["Bob", "amy", "Carl"]);
}

#[test]
fn pdf_with_cover_page() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book = write_book(temp_dir.path(), BOOK);
    let logo = temp_dir.path().join("logo.png");
    image::RgbImage::from_pixel(60, 30, image::Rgb([10, 90, 200]))
        .save(&logo)
        .unwrap();

    phonebook(temp_dir.path())
        .arg("--logo")
        .arg(&logo)
        .args(["--event", "Override Camp"])
        .arg(&book)
        .assert()
        .success();

    let bytes = std::fs::read(temp_dir.path().join("phonebook.pdf")).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn pdf_shows_event_override_and_sorted_rows() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book = write_book(temp_dir.path(), BOOK);
    let logo = temp_dir.path().join("logo.png");
    image::RgbImage::from_pixel(40, 40, image::Rgb([0, 0, 0]))
        .save(&logo)
        .unwrap();

    phonebook(temp_dir.path())
        .arg("--logo")
        .arg(&logo)
        .args(["--event", "Override Camp"])
        .arg(&book)
        .assert()
        .success();

    let bytes = std::fs::read(temp_dir.path().join("phonebook.pdf")).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();

    let cover = doc.extract_text(&[1]).unwrap();
    assert!(cover.contains("Override Camp"), "cover text: {cover}");
    assert!(!cover.contains("Event X"), "cover text: {cover}");

    let table = doc.extract_text(&[2]).unwrap();
    let amy = table.find("amy").unwrap();
    let bob = table.find("Bob").unwrap();
    let carl = table.find("Carl").unwrap();
    assert!(amy < bob && bob < carl, "table text: {table}");
}

#[test]
fn pdf_without_cover_needs_no_logo() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book = write_book(temp_dir.path(), BOOK);

    phonebook(temp_dir.path())
        .arg("--nofrontpage")
        .arg(&book)
        .assert()
        .success();

    let bytes = std::fs::read(temp_dir.path().join("phonebook.pdf")).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn missing_logo_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book = write_book(temp_dir.path(), BOOK);

    phonebook(temp_dir.path())
        .args(["--logo", "absent.png"])
        .arg(&book)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.png"));
}

#[test]
fn unreadable_input_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .arg("--text")
        .arg("nowhere.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read nowhere.xml"));
}

#[test]
fn malformed_input_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book = write_book(
        temp_dir.path(),
        "<phonebook><entries><entry><name>X</name><extension>twelve</extension>\
         </entry></entries></phonebook>",
    );

    phonebook(temp_dir.path())
        .arg("--text")
        .arg(&book)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse phonebook"));

    assert!(!temp_dir.path().join("phonebook.txt").exists());
}
