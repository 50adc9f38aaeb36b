//! # Navigo CLI Translate Integration Tests
//!
//! File: cli/tests/translate.rs
//!
//! ## Overview
//!
//! Runs `navigo translate` end to end against a mockito translation endpoint.
//!

mod common;
use common::*;
use mockito::Matcher;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_translate_missing_input() {
    let dir = tempdir().unwrap();
    navigo_in(dir.path())
        .args(["translate", "--lang", "fr", "--input", "missing.json"])
        .env("GOOGLE_TRANSLATE_API_KEY", "k")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input file not found: missing.json"));
}

#[test]
fn test_translate_missing_credential() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{"a": "Hello"}"#).unwrap();
    navigo_in(dir.path())
        .args(["translate", "--lang", "fr", "--input", "en.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GOOGLE_TRANSLATE_API_KEY is required"));
}

#[test]
fn test_translate_rejects_bad_lang() {
    let dir = tempdir().unwrap();
    navigo_in(dir.path())
        .args(["translate", "--lang", "../x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid target language code"));
}

/// # Test Translate Round Trip (`test_translate_round_trip`)
///
/// Default paths: reads `public/i18n/en.json`, writes `public/i18n/fr.json`.
/// An empty translation keeps the source string.
#[test]
fn test_translate_round_trip() {
    let dir = tempdir().unwrap();
    let i18n = dir.path().join("public/i18n");
    fs::create_dir_all(&i18n).unwrap();
    fs::write(i18n.join("en.json"), r#"{"a": "Hello", "b": "Bye"}"#).unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", Matcher::Regex("^/language/translate/v2".to_string()))
        .match_query(Matcher::UrlEncoded("key".into(), "tr-key".into()))
        .match_body(Matcher::Exact("q=Hello&q=Bye&target=fr&format=text".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data":{"translations":[{"translatedText":""},{"translatedText":"Au revoir"}]}}"#,
        )
        .create();
    write_project_config(dir.path(), &server.url());

    navigo_in(dir.path())
        .env("GOOGLE_TRANSLATE_API_KEY", "tr-key")
        .args(["translate", "--lang", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote translations to public/i18n/fr.json"));

    mock.assert();
    let written = fs::read_to_string(i18n.join("fr.json")).unwrap();
    assert_eq!(written, "{\n  \"a\": \"Hello\",\n  \"b\": \"Au revoir\"\n}");
}

#[test]
fn test_translate_provider_error_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{"a": "Hello"}"#).unwrap();

    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(503)
        .create();
    write_project_config(dir.path(), &server.url());

    navigo_in(dir.path())
        .env("GOOGLE_TRANSLATE_API_KEY", "tr-key")
        .args(["translate", "--lang", "de", "--input", "en.json", "--output", "de.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("HTTP 503"));
    assert!(!dir.path().join("de.json").exists());
}

#[test]
fn test_translate_unreachable_provider_hides_credential() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{"a": "Hello"}"#).unwrap();
    write_project_config(dir.path(), "http://127.0.0.1:9");

    navigo_in(dir.path())
        .args(["translate", "--lang", "fr", "--input", "en.json", "--api-key", "SUPERSECRET123"])
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("HTTP request failed")
                .and(predicate::str::contains("SUPERSECRET123").not()),
        );
}
