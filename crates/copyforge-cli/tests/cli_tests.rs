use std::path::Path;

use copyforge_cli::{cli, run, Outcome};
use copyforge_test_utils::{acme_profile, name_only_profile, rival_insight};

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, value: &T) -> String {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

fn invoke(args: &[&str]) -> (anyhow::Result<Outcome>, String, String) {
    let matches = cli()
        .try_get_matches_from(std::iter::once("copyforge").chain(args.iter().copied()))
        .unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run(&matches, &mut out, &mut err);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn generate_prints_json_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_json(dir.path(), "profile.json", &acme_profile());
    let (result, out, _) = invoke(&["generate", "--kind", "ad", "--profile", &profile, "--seed", "7"]);

    assert_eq!(result.unwrap(), Outcome::Done);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["businessName"], "Acme Analytics");
    assert_eq!(value["content"]["kind"], "ads");
    assert_eq!(value["content"]["ads"].as_array().map(Vec::len), Some(5));
}

#[test]
fn generate_is_reproducible_with_seed() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_json(dir.path(), "profile.json", &acme_profile());
    let insight = write_json(dir.path(), "insight.json", &rival_insight());
    let args: [&str; 9] = [
        "generate", "--kind", "social", "--profile", &profile, "--insight", &insight, "--seed", "99",
    ];
    let (_, first, _) = invoke(&args);
    let (_, second, _) = invoke(&args);
    assert_eq!(first, second);
}

#[test]
fn incomplete_profile_lists_missing_fields_per_step() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_json(dir.path(), "profile.json", &name_only_profile());
    let (result, out, err) = invoke(&["generate", "--kind", "ad", "--profile", &profile]);

    assert_eq!(result.unwrap(), Outcome::Incomplete);
    assert!(out.is_empty());
    assert!(err.contains("step 1 (Business Basics): missing industry"), "{err}");
    assert!(err.contains("step 2 (Audience): missing targetAudience"), "{err}");
    assert!(err.contains("objectives"), "{err}");
}

#[test]
fn full_site_html_written_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_json(dir.path(), "profile.json", &acme_profile());
    let out_dir = dir.path().to_string_lossy().into_owned();
    let (result, _, err) = invoke(&[
        "generate",
        "--kind",
        "website",
        "--profile",
        &profile,
        "--full-site",
        "--format",
        "html",
        "--seed",
        "1",
        "-o",
        &out_dir,
    ]);

    assert_eq!(result.unwrap(), Outcome::Done);
    let written = dir.path().join("acme-analytics-site.html");
    assert!(err.contains("acme-analytics-site.html"));
    let html = std::fs::read_to_string(written).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<!-- section:hero -->"));
}

#[test]
fn unknown_archetype_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_json(dir.path(), "profile.json", &acme_profile());
    let (result, _, _) = invoke(&[
        "generate", "--kind", "ad", "--profile", &profile, "--archetype", "ad.billboard",
    ]);
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("ad.billboard"), "{message}");
}

#[test]
fn unknown_kind_is_an_error() {
    let (result, _, _) = invoke(&["steps", "--kind", "billboard"]);
    assert!(format!("{:#}", result.unwrap_err()).contains("billboard"));
}

#[test]
fn archetypes_lists_numbered_titles() {
    let (result, out, _) = invoke(&["archetypes", "--kind", "ad"]);
    assert_eq!(result.unwrap(), Outcome::Done);
    assert!(out.starts_with("Ad:\n"));
    assert!(out.contains("Ad 3: Social Proof"));
    assert!(out.contains("ad.social-proof"));
    assert!(!out.contains("email."));
}

#[test]
fn steps_lists_required_fields() {
    let (_, out, _) = invoke(&["steps", "--kind", "email"]);
    assert!(out.starts_with("Email steps:\n"));
    assert!(out.contains("  1. Business: name, productOrService"));
}

#[test]
fn start_day_past_the_last_representable_day_is_rejected() {
    let too_late = (u16::MAX - 3).to_string();
    let parsed = cli().try_get_matches_from([
        "copyforge", "generate", "--kind", "email", "--profile", "p.json", "--start-day", &too_late,
    ]);
    assert!(parsed.is_err());
}
