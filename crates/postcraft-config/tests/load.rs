#![allow(clippy::expect_used, clippy::unwrap_used, reason = "Fine in tests")]
use std::fs;

use postcraft_config::{Config, ConfigError};
use postcraft_markup::Platform;
use tempfile::tempdir;

#[test]
fn test_from_file_toml_and_json() {
  let dir = tempdir().expect("Failed to create temp dir");

  let toml_path = dir.path().join("postcraft.toml");
  fs::write(
    &toml_path,
    "max_chars = 80\nplatform = \"wechat\"\n\n[generation]\nuse_emoji = \
     false\n",
  )
  .unwrap();
  let config = Config::from_file(&toml_path).unwrap();
  assert_eq!(config.max_chars, 80);
  assert_eq!(config.platform, Platform::Wechat);
  assert!(!config.generation.use_emoji);
  assert!(config.generation.add_hashtags);

  let json_path = dir.path().join("postcraft.json");
  fs::write(&json_path, r#"{ "images": ["a.png"], "post_type": "教程" }"#)
    .unwrap();
  let config = Config::from_file(&json_path).unwrap();
  assert_eq!(config.images, vec!["a.png"]);
  assert_eq!(config.post_type, "教程");
}

#[test]
fn test_from_file_rejects_unknown_extension() {
  let dir = tempdir().expect("Failed to create temp dir");
  let path = dir.path().join("postcraft.yaml");
  fs::write(&path, "max_chars: 10").unwrap();

  let err = Config::from_file(&path).unwrap_err();
  assert!(err.to_string().contains("Unsupported config file format"));
}

#[test]
fn test_from_file_reports_parse_errors() {
  let dir = tempdir().expect("Failed to create temp dir");
  let path = dir.path().join("broken.toml");
  fs::write(&path, "max_chars = ").unwrap();

  let err = Config::from_file(&path).unwrap_err();
  assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_load_reports_file_errors_once() {
  let dir = tempdir().expect("Failed to create temp dir");
  let path = dir.path().join("broken.toml");
  fs::write(&path, "max_chars = ").unwrap();

  let err = Config::load(&[path.clone()], &[]).unwrap_err();
  assert!(matches!(&err, ConfigError::Toml { path: p, .. } if *p == path));

  let message = err.to_string();
  assert!(message.starts_with("Failed to parse TOML config from"));
  assert_eq!(message.matches("broken.toml").count(), 1, "got: {message}");
}

#[test]
fn test_missing_file_keeps_io_source() {
  let dir = tempdir().expect("Failed to create temp dir");
  let err = Config::load(&[dir.path().join("absent.toml")], &[]).unwrap_err();
  assert!(matches!(err, ConfigError::Read { .. }));
  assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_load_merges_files_in_order() {
  let dir = tempdir().expect("Failed to create temp dir");
  let first = dir.path().join("base.toml");
  let second = dir.path().join("site.json");
  fs::write(&first, "platform = \"toutiao\"\nimages = [\"one.png\"]\n").unwrap();
  fs::write(&second, r#"{ "platform": "sohu", "images": ["two.png"] }"#)
    .unwrap();

  let config = Config::load(&[first, second], &[]).unwrap();
  assert_eq!(config.platform, Platform::Sohu);
  assert_eq!(config.images, vec!["one.png", "two.png"]);
}

#[test]
fn test_load_applies_overrides_after_files() {
  let dir = tempdir().expect("Failed to create temp dir");
  let path = dir.path().join("postcraft.toml");
  fs::write(&path, "max_chars = 80\n").unwrap();

  let config = Config::load(&[path], &[
    "max_chars=60".to_string(),
    "generation.filter_marketing=on".to_string(),
  ])
  .unwrap();
  assert_eq!(config.max_chars, 60);
  assert!(config.generation.filter_marketing);
}

#[test]
fn test_load_rejects_zero_budget() {
  let dir = tempdir().expect("Failed to create temp dir");
  let path = dir.path().join("postcraft.toml");
  fs::write(&path, "max_chars = 0\n").unwrap();

  assert!(Config::load(&[path], &[]).is_err());
}

#[test]
fn test_config_file_discovery_order() {
  let dir = tempdir().expect("Failed to create temp dir");
  assert_eq!(Config::config_file_in(dir.path()), None);

  fs::create_dir_all(dir.path().join(".config")).unwrap();
  fs::write(dir.path().join(".config/postcraft.toml"), "").unwrap();
  assert_eq!(
    Config::config_file_in(dir.path()),
    Some(dir.path().join(".config/postcraft.toml"))
  );

  fs::write(dir.path().join("postcraft.json"), "{}").unwrap();
  assert_eq!(
    Config::config_file_in(dir.path()),
    Some(dir.path().join("postcraft.json"))
  );

  fs::write(dir.path().join("postcraft.toml"), "").unwrap();
  assert_eq!(
    Config::config_file_in(dir.path()),
    Some(dir.path().join("postcraft.toml"))
  );
}

#[test]
fn test_generate_default_config_round_trips() {
  let dir = tempdir().expect("Failed to create temp dir");

  for format in ["toml", "json"] {
    let path = dir.path().join(format!("generated.{format}"));
    Config::generate_default_config(format, &path).unwrap();
    assert_eq!(Config::from_file(&path).unwrap(), Config::default());
  }

  let err =
    Config::generate_default_config("yaml", &dir.path().join("generated.yaml"))
      .unwrap_err();
  assert!(matches!(err, ConfigError::Template(_)));
  assert_eq!(err.to_string(), "Unsupported config format: yaml");
}
