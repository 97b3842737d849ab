use super::*;

fn args<'a>(list: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    list.iter().map(|s| s.to_string())
}

#[test]
fn test_checkpoint_and_source_args() {
    let config = Config::from_args(args(&["dump.json", "crawled.json"]));

    assert_eq!(config.checkpoint, PathBuf::from("dump.json"));
    assert_eq!(config.source, Some(PathBuf::from("crawled.json")));
}

#[test]
fn test_checkpoint_only() {
    let config = Config::from_args(args(&["dump.json"]));

    assert_eq!(config.checkpoint, PathBuf::from("dump.json"));
    assert_eq!(config.source, None);
}

#[test]
fn test_no_args_falls_back_to_default_dump() {
    let config = Config::from_args(args(&[]));

    assert_eq!(config.checkpoint, PathBuf::from(DEFAULT_CHECKPOINT));
    assert_eq!(config.source, None);
}

#[test]
fn test_extra_args_are_ignored() {
    let config = Config::from_args(args(&["dump.json", "crawled.json", "noise"]));

    assert_eq!(config.source, Some(PathBuf::from("crawled.json")));
}
