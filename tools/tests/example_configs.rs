use std::{collections::HashSet, fs, path::Path};
use tools::config::{Config, OutputFormat};

const CONFIG_FILES: &[&str] = &["tle-dump.toml"];

#[test]
fn example_config_file_list_matches_expected() {
    let cfg_files: HashSet<String> = fs::read_dir("configs")
        .unwrap()
        .map(|d| d.unwrap().file_name().into_string().unwrap())
        .collect();
    let expected: HashSet<String> = CONFIG_FILES.iter().map(|f| f.to_string()).collect();
    assert_eq!(cfg_files, expected, "Example configs directory is missing an expected config file or contains a new config file that should be tested");
}

#[test]
fn example_config_files_parse() {
    let dir = Path::new("configs");
    for cfg_file in CONFIG_FILES {
        Config::load(dir.join(cfg_file)).unwrap();
    }
}

#[test]
fn tle_dump_example() {
    let cfg = Config::load("configs/tle-dump.toml").unwrap();
    assert!(cfg.reader.validate);
    assert_eq!(cfg.output.format, OutputFormat::Text);
    assert!(cfg.output.show_epoch);
}
