#![allow(unused)]
//! Configuration harness.
//!
//! # What this covers
//!
//! - First load creates `config.toml` under `$XDG_CONFIG_HOME/fieldscribe/`
//!   with the embedded defaults.
//! - A user-edited file layers over the defaults: overridden keys win,
//!   untouched keys keep their default values.
//!
//! Both scenarios run inside one test because they share the
//! `XDG_CONFIG_HOME` environment variable.
//!
//! # Running
//!
//! ```sh
//! cargo test --test config_harness
//! ```

use fieldscribe_core::config::Config;
use pretty_assertions::assert_eq;

#[test]
fn load_creates_defaults_then_layers_overrides() {
    // Fresh config dir: load must create the file and return defaults.
    let fresh = tempfile::tempdir().expect("tempdir");
    std::env::set_var("XDG_CONFIG_HOME", fresh.path());

    let cfg = Config::load().expect("first load");
    assert_eq!(cfg.extractor.max_input_bytes, 1024 * 1024);
    assert!(cfg.output.skip_empty_values);
    assert!(fresh.path().join("fieldscribe/config.toml").exists());

    // Edited config: overridden keys win, the rest stay at defaults.
    let edited = tempfile::tempdir().expect("tempdir");
    let dir = edited.path().join("fieldscribe");
    std::fs::create_dir_all(&dir).expect("config dir");
    std::fs::write(dir.join("config.toml"), "[extractor]\nmax_input_bytes = 64\n")
        .expect("write override");
    std::env::set_var("XDG_CONFIG_HOME", edited.path());

    let cfg = Config::load().expect("second load");
    assert_eq!(cfg.extractor.max_input_bytes, 64);
    assert!(cfg.output.skip_empty_values);

    std::env::remove_var("XDG_CONFIG_HOME");
}
