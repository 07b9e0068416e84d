//! `memento-demo [CONFIG_PATH]` — print the memento walkthrough.

use std::path::PathBuf;

use anyhow::Context;
use memento_core::MementoConfig;

fn main() -> anyhow::Result<()> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => MementoConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => MementoConfig::default(),
    };

    memento_demo::init_logging(&config.general.log_level)?;

    let transcript = memento_demo::run_reference(&config);
    for line in transcript.render() {
        println!("{line}");
    }
    Ok(())
}
