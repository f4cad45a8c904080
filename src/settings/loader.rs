use anyhow::{anyhow, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    #[test]
    fn explicit_config_file_is_merged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("qseek.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            "[api]\nbase_url = \"http://file.test/api\"\ntimeout_secs = 7\n\n[ui]\ntitle = \"Ask\""
        )
        .expect("write config");

        let cli = CliArgs::parse_from([
            "qseek",
            "--no-config",
            "--config",
            path.to_str().expect("utf8 path"),
        ]);
        let resolved = load(&cli).expect("loads");

        assert_eq!(resolved.base_url, "http://file.test/api");
        assert_eq!(resolved.timeout.as_secs(), 7);
        assert_eq!(resolved.input_title, "Ask");
    }
}
