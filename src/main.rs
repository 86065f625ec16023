use std::io;

use anyhow::Result;
use clap::Parser as ClapParser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

use cli::command::{Cli, LogFormat};
use cli::size::cmd_size;

mod cli;
mod input;
mod report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_level = cli.loglevel.to_level_filter();

    let multi = MultiProgress::new();

    let mut env_builder = env_logger::Builder::from_default_env();
    env_builder.filter_level(base_level);
    match cli.log_format {
        LogFormat::Plain => {
            env_builder.format_timestamp_secs();
        }
        LogFormat::Json => {
            env_builder.format(|buf, record| {
                use std::io::Write;
                let line = json_record(
                    &buf.timestamp().to_string(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
    }

    let pb = if cli.progress {
        let logger = env_builder.build();
        LogWrapper::new(multi.clone(), logger).try_init()?;
        Some(&multi)
    } else {
        env_builder.try_init()?;
        None
    };

    if let Some(describe) = option_env!("VERGEN_GIT_DESCRIBE") {
        log::debug!("{} {} ({describe})", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }

    cmd_size(&cli, pb, &mut io::stdout().lock())
}

/// One log record as a single-line JSON object.
fn json_record(ts: &str, level: log::Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts,
        "lvl": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_record_escapes_control_characters() {
        let msg = "Failed to read PNG size from /tmp/bad\x01name.png";
        let line = json_record("2026-01-01T00:00:00Z", log::Level::Error, "pngsize", msg);
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["msg"], msg);
        assert_eq!(value["lvl"], "ERROR");
        assert_eq!(value["target"], "pngsize");
    }
}
