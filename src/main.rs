// SPDX-License-Identifier: MPL-2.0
use iced_compare::app::{self, paths, Flags};
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_compare [OPTIONS] [FILE]

Arguments:
  [FILE]                 Image to preselect for processing

Options:
  --lang <ID>            UI language (e.g. en-US, fr)
  --endpoint <URL>       Processing service endpoint
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        endpoint: opt_value(&mut args, "--endpoint"),
        config_dir: opt_value(&mut args, "--config-dir"),
        file_path: file_argument(args.finish()),
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, error = %err, "ignoring invalid command line option");
            None
        }
    }
}

/// Builds the log filter from `RUST_LOG` directives, defaulting to `info`.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Picks the image path from the positional leftovers, skipping unknown flags.
fn file_argument(rest: Vec<OsString>) -> Option<String> {
    rest.into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .find(|arg| {
            let is_flag = arg.starts_with('-');
            if is_flag {
                tracing::warn!(option = %arg, "ignoring unknown command line option");
            }
            !is_flag
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some(String::new())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn rust_log_global_level_is_respected() {
        assert_eq!(
            log_filter(Some("warn".to_string())).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn unknown_flag_is_not_taken_as_file() {
        assert_eq!(file_argument(os(&["--bogus"])), None);
    }

    #[test]
    fn file_after_unknown_flag_is_kept() {
        assert_eq!(
            file_argument(os(&["--bogus", "photo.png"])),
            Some("photo.png".to_string())
        );
    }

    #[test]
    fn first_positional_wins() {
        assert_eq!(
            file_argument(os(&["a.png", "b.png"])),
            Some("a.png".to_string())
        );
    }
}
