// SPDX-License-Identifier: MPL-2.0
use iced_slides::app::{self, paths, Flags};
use iced_slides::logging;

const HELP: &str = "\
IcedSlides - educational slide gallery and presenter

USAGE:
  iced_slides [OPTIONS]

OPTIONS:
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --root <DIR|URL>        Asset root (directory or http(s) base URL)
  --max-slides <N>        Highest slide number probed per template (0-999)
  -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init_logging();

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        root: opt_value(&mut args, "--root"),
        max_slides: opt_value(&mut args, "--max-slides"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional flag value, logging and ignoring malformed input.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, error = %err, "ignoring invalid argument");
            None
        }
    }
}
