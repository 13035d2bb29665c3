// SPDX-License-Identifier: MPL-2.0
use thumber::app::{self, Flags};

const HELP: &str = "\
thumber - service satisfaction feedback widget

USAGE:
  thumber [OPTIONS]

OPTIONS:
  --endpoint <URL>     Feedback endpoint (overrides settings.toml)
  --token <TOKEN>      Anti-forgery token sent with every submission
  --referer <URL>      Page the feedback is about
  --cookie <VALUE>     Cookie header forwarded to the endpoint
  --lang <LOCALE>      Interface language (e.g. en-US, fr)
  --config-dir <PATH>  Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  THUMBER_CONFIG_DIR   Default for --config-dir
  RUST_LOG             Log filter (e.g. thumber=debug)
";

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        endpoint: opt_value(&mut args, "--endpoint"),
        token: opt_value(&mut args, "--token"),
        referer: opt_value(&mut args, "--referer"),
        cookie: opt_value(&mut args, "--cookie"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring {key}: {err}");
        None
    })
}
