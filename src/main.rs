// SPDX-License-Identifier: MPL-2.0
use landing_site::app::{self, Flags};

const USAGE: &str = "\
Usage: landing_site [OPTIONS]

Options:
  --config-dir <DIR>     Directory holding settings.toml
  --locale-root <ROOT>   `embedded`, a directory, or an http(s) base URL
  --member <N>           Model offered by the header (repeatable)
  -h, --help             Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        std::process::exit(0);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        locale_root: args.opt_value_from_str("--locale-root")?,
        members: args.values_from_str("--member")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
