// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrina::app::{self, Flags};

const USAGE: &str = "\
Usage: vitrina [OPTIONS]

Options:
  --lang <tag>          Interface language (e.g. es-MX, en-US)
  --content <file>      Site content TOML replacing the built-in content
  --config-dir <dir>    Directory holding settings.toml
  -h, --help            Print this help";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        content_path: args.opt_value_from_str("--content")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrina=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            println!("{USAGE}");
            Ok(())
        }
        Err(err) => {
            eprintln!("vitrina: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    }
}
