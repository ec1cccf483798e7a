// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toaster - toast notification demo

USAGE:
  iced_toaster [OPTIONS]

OPTIONS:
  --duration <MS>       Toast duration in milliseconds (default: 6000)
  --config-dir <DIR>    Directory containing settings.toml
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        duration_ms: args.opt_value_from_str("--duration")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_toaster=info")),
        )
        .init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
