// SPDX-License-Identifier: MPL-2.0
use iced_scan::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        camera: args.opt_value_from_str("--camera").unwrap_or(None),
    };

    app::run(flags)
}
