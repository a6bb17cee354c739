//! Console logging.
//!
//! Routes `tracing` events to the browser console through a
//! `tracing-subscriber` fmt layer backed by `tracing-web`, which picks the
//! console method from the event level. Timestamps are omitted because
//! `std::time` is unavailable on `wasm32-unknown-unknown`.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Most verbose level emitted: debug in debug builds, info otherwise.
pub fn max_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(max_level())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        assert_eq!(max_level(), expected);
    }
}
