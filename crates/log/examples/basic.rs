//! Basic usage
//!
//! ```sh
//! LOG_FORMAT=text LOG_COLOR=true LOG_CALLER=true cargo run -p logboot --example basic
//! ```

use logboot::prelude::*;

fn main() {
    logboot::init([with_level(Level::Info), with_version("1.0.3")]);

    info!(foo = "bar", "hello world");
    debug!("only visible with LOG_LEVEL=debug");
    warn!(attempt = 2, "retrying");
}
