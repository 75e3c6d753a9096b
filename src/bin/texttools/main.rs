mod app;
mod bootstrap;
mod clap_app;
mod directories;

use app::App;
use std::process;
use texttools::error::*;

/// Returns `Err(..)` upon fatal errors
fn run() -> Result<()> {
    let app = App::new()?;
    app.start()
}

fn main() {
    let result = run();

    match result {
        Err(error) => {
            let stderr = std::io::stderr();
            default_error_handler(&error, &mut stderr.lock());
            process::exit(1);
        }
        Ok(()) => {
            process::exit(0);
        }
    }
}
