//! sleepwatch main entrypoint.

use sleepwatch::run;
use sleepwatch::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
