//! habitrack main entrypoint.

use habitrack::run;
use habitrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
