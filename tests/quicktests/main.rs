#[path = "../../src/test/quick.rs"]
mod quick;
mod tree;

use quick::Op;
use simplelog::{Config, LevelFilter, TestLogger};

/// Routes the tree's log output through the test harness. Only the first call
/// installs the logger; later calls are no-ops.
fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}
