//! Shared test helpers

use task_list::TaskListController;
use tempfile::TempDir;

/// Create a controller backed by a fresh temporary store directory
///
/// The TempDir is returned so it stays alive for the duration of the test.
pub fn new_controller() -> (TaskListController, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let controller = TaskListController::new(dir.path()).expect("failed to create controller");
    (controller, dir)
}
