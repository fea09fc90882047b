use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `waymark` binary pointed at an isolated
/// entries directory. Each test passes its own temp directory, so tests
/// never share state and never touch the user's real journal.
pub fn waymark_command(entries_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("waymark").expect("waymark binary not built");
    cmd.env("WAYMARK_DIR", entries_dir);
    cmd
}
