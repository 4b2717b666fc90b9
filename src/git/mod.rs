//! Git operations via the `git` command-line tool.

pub mod commit;
pub mod runner;
pub mod staged;

pub use commit::{commit_args, create_commit};
pub use runner::{GitRunner, SystemGit};
pub use staged::{
    Transcript, check_staged_changes, collect_recent_history, collect_staged_diff,
};
