/// The check command: compute new pull request versions
pub mod check;
