//! # Candidate Filters
//!
//! This module contains the pure predicates applied to pull request
//! candidates during a check.
//!
//! The filters are organized into submodules:
//! - `paths`: Glob and directory-prefix matching of changed file paths
//! - `skip_ci`: Detection of `[ci skip]`/`[skip ci]` markers in free text
//!
//! These predicates are used by `PrScout` to decide which pull requests
//! qualify as new versions.

pub mod paths;
pub mod skip_ci;
