//! Pagination module
//!
//! The cursor-based page abstraction shared by every list endpoint.
//!
//! # Overview
//!
//! The provider pages results with opaque forward/backward tokens. A list
//! call yields a [`Paginated`] snapshot: the converted entities of one page,
//! the tokens verbatim, and the capability to fetch any other page of the
//! same query. Snapshots are immutable; traversal always produces a fresh
//! snapshot and re-runs the full validate → convert → wrap sequence. Token
//! absence means "no page in that direction" and is never an error.

mod page;
mod types;

pub use page::{ListQuery, PageSource, Paginated};
pub use types::{PageInfo, PageRequest, RawPage};
