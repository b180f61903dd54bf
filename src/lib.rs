//! The library code for the `monthwise` archive subsystem. A host static
//! site generator hands this crate its dated content items and its site
//! configuration; the crate answers with two distinct things:
//!
//! 1. One archive page per calendar month ([`crate::archive`]), derived by
//!    grouping the content items by their publication year and month
//! 2. A navigational list of month links ([`crate::nav`]) for embedding
//!    into other rendered pages
//!
//! Of the two, the first is the more involved. Each
//! [`crate::archive::ArchivePage`] carries a deterministic output location
//! and a rendering contract against the host's layout templates, and the
//! [`crate::write`] module turns the page set into files on disk the same
//! way the host writes its authored pages. The second responsibility is
//! pretty straight-forward: regroup the items at template-render time and
//! emit one list item per month.
//!
//! Both responsibilities share [`crate::config`], which resolves the
//! `monthly_archive` section of the site configuration and falls back to
//! defaults when the section (or any of its fields) is absent.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod archive;
pub mod config;
pub mod month;
pub mod nav;
pub mod post;
pub mod write;
