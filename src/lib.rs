// SPDX-License-Identifier: PMPL-1.0-or-later

//! pseudoloc — pseudo-localization for `.resx` resource files.
//!
//! Produces a `qps-ploc` variant of each resource file so that
//! internationalisation bugs (hard-coded strings, truncation, broken
//! placeholders) show up without a real translation.
//!
//! PIPELINE:
//! 1. **i18n**: classifies entry values that are themselves culture names.
//! 2. **pseudo**: rewrites translatable text with accented glyphs, leaving
//!    format placeholders intact.
//! 3. **resx**: reads and writes the XML resource container.
//! 4. **pipeline**: batch driver over files and directories.

pub mod config;
pub mod i18n;
pub mod logging;
pub mod pipeline;
pub mod pseudo;
pub mod resx;
pub mod types;

pub use i18n::{is_locale_identifier, PSEUDO_LOCALE};
pub use pseudo::{pseudofy, Pseudofier};
