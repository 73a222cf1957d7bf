//! # Collage Card
//!
//! Deterministic collage URL builder for hosted image-transformation
//! services. Five uploaded photos, a caption label, and a config file in;
//! one shareable delivery URL out.
//!
//! # Architecture
//!
//! The hard part of this crate is a pure string-building pipeline:
//!
//! ```text
//! 1. Layout     config           →  5 slot rectangles   (pure arithmetic)
//! 2. Transform  slots + photos   →  wire-format groups  (fixed contract)
//! 3. Builder    groups           →  delivery URL        (fixed order)
//! ```
//!
//! Everything around it — the upload transport that issues photo ids, the
//! UI that orders them — is an external collaborator. The builder is
//! invoked only after uploads resolve, always with already-issued ids, and
//! it performs no I/O: it is safe to call from any number of threads with
//! no coordination, and cheap enough to recompute on every input change.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Slot geometry — the 3-column masonry as pure arithmetic over config data |
//! | [`transform`] | Wire-format segment builders; owns every token, escape, and encoding |
//! | [`builder`] | Guard clauses, photo↔slot pairing, fixed-order URL assembly, [`builder::CollagePlan`] |
//! | [`config`] | `collage.toml` loading, recursive default-merging, validation |
//! | [`types`] | [`types::PhotoRef`] as issued by the upload transport |
//! | [`output`] | CLI output formatting — slot tables and segment inventories |
//!
//! # Design Decisions
//!
//! ## Layout as Data
//!
//! The "exactly 5 photos, reversed-proportion masonry" arrangement is a
//! product decision, so it lives in config as a pattern of cells
//! (`full`/`major`/`minor` per column) rather than as inline arithmetic.
//! An alternate layout — and with it the required photo count — is a config
//! change, not a code change.
//!
//! ## Injected Year
//!
//! The caption embeds the current calendar year, which would make a naive
//! builder read the clock mid-computation. The core takes the year as an
//! explicit parameter; only the outermost [`builder::collage_url`] wrapper
//! touches the clock. Tests freeze nothing and mock nothing.
//!
//! ## Empty String as Absence
//!
//! The UI contract predates this crate: an unconfigured account or an
//! incomplete photo set yields `""`, never a partial URL. Internally those
//! are typed [`builder::BuildError`] values; the stringly contract exists
//! only at the [`builder::collage_url`] boundary.
//!
//! ## Wire Format in One Place
//!
//! The host service's token syntax must be reproduced bit-exact or the
//! image renders wrong. Every token is formatted in [`transform`]; no other
//! module writes so much as a `w_`.

pub mod builder;
pub mod config;
pub mod layout;
pub mod output;
pub mod transform;
pub mod types;
