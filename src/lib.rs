//! # profile-details
//!
//! Reads and writes the structured attributes of a dating profile.
//!
//! Profile pages render attributes as display text: either labelled one by one, or run
//! together into three comma-separated sections. This crate splits section text into
//! attribute fields, decodes display text into canonical values, and encodes canonical
//! values into the numeric form fields the edit endpoint expects.
//!
//! See the [profile module](profile) for the pieces and how they fit together.

pub mod profile;
