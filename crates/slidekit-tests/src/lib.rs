//! Integration test crate for SlideKit.
//!
//! Holds scenarios that span the editor, the exporter and the playback
//! model.

#[cfg(test)]
mod export;

#[cfg(test)]
mod editor;

#[cfg(test)]
mod playback;
