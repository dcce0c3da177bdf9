//! SlideKit Export - Static HTML bundles
//!
//! Turns a presentation into `index.html`, `styles.css`, `app.js` and the
//! narration audio, plus a manifest. The generated runtime plays the deck
//! in any browser without a framework.

pub mod assets;
pub mod bundle;
pub mod css;
pub mod exporter;
pub mod html;
pub mod minify;
pub mod options;
pub mod playback;
pub mod runtime;
pub mod writer;

pub use assets::{
    collect_audio, AssetSource, CollectedAudio, DefaultAssetSource, FsAssetSource, HttpAssetSource,
    MemoryAssetSource,
};
pub use bundle::{BundleFile, BundleManifest, ExportBundle, FileContent, FileKind, MANIFEST_VERSION};
pub use exporter::Exporter;
pub use options::{ExportOptions, OnAudioEnd};
pub use playback::{
    AudioCue, Key, MemoryProgressStore, PlaybackController, ProgressStore, StoredProgress, Tick,
};
pub use writer::{BundleWriter, MANIFEST_FILE};
