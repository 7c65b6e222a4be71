//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! The desktop shell only talks to its environment through the traits defined here. Concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
