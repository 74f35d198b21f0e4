//! Browser-side UI glue for the chat application.
//!
//! Three independent widgets share one page: a lightbox media gallery with
//! zoom and drag-to-pan, desktop-notification helpers, and a light/dark theme
//! toggle persisted in `localStorage`. Each widget is a small controller that
//! owns its state and talks to the page only through an injected collaborator
//! trait, so the behavior is testable without a browser. The `hydrate`
//! feature adds the `web-sys` implementations of those traits and the
//! JavaScript entry points the host page calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`gallery`] | Gallery controller and its [`gallery::GalleryView`] seam |
//! | [`media`] | Filename classification and upload URLs |
//! | [`viewport`] | Zoom factor and pan offset of the rendered media |
//! | [`gesture`] | Drag-to-pan state machine |
//! | [`notify`] | Permission, desktop notification, and sound helpers |
//! | [`theme`] | Persisted light/dark theme toggle |
//! | [`config`] | Host-supplied configuration with defaults |
//! | [`error`] | Failure taxonomy shared by every collaborator |
//! | [`consts`] | Fixed limits, asset paths, and labels |
//! | `dom` | `web-sys` bindings and exported JS API (`hydrate` only) |

pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod media;
pub mod notify;
pub mod theme;
pub mod viewport;
