//! # tinct-theme — contrast-guaranteed theme derivation
//!
//! Turns six user-chosen core colors, three numeric knobs, and a
//! light/dark mode into a complete set of semantic style tokens, adjusting
//! colors automatically wherever a raw choice would be unreadable.
//!
//! # Architecture
//!
//! ```text
//! CoreColors + CoreNumbers + Mode
//!     │
//!     ▼
//! contrast.rs: WCAG ratio + lightness search (>= 4.5 text, >= 3.0 UI)
//!     │
//!     ▼
//! state.rs:    hover / pressed shifts      series.rs: chart hues
//!     │                                        │
//!     ▼                                        ▼
//! theme.rs:    synthesize the token tree in fixed order
//!     │
//!     ▼
//! audit.rs:    re-measure critical pairs → theme.meta.report
//!     │
//!     ▼
//! export.rs:   flat name → value mapping (and CSS)
//! ```
//!
//! Everything here is pure and synchronous. The only I/O is
//! [`ThemeConfig::load`].

// Mathematical code uses small integer-to-float casts (loop indices, angles).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Synthesis reads top to bottom as one derivation.
#![allow(clippy::too_many_lines)]

pub mod audit;
pub mod config;
pub mod contrast;
pub mod export;
pub mod input;
pub mod preset;
pub mod series;
pub mod state;
pub mod theme;

pub use audit::{ContrastReportItem, audit};
pub use config::{ConfigError, ThemeConfig};
pub use contrast::{contrast_ratio, contrast_ratio_hex, ensure_contrast, ensure_contrast_all};
pub use export::{TOKEN_SCHEMA_VERSION, export_tokens, to_css};
pub use input::{CoreColors, CoreNumbers, Mode};
pub use state::{InteractionState, tweak};
pub use theme::{Theme, synthesize};
