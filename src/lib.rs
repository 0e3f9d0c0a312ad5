//! Calendar layout and bitplane extraction for black/white/red eInk panels.
//!
//! One render cycle runs in two halves. The layout half takes an event feed
//! plus a [`DisplayConfig`] and assembles the named text fragments an
//! external template service substitutes into its markup
//! ([`LayoutAssembler`]). After an external rasterizer has turned that
//! markup into a screenshot, the render half splits it into a black plane
//! and a red plane and rotates both to the panel's mounting orientation
//! ([`Renderer`]).
//!
//! Event acquisition, template files, the rasterizer, and the wire to the
//! display controller all live outside this crate.

pub mod config;
pub mod event;
pub mod layout;
pub mod logging;
pub mod render;

pub use config::{BatteryDisplayMode, ConfigError, DisplayConfig};
pub use event::Event;
pub use layout::{EventKind, LayoutAssembler, Markup, PlainMarkup};
pub use logging::{ConsoleLogger, NullLogger, RenderLogger};
pub use render::{BitPlanes, RasterError, Renderer};
