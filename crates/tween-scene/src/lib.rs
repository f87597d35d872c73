//! Toolkit-facing layer of the tween transition helper.
//!
//! This crate turns an [`AnimationDescriptor`] into configured animation
//! instances on an external scheduler:
//!
//! ```text
//! Session
//!   ├── WidgetTree (capability trait: queries, layout refresh, setters)
//!   └── AnimationScheduler (capability trait: start configured instances)
//! ```
//!
//! The scheduler's timer loop, per-frame interpolation, and the widget
//! tree itself are collaborators, not part of this crate; integrations
//! implement the two traits and call [`apply_track`] from their frame
//! callback.

pub mod scheduler;
pub mod session;
pub mod widget;

pub use scheduler::{AnimationScheduler, InstanceConfig, Repeat, Track, apply_track};
pub use session::{Session, animate, animate_targets};
pub use widget::{WidgetId, WidgetKind, WidgetTree};

pub use tween_core::{AnimationDescriptor, CompleteCallback, CurveKind, Easing, UserData};
