//! Tween: a declarative transition helper for widget toolkits.
//!
//! Describe a transition (position, size, opacity, rotation, scale,
//! timing, easing, repeat, pivot) as plain text fields on an
//! [`AnimationDescriptor`], and let a [`Session`] translate it into
//! configured instances on your toolkit's animation scheduler.
//!
//! This crate re-exports the two workspace members:
//! - [`tween_core`] — parsing, percent resolution, easing, descriptors
//! - [`tween_scene`] — widget/scheduler capability traits and the
//!   session controller

pub use tween_core::{
    AnimationDescriptor, CompleteCallback, CurveKind, Easing, UserData, codec, descriptor, easing,
    percent,
};
pub use tween_scene::{
    AnimationScheduler, InstanceConfig, Repeat, Session, Track, WidgetId, WidgetKind, WidgetTree,
    animate, animate_targets, apply_track, scheduler, session, widget,
};
