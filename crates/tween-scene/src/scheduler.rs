//! Scheduler capability surface and per-frame track adapters.
//!
//! One [`InstanceConfig`] describes one scheduler registration: a single
//! property on a single widget, with its timing window, repeat count,
//! curve, and value range. The external scheduler owns everything after
//! [`AnimationScheduler::start`]: the timer loop, interpolation, repeat
//! bookkeeping, and completion dispatch. Its frame callback hands
//! interpolated values back through [`apply_track`].

use tween_core::{CompleteCallback, CurveKind, UserData};

use crate::widget::{WidgetId, WidgetKind, WidgetTree};

/// Which widget property an animation instance drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    X,
    Y,
    Width,
    Height,
    Opacity,
    Rotate,
    Scale,
}

/// Repeat behavior for an animation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Play once.
    #[default]
    None,
    /// Play, then repeat this many additional times.
    Count(u32),
    /// The scheduler's infinite-repeat sentinel.
    Infinite,
}

/// A fully configured scheduler registration for one property on one
/// widget.
///
/// `curve: None` leaves the scheduler's default interpolation curve
/// untouched. `track`/`values` are `None` only while the session
/// controller is still filling the config in; every config handed to
/// [`AnimationScheduler::start`] has both set.
#[derive(Debug, Clone)]
pub struct InstanceConfig {
    pub target: WidgetId,
    /// Time window, caller-defined units (conventionally ms).
    pub duration: i32,
    /// Delay before the window opens. Zero is the scheduler default.
    pub delay: i32,
    pub repeat: Repeat,
    pub curve: Option<CurveKind>,
    pub track: Option<Track>,
    /// `(from, to)` interpolation range.
    pub values: Option<(i32, i32)>,
    /// Invoked by the scheduler when the instance finishes.
    pub on_complete: Option<CompleteCallback>,
    /// Handed back to `on_complete` unchanged.
    pub user_data: Option<UserData>,
}

impl InstanceConfig {
    /// A blank instance bound to `target`, everything else at scheduler
    /// defaults.
    pub fn new(target: WidgetId) -> Self {
        Self {
            target,
            duration: 0,
            delay: 0,
            repeat: Repeat::None,
            curve: None,
            track: None,
            values: None,
            on_complete: None,
            user_data: None,
        }
    }
}

/// The animation scheduler this module configures but does not
/// implement.
///
/// `start` registers the instance and begins playing it immediately;
/// there is no batched commit. The returned handle is the caller's
/// lever for cancellation or completion queries through the scheduler's
/// own API.
pub trait AnimationScheduler {
    type Handle;

    fn start(&mut self, instance: InstanceConfig) -> Self::Handle;
}

/// Apply one interpolated frame value to a widget property.
///
/// This is the per-frame adapter the scheduler integration calls with
/// each tick's value. Rotation and zoom branch on the widget kind:
/// image widgets have dedicated angle/zoom setters, everything else
/// goes through transform style properties. Opacity is a style
/// property for every kind.
pub fn apply_track<T: WidgetTree + ?Sized>(tree: &mut T, id: WidgetId, track: Track, value: i32) {
    match track {
        Track::X => tree.set_x(id, value),
        Track::Y => tree.set_y(id, value),
        Track::Width => tree.set_width(id, value),
        Track::Height => tree.set_height(id, value),
        Track::Opacity => tree.set_style_opacity(id, value),
        Track::Rotate => match tree.kind(id) {
            WidgetKind::Image => tree.set_image_angle(id, value),
            WidgetKind::Plain => tree.set_style_rotation(id, value),
        },
        Track::Scale => match tree.kind(id) {
            WidgetKind::Image => tree.set_image_zoom(id, value),
            WidgetKind::Plain => tree.set_style_zoom(id, value),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_instance_defaults() {
        let config = InstanceConfig::new(WidgetId(3));
        assert_eq!(config.target, WidgetId(3));
        assert_eq!(config.duration, 0);
        assert_eq!(config.delay, 0);
        assert_eq!(config.repeat, Repeat::None);
        assert!(config.curve.is_none());
        assert!(config.track.is_none());
        assert!(config.values.is_none());
    }

    #[test]
    fn test_repeat_default_is_play_once() {
        assert_eq!(Repeat::default(), Repeat::None);
    }
}
