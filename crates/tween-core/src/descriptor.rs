//! The declarative animation parameter descriptor.
//!
//! A descriptor is a plain value object describing one transition:
//! optional target-value text fields (each a decimal integer string,
//! optionally `%`-annotated), timing text, an optional easing curve,
//! playback flags, and optional completion hooks. Text fields use
//! `Option<String>` where `None` *or an empty string* means "not
//! animated"; the session controller never guesses defaults for absent
//! fields.
//!
//! Descriptors serialize with serde, so transition declarations can be
//! loaded from JSON documents:
//!
//! ```json
//! {
//!   "duration": "300",
//!   "x": "50%",
//!   "opacity": "255",
//!   "easing": "out_sine",
//!   "repeat": "-1"
//! }
//! ```

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Opaque caller data forwarded unchanged to the scheduler instance and
/// handed back to the completion callback.
#[derive(Clone)]
pub struct UserData(Rc<dyn Any>);

impl UserData {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Borrow the payload as a concrete type, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserData(..)")
    }
}

/// Callback invoked by the scheduler when a whole animation instance
/// (not an individual frame) finishes. Receives the instance's user
/// data, if any was attached.
#[derive(Clone)]
pub struct CompleteCallback(Rc<dyn Fn(Option<&UserData>)>);

impl CompleteCallback {
    pub fn new(f: impl Fn(Option<&UserData>) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback.
    pub fn call(&self, user_data: Option<&UserData>) {
        (self.0)(user_data)
    }
}

impl fmt::Debug for CompleteCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompleteCallback(..)")
    }
}

/// Declarative description of one widget transition.
///
/// Immutable once handed to a session. Every target field is decimal
/// integer text, optionally carrying a `%` marker for
/// relative-to-reference resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Target x position. Percent resolves against the parent content
    /// width minus the widget width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,

    /// Target y position. Percent resolves against the parent content
    /// height minus the widget height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,

    /// Target width. Percent resolves against the parent content width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Target height. Percent resolves against the parent content height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    /// Target opacity (toolkit units, typically 0-255).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,

    /// Target rotation angle (toolkit units).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<String>,

    /// Target zoom/scale factor (toolkit units).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,

    /// Pivot x, applied once, not animated. Percent resolves against the
    /// widget's own width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_x: Option<String>,

    /// Pivot y, applied once, not animated. Percent resolves against the
    /// widget's own height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_y: Option<String>,

    /// Duration text. Required: every creation entry point refuses
    /// descriptors whose duration does not parse to a positive integer.
    /// The unit is caller-defined, conventionally milliseconds.
    pub duration: String,

    /// Delay text. Absent leaves the scheduler's default delay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,

    /// Repeat count text. Negative means repeat forever; absent or zero
    /// means play once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,

    /// Easing curve. `None` leaves the scheduler's default curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,

    /// When true, the resolved start/end values are swapped: the
    /// animation plays from the target value back to the widget's
    /// current value.
    #[serde(default)]
    pub is_from: bool,

    /// Whether session-returning entry points start playback
    /// immediately. Fire-and-forget entry points always play.
    #[serde(default = "default_auto_play")]
    pub auto_play: bool,

    /// Invoked by the scheduler when an animation instance finishes.
    #[serde(skip)]
    pub on_complete: Option<CompleteCallback>,

    /// Forwarded unchanged to every configured instance.
    #[serde(skip)]
    pub user_data: Option<UserData>,
}

fn default_auto_play() -> bool {
    true
}

impl Default for AnimationDescriptor {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: None,
            height: None,
            opacity: None,
            rotate: None,
            scale: None,
            pivot_x: None,
            pivot_y: None,
            duration: String::new(),
            delay: None,
            repeat: None,
            easing: None,
            is_from: false,
            auto_play: true,
            on_complete: None,
            user_data: None,
        }
    }
}

/// Present-field access: empty text counts as absent.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    match field.as_deref() {
        Some("") | None => None,
        some => some,
    }
}

impl AnimationDescriptor {
    /// Create a descriptor with the given duration text and everything
    /// else unset.
    pub fn new(duration: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            ..Self::default()
        }
    }

    pub fn with_x(mut self, x: impl Into<String>) -> Self {
        self.x = Some(x.into());
        self
    }

    pub fn with_y(mut self, y: impl Into<String>) -> Self {
        self.y = Some(y.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_opacity(mut self, opacity: impl Into<String>) -> Self {
        self.opacity = Some(opacity.into());
        self
    }

    pub fn with_rotate(mut self, rotate: impl Into<String>) -> Self {
        self.rotate = Some(rotate.into());
        self
    }

    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    pub fn with_pivot(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.pivot_x = Some(x.into());
        self.pivot_y = Some(y.into());
        self
    }

    pub fn with_pivot_x(mut self, x: impl Into<String>) -> Self {
        self.pivot_x = Some(x.into());
        self
    }

    pub fn with_pivot_y(mut self, y: impl Into<String>) -> Self {
        self.pivot_y = Some(y.into());
        self
    }

    pub fn with_delay(mut self, delay: impl Into<String>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    pub fn with_repeat(mut self, repeat: impl Into<String>) -> Self {
        self.repeat = Some(repeat.into());
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn from_target(mut self) -> Self {
        self.is_from = true;
        self
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn on_complete(mut self, f: impl Fn(Option<&UserData>) + 'static) -> Self {
        self.on_complete = Some(CompleteCallback::new(f));
        self
    }

    pub fn with_user_data<T: Any>(mut self, value: T) -> Self {
        self.user_data = Some(UserData::new(value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let descriptor = AnimationDescriptor::new("300")
            .with_x("50%")
            .with_opacity("255")
            .with_easing(Easing::OutSine)
            .with_repeat("-1")
            .from_target();

        assert_eq!(descriptor.duration, "300");
        assert_eq!(descriptor.x.as_deref(), Some("50%"));
        assert_eq!(descriptor.opacity.as_deref(), Some("255"));
        assert_eq!(descriptor.easing, Some(Easing::OutSine));
        assert_eq!(descriptor.repeat.as_deref(), Some("-1"));
        assert!(descriptor.is_from);
        assert!(descriptor.auto_play);
    }

    #[test]
    fn test_non_empty_treats_empty_as_absent() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("10".to_string())), Some("10"));
    }

    #[test]
    fn test_serde_defaults() {
        let descriptor: AnimationDescriptor =
            serde_json::from_str(r#"{ "duration": "300", "x": "20" }"#).unwrap();
        assert_eq!(descriptor.duration, "300");
        assert_eq!(descriptor.x.as_deref(), Some("20"));
        assert!(descriptor.auto_play, "auto_play defaults to true");
        assert!(!descriptor.is_from);
        assert!(descriptor.easing.is_none());
        assert!(descriptor.delay.is_none());
    }

    #[test]
    fn test_serde_roundtrip_skips_absent_fields() {
        let descriptor = AnimationDescriptor::new("500").with_y("10%");
        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(!json.contains("pivot_x"));
        assert!(!json.contains("opacity"));

        let parsed: AnimationDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.duration, "500");
        assert_eq!(parsed.y.as_deref(), Some("10%"));
    }

    #[test]
    fn test_user_data_downcast() {
        let data = UserData::new(42u32);
        assert_eq!(data.downcast_ref::<u32>(), Some(&42));
        assert!(data.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_complete_callback_invocation() {
        use std::cell::Cell;

        let hits = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(0u32));
        let hits_in = hits.clone();
        let seen_in = seen.clone();
        let cb = CompleteCallback::new(move |data| {
            hits_in.set(hits_in.get() + 1);
            if let Some(v) = data.and_then(|d| d.downcast_ref::<u32>()) {
                seen_in.set(*v);
            }
        });

        cb.call(Some(&UserData::new(7u32)));
        assert_eq!(hits.get(), 1);
        assert_eq!(seen.get(), 7);
    }
}
