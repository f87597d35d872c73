//! Animation session controller.
//!
//! A [`Session`] ties an ordered set of target widgets to one
//! [`AnimationDescriptor`] and, on `start`, configures one scheduler
//! instance per animated property per widget. The session's
//! `is_playing` flag only records that `start` was accepted; once
//! instances are registered, their lifecycle belongs to the scheduler
//! (cancel or await them through the [`handles`](Session::handles) it
//! returned).
//!
//! # Usage
//!
//! ```ignore
//! use tween_scene::{Session, animate};
//! use tween_core::AnimationDescriptor;
//!
//! // Fire and forget:
//! animate(&mut tree, &mut sched, button, AnimationDescriptor::new("300").with_x("50%"));
//!
//! // Or keep the session for a deferred start:
//! let descriptor = AnimationDescriptor::new("300").with_opacity("255").with_auto_play(false);
//! let mut session = Session::create(&mut tree, &mut sched, &[a, b], descriptor).unwrap();
//! session.start(&mut tree, &mut sched);
//! ```

use tracing::warn;

use tween_core::codec::{MIN_FORMAT_BUF, format_i32, parse_i32, parse_i32_lossy};
use tween_core::descriptor::{AnimationDescriptor, non_empty};
use tween_core::percent::{has_percent, resolve_extent, resolve_position, strip_percent};

use crate::scheduler::{AnimationScheduler, InstanceConfig, Repeat, Track};
use crate::widget::{WidgetId, WidgetKind, WidgetTree};

/// One transition session: target widgets, the descriptor, and the
/// handles of every scheduler instance started so far.
#[derive(Debug)]
pub struct Session<H> {
    targets: Vec<WidgetId>,
    descriptor: AnimationDescriptor,
    playing: bool,
    handles: Vec<H>,
}

/// Single-target fire-and-forget entry point.
///
/// Silent no-op when the duration does not parse to a positive integer.
pub fn animate<T, S>(tree: &mut T, sched: &mut S, target: WidgetId, descriptor: AnimationDescriptor)
where
    T: WidgetTree + ?Sized,
    S: AnimationScheduler + ?Sized,
{
    animate_targets(tree, sched, &[target], descriptor);
}

/// Multi-target fire-and-forget entry point.
///
/// Silent no-op when `targets` is empty or the duration does not parse
/// to a positive integer. The session is started immediately and
/// dropped; use [`Session::create`] to keep the instance handles.
pub fn animate_targets<T, S>(
    tree: &mut T,
    sched: &mut S,
    targets: &[WidgetId],
    descriptor: AnimationDescriptor,
) where
    T: WidgetTree + ?Sized,
    S: AnimationScheduler + ?Sized,
{
    if targets.is_empty() || !duration_is_positive(&descriptor) {
        return;
    }
    let mut session: Session<S::Handle> = Session {
        targets: targets.to_vec(),
        descriptor,
        playing: false,
        handles: Vec::new(),
    };
    session.start(tree, sched);
}

impl<H> Session<H> {
    /// Create a session over `targets`.
    ///
    /// Returns `None` when `targets` is empty or the duration does not
    /// parse to a positive integer. Starts playback immediately unless
    /// the descriptor's `auto_play` is false, in which case the caller
    /// starts the session later with [`start`](Self::start).
    pub fn create<T, S>(
        tree: &mut T,
        sched: &mut S,
        targets: &[WidgetId],
        descriptor: AnimationDescriptor,
    ) -> Option<Self>
    where
        T: WidgetTree + ?Sized,
        S: AnimationScheduler<Handle = H> + ?Sized,
    {
        if targets.is_empty() || !duration_is_positive(&descriptor) {
            return None;
        }
        let auto_play = descriptor.auto_play;
        let mut session = Self {
            targets: targets.to_vec(),
            descriptor,
            playing: false,
            handles: Vec::new(),
        };
        if auto_play {
            session.start(tree, sched);
        }
        Some(session)
    }

    /// Single-target variant of [`create`](Self::create).
    pub fn create_single<T, S>(
        tree: &mut T,
        sched: &mut S,
        target: WidgetId,
        descriptor: AnimationDescriptor,
    ) -> Option<Self>
    where
        T: WidgetTree + ?Sized,
        S: AnimationScheduler<Handle = H> + ?Sized,
    {
        Self::create(tree, sched, &[target], descriptor)
    }

    /// Start the session: for every target in order, refresh its layout
    /// and register one scheduler instance per animated property.
    ///
    /// No-op when the session is already playing or has no targets.
    /// Returns `&mut self` for chaining.
    pub fn start<T, S>(&mut self, tree: &mut T, sched: &mut S) -> &mut Self
    where
        T: WidgetTree + ?Sized,
        S: AnimationScheduler<Handle = H> + ?Sized,
    {
        if self.playing || self.targets.is_empty() {
            return self;
        }

        let descriptor = self.descriptor.clone();
        let targets = self.targets.clone();
        for id in targets {
            tree.refresh_layout(id);
            self.apply_to_widget(tree, sched, &descriptor, id);
        }

        self.playing = true;
        self
    }

    /// Whether `start` has been accepted for this session. Does not
    /// track the scheduler-side state of the started instances.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn targets(&self) -> &[WidgetId] {
        &self.targets
    }

    pub fn descriptor(&self) -> &AnimationDescriptor {
        &self.descriptor
    }

    /// Handles of every instance registered so far, in registration
    /// order (per widget, in field-application order).
    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    /// Apply every present descriptor field to freshly configured
    /// instances for one widget.
    ///
    /// Field order: duration, delay, completion callback, repeat, user
    /// data, easing, x, y, width, height, opacity, rotate, pivot_x,
    /// pivot_y, scale. A duration/delay/repeat parse failure abandons
    /// the remaining fields for this widget only; instances already
    /// registered stay registered.
    fn apply_to_widget<T, S>(
        &mut self,
        tree: &mut T,
        sched: &mut S,
        descriptor: &AnimationDescriptor,
        id: WidgetId,
    ) where
        T: WidgetTree + ?Sized,
        S: AnimationScheduler<Handle = H> + ?Sized,
    {
        let mut base = InstanceConfig::new(id);

        if !descriptor.duration.is_empty() {
            match parse_i32(&descriptor.duration) {
                Ok(value) => base.duration = value,
                Err(error) => {
                    warn!(?error, value = %descriptor.duration, "invalid duration value");
                    return;
                }
            }
        }

        if let Some(text) = non_empty(&descriptor.delay) {
            match parse_i32(text) {
                Ok(value) => base.delay = value,
                Err(error) => {
                    warn!(?error, value = %text, "invalid delay value");
                    return;
                }
            }
        }

        if let Some(callback) = &descriptor.on_complete {
            base.on_complete = Some(callback.clone());
        }

        if let Some(text) = non_empty(&descriptor.repeat) {
            match parse_i32(text) {
                Ok(value) => {
                    base.repeat = if value < 0 {
                        Repeat::Infinite
                    } else {
                        Repeat::Count(value as u32)
                    };
                }
                Err(error) => {
                    warn!(?error, value = %text, "invalid repeat value");
                    return;
                }
            }
        }

        if let Some(data) = &descriptor.user_data {
            base.user_data = Some(data.clone());
        }

        if let Some(easing) = descriptor.easing {
            base.curve = Some(easing.curve());
        }

        if let Some(text) = non_empty(&descriptor.x) {
            let from = tree.x(id);
            if has_percent(text) {
                let percent = parse_i32_lossy(&strip_percent(text));
                let resolved =
                    resolve_position(tree.parent_content_width(id), tree.width(id), percent);
                self.add_resolved(sched, descriptor, &base, Track::X, from, resolved);
            } else {
                self.add_property(sched, descriptor, &base, Track::X, from, text);
            }
        }

        if let Some(text) = non_empty(&descriptor.y) {
            let from = tree.y(id);
            if has_percent(text) {
                let percent = parse_i32_lossy(&strip_percent(text));
                let resolved =
                    resolve_position(tree.parent_content_height(id), tree.height(id), percent);
                self.add_resolved(sched, descriptor, &base, Track::Y, from, resolved);
            } else {
                self.add_property(sched, descriptor, &base, Track::Y, from, text);
            }
        }

        if let Some(text) = non_empty(&descriptor.width) {
            let from = tree.width(id);
            if has_percent(text) {
                let percent = parse_i32_lossy(&strip_percent(text));
                let resolved = resolve_extent(tree.parent_content_width(id), percent);
                self.add_resolved(sched, descriptor, &base, Track::Width, from, resolved);
            } else {
                self.add_property(sched, descriptor, &base, Track::Width, from, text);
            }
        }

        if let Some(text) = non_empty(&descriptor.height) {
            let from = tree.height(id);
            if has_percent(text) {
                let percent = parse_i32_lossy(&strip_percent(text));
                let resolved = resolve_extent(tree.parent_content_height(id), percent);
                self.add_resolved(sched, descriptor, &base, Track::Height, from, resolved);
            } else {
                self.add_property(sched, descriptor, &base, Track::Height, from, text);
            }
        }

        if let Some(text) = non_empty(&descriptor.opacity) {
            let from = tree.opacity(id);
            self.add_property(sched, descriptor, &base, Track::Opacity, from, text);
        }

        if let Some(text) = non_empty(&descriptor.rotate) {
            // Start value always comes from the transform style, even for
            // image widgets whose frames are written through the angle
            // setter.
            let from = tree.rotation(id);
            self.add_property(sched, descriptor, &base, Track::Rotate, from, text);
        }

        if let Some(text) = non_empty(&descriptor.pivot_x) {
            let value = if has_percent(text) {
                let percent = parse_i32_lossy(&strip_percent(text));
                tree.refresh_layout(id);
                resolve_extent(tree.width(id), percent)
            } else {
                parse_i32_lossy(text)
            };
            match tree.kind(id) {
                WidgetKind::Image => {
                    let (_, pivot_y) = tree.pivot(id);
                    tree.set_image_pivot(id, value, pivot_y);
                }
                WidgetKind::Plain => tree.set_style_pivot_x(id, value),
            }
        }

        if let Some(text) = non_empty(&descriptor.pivot_y) {
            let value = if has_percent(text) {
                let percent = parse_i32_lossy(&strip_percent(text));
                tree.refresh_layout(id);
                resolve_extent(tree.height(id), percent)
            } else {
                parse_i32_lossy(text)
            };
            match tree.kind(id) {
                WidgetKind::Image => {
                    let (pivot_x, _) = tree.pivot(id);
                    tree.set_image_pivot(id, pivot_x, value);
                }
                WidgetKind::Plain => tree.set_style_pivot_y(id, value),
            }
        }

        if let Some(text) = non_empty(&descriptor.scale) {
            let from = tree.zoom(id);
            self.add_property(sched, descriptor, &base, Track::Scale, from, text);
        }
    }

    /// Parse the end-value text and register one property instance.
    ///
    /// On parse failure the property is skipped with a diagnostic; the
    /// rest of the widget's fields still apply. With `is_from` the
    /// resolved range plays backward, from the target value to the
    /// widget's current value.
    fn add_property<S>(
        &mut self,
        sched: &mut S,
        descriptor: &AnimationDescriptor,
        base: &InstanceConfig,
        track: Track,
        from: i32,
        end_text: &str,
    ) where
        S: AnimationScheduler<Handle = H> + ?Sized,
    {
        let to = match parse_i32(end_text) {
            Ok(value) => value,
            Err(error) => {
                warn!(?error, value = %end_text, ?track, "invalid end value");
                return;
            }
        };

        let mut instance = base.clone();
        instance.track = Some(track);
        instance.values = Some(if descriptor.is_from {
            (to, from)
        } else {
            (from, to)
        });
        self.handles.push(sched.start(instance));
    }

    /// Route a percent-resolved value back through the text pipeline so
    /// every property enters the scheduler via `add_property`.
    fn add_resolved<S>(
        &mut self,
        sched: &mut S,
        descriptor: &AnimationDescriptor,
        base: &InstanceConfig,
        track: Track,
        from: i32,
        resolved: i32,
    ) where
        S: AnimationScheduler<Handle = H> + ?Sized,
    {
        let mut buf = [0u8; MIN_FORMAT_BUF];
        let Ok(len) = format_i32(resolved, &mut buf) else {
            return;
        };
        if let Ok(text) = std::str::from_utf8(&buf[..len]) {
            self.add_property(sched, descriptor, base, track, from, text);
        }
    }
}

fn duration_is_positive(descriptor: &AnimationDescriptor) -> bool {
    matches!(parse_i32(&descriptor.duration), Ok(value) if value > 0)
}
