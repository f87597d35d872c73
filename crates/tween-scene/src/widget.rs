//! Widget capability surface consumed by the session controller.
//!
//! The animation layer never owns widgets; it addresses them through
//! opaque [`WidgetId`] handles and a [`WidgetTree`] trait covering
//! exactly the toolkit operations it needs: geometry and style queries,
//! the parent content box, a layout refresh, and the property setters
//! the per-frame adapters write through.

use serde::{Deserialize, Serialize};

/// Opaque handle to a widget owned by the caller's toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

/// Coarse widget kind.
///
/// Image widgets store rotation/zoom/pivot as object-level state with
/// dedicated setters; everything else goes through transform style
/// properties. This replaces class-pointer identity checks with a
/// capability query, keeping the animation layer out of the toolkit's
/// class representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Image,
    Plain,
}

/// The widget-toolkit operations the session controller consumes.
///
/// Queries read the *current, settled* state: implementations must make
/// sure [`refresh_layout`](Self::refresh_layout) actually settles layout
/// before geometry is read back, since percent resolution against a
/// stale parent content box yields stale coordinates.
pub trait WidgetTree {
    /// Widget kind, used to pick between image and style setters.
    fn kind(&self, id: WidgetId) -> WidgetKind;

    /// Settle layout for the widget so geometry queries are current.
    fn refresh_layout(&mut self, id: WidgetId);

    fn x(&self, id: WidgetId) -> i32;
    fn y(&self, id: WidgetId) -> i32;
    fn width(&self, id: WidgetId) -> i32;
    fn height(&self, id: WidgetId) -> i32;

    /// Current style opacity.
    fn opacity(&self, id: WidgetId) -> i32;
    /// Current transform rotation style value.
    fn rotation(&self, id: WidgetId) -> i32;
    /// Current transform zoom style value.
    fn zoom(&self, id: WidgetId) -> i32;
    /// Current image pivot point.
    fn pivot(&self, id: WidgetId) -> (i32, i32);

    /// Content-box width of the widget's immediate parent.
    fn parent_content_width(&self, id: WidgetId) -> i32;
    /// Content-box height of the widget's immediate parent.
    fn parent_content_height(&self, id: WidgetId) -> i32;

    fn set_x(&mut self, id: WidgetId, value: i32);
    fn set_y(&mut self, id: WidgetId, value: i32);
    fn set_width(&mut self, id: WidgetId, value: i32);
    fn set_height(&mut self, id: WidgetId, value: i32);

    fn set_style_opacity(&mut self, id: WidgetId, value: i32);
    fn set_style_rotation(&mut self, id: WidgetId, value: i32);
    fn set_style_zoom(&mut self, id: WidgetId, value: i32);
    fn set_style_pivot_x(&mut self, id: WidgetId, value: i32);
    fn set_style_pivot_y(&mut self, id: WidgetId, value: i32);

    /// Dedicated image-widget rotation setter.
    fn set_image_angle(&mut self, id: WidgetId, value: i32);
    /// Dedicated image-widget zoom setter.
    fn set_image_zoom(&mut self, id: WidgetId, value: i32);
    /// Dedicated image-widget pivot setter.
    fn set_image_pivot(&mut self, id: WidgetId, x: i32, y: i32);
}
