//! Toolkit-agnostic core for the tween transition helper.
//!
//! This crate holds the pure data and parsing layer:
//! - **Numeric codec**: overflow-detecting decimal text ↔ `i32` conversion
//! - **Percent resolver**: `%`-annotated values resolved against reference
//!   dimensions
//! - **Easing table**: named easing curves mapped onto the scheduler's
//!   built-in curve selectors
//! - **Descriptor**: the declarative value object describing one transition
//!
//! Nothing here touches a widget tree or an animation scheduler; those
//! seams live in `tween-scene`.

pub mod codec;
pub mod descriptor;
pub mod easing;
pub mod percent;

pub use codec::{FormatError, MIN_FORMAT_BUF, ParseIntError, format_i32, parse_i32, parse_i32_lossy};
pub use descriptor::{AnimationDescriptor, CompleteCallback, UserData, non_empty};
pub use easing::{CurveKind, Easing};
pub use percent::{has_percent, resolve_extent, resolve_position, strip_percent};
