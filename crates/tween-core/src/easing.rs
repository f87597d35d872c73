//! Named easing curves and their mapping onto scheduler curve selectors.
//!
//! The descriptor names curves in the usual animation vocabulary
//! (sine/quad/cubic/quart, back, elastic, bounce, each with in/out/
//! in-out variants). The underlying scheduler only ships a handful of
//! built-in interpolation curves, so the mapping is many-to-few: every
//! named curve resolves to the nearest built-in. The collapse is kept
//! exactly as shipped for visual compatibility; substituting custom
//! curve math would change how existing transitions look.

use serde::{Deserialize, Serialize};

/// Named easing curve selectable on a descriptor.
///
/// "Unset" is expressed as `Option<Easing>` on the descriptor; `None`
/// leaves the scheduler's default curve untouched rather than forcing
/// linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
}

/// The scheduler's built-in interpolation curve selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Overshoot,
    Bounce,
    Step,
}

impl Easing {
    /// Map the named curve to the scheduler's built-in selector.
    ///
    /// Total over the enum; several named curves share a selector (all
    /// elastic and bounce variants land on `Bounce`, the back variants
    /// on `Overshoot`).
    pub fn curve(self) -> CurveKind {
        match self {
            Easing::Linear => CurveKind::Linear,
            Easing::InSine => CurveKind::EaseIn,
            Easing::OutSine => CurveKind::EaseOut,
            Easing::InOutSine => CurveKind::EaseInOut,
            Easing::InQuad => CurveKind::Overshoot,
            Easing::OutQuad => CurveKind::Bounce,
            Easing::InOutQuad => CurveKind::Step,
            Easing::InCubic => CurveKind::Bounce,
            Easing::OutCubic => CurveKind::Overshoot,
            Easing::InOutCubic => CurveKind::EaseInOut,
            Easing::InQuart => CurveKind::EaseIn,
            Easing::OutQuart => CurveKind::EaseOut,
            Easing::InOutQuart => CurveKind::EaseInOut,
            Easing::InBack => CurveKind::Overshoot,
            Easing::OutBack => CurveKind::Overshoot,
            Easing::InOutBack => CurveKind::Overshoot,
            Easing::InElastic => CurveKind::Bounce,
            Easing::OutElastic => CurveKind::Bounce,
            Easing::InOutElastic => CurveKind::Bounce,
            Easing::InBounce => CurveKind::Bounce,
            Easing::OutBounce => CurveKind::Bounce,
            Easing::InOutBounce => CurveKind::Bounce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_maps_to_linear() {
        assert_eq!(Easing::Linear.curve(), CurveKind::Linear);
    }

    #[test]
    fn test_sine_family_maps_to_ease_curves() {
        assert_eq!(Easing::InSine.curve(), CurveKind::EaseIn);
        assert_eq!(Easing::OutSine.curve(), CurveKind::EaseOut);
        assert_eq!(Easing::InOutSine.curve(), CurveKind::EaseInOut);
    }

    #[test]
    fn test_lossy_collapse_preserved() {
        // All elastic/bounce variants collapse onto the bounce selector.
        for easing in [
            Easing::InElastic,
            Easing::OutElastic,
            Easing::InOutElastic,
            Easing::InBounce,
            Easing::OutBounce,
            Easing::InOutBounce,
        ] {
            assert_eq!(easing.curve(), CurveKind::Bounce);
        }
        // The back family collapses onto overshoot.
        for easing in [Easing::InBack, Easing::OutBack, Easing::InOutBack] {
            assert_eq!(easing.curve(), CurveKind::Overshoot);
        }
        // Quad is the odd one out: in/out/in-out map to three
        // unrelated selectors.
        assert_eq!(Easing::InQuad.curve(), CurveKind::Overshoot);
        assert_eq!(Easing::OutQuad.curve(), CurveKind::Bounce);
        assert_eq!(Easing::InOutQuad.curve(), CurveKind::Step);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Easing::InOutQuart).unwrap();
        assert_eq!(json, "\"in_out_quart\"");
        let parsed: Easing = serde_json::from_str("\"out_bounce\"").unwrap();
        assert_eq!(parsed, Easing::OutBounce);
    }
}
