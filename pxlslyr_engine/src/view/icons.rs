//! module Icons
//!
//! Unicode icons used for the various message types.

pub(crate) const ICON_INFO: &str = "\u{2139}"; // ℹ
pub(crate) const ICON_SUCCESS: &str = "\u{2611}"; // ✔
pub(crate) const ICON_FAILURE: &str = "\u{2623}"; // biohazard sign
pub(crate) const ICON_DEATH: &str = "☠";
pub(crate) const ICON_CELEBRATE: &str = "🎉"; // U+1F389
pub(crate) const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
pub(crate) const ICON_ENGINE: &str = "⚙";
pub(crate) const ICON_HEART_FULL: &str = "♥";
pub(crate) const ICON_HEART_EMPTY: &str = "♡";
pub(crate) const ICON_CHECK: &str = "✓";
pub(crate) const ICON_CROSS: &str = "✗";
