//! Compile-time configuration for the landing page.

/// Embed URL for the hero's 3D scene viewer.
pub const SCENE_URL: &str = "https://my.spline.design/IKzHtP5ThSO83edK/";

/// Upper bound on the magnitude of any parallax offset, in pixels.
///
/// `None` keeps the scroll-to-offset mapping linear over the whole scroll
/// range, which matches how far the page can actually scroll today. Set a
/// limit here if layers ever need to stop short on very long pages.
pub const PARALLAX_MAX_OFFSET: Option<i32> = None;
