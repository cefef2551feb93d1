//! Window chrome metrics

/// Chrome metrics used for hit testing the title bar and its buttons
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default chrome metrics for desktop panels
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 32.0,
    button_size: 20.0,
    button_spacing: 6.0,
    button_margin: 8.0,
};
