//! Window region for hit testing

use serde::Serialize;

/// Part of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    /// Title bar (drag handle)
    TitleBar,
    /// Content area
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize / restore button
    MaximizeButton,
}

impl WindowRegion {
    /// Check if this is one of the title-bar buttons
    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton
        )
    }
}
