//! Pointer and keyboard routing

use tracing::{debug, trace};

use crate::error::WindowError;
use crate::input::InputResult;
use crate::math::Vec2;
use crate::window::{Window, WindowId, WindowRegion};
use super::Desktop;

impl Desktop {
    /// Handle pointer down at `pointer` (parent space)
    ///
    /// The window under the pointer is raised first. Chrome buttons then
    /// act, a title-bar press starts a drag, and a content press is
    /// forwarded to the panel in window-local coordinates. Buttons on a
    /// minimized window act without raising it, so its own minimize button
    /// stays a no-op.
    pub fn handle_pointer_down(&mut self, pointer: Vec2) -> InputResult {
        let (window_id, region) = match self.manager.region_at(pointer) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        trace!(window = %window_id, ?region, "pointer down");
        self.handle_window_press(&window_id, pointer, region)
            .unwrap_or_else(|err| {
                debug!(%err, "pointer down on vanished window");
                InputResult::Unhandled
            })
    }

    fn handle_window_press(
        &mut self,
        window_id: &WindowId,
        pointer: Vec2,
        region: WindowRegion,
    ) -> Result<InputResult, WindowError> {
        let id = window_id.as_str();
        let minimized = self.manager.get(id).is_some_and(Window::is_minimized);
        if !(region.is_button() && minimized) {
            self.manager.pointer_down(id, pointer, region)?;
        }

        match region {
            WindowRegion::CloseButton => self.manager.close(id)?,
            WindowRegion::MinimizeButton => self.manager.minimize(id)?,
            WindowRegion::MaximizeButton => self.manager.toggle_maximize(id)?,
            WindowRegion::TitleBar => {}
            WindowRegion::Content => {
                let position = match self.manager.get(id) {
                    Some(window) => window.position(),
                    None => return Ok(InputResult::Unhandled),
                };
                let local = pointer - position;
                return Ok(InputResult::Forward {
                    window_id: window_id.clone(),
                    local_x: local.x,
                    local_y: local.y,
                });
            }
        }
        Ok(InputResult::Handled)
    }

    /// Handle pointer move; only a drag in progress consumes it
    pub fn handle_pointer_move(&mut self, pointer: Vec2) -> InputResult {
        if self.manager.pointer_move(pointer) {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle pointer up; ends any drag in progress
    pub fn handle_pointer_up(&mut self) -> InputResult {
        if self.manager.pointer_up() {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Escape closes the open window with the highest z-order
    ///
    /// Returns `true` if a window was closed. A non-closable topmost window
    /// swallows the key.
    pub fn handle_escape(&mut self) -> bool {
        let top = match self.manager.topmost() {
            Some(window) => window.id().clone(),
            None => return false,
        };

        if self.manager.close(top.as_str()).is_err() {
            return false;
        }
        let closed = !self.manager.is_open(top.as_str());
        debug!(window = %top, closed, "escape");
        closed
    }
}
