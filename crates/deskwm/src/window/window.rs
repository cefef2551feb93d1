//! Window struct and state machine

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::events::WindowEvent;
use crate::input::DragState;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use crate::services::{Collaborators, SoundKind};
use super::{WindowConfig, WindowConstraints, WindowId, WindowRegion};

/// Window state
///
/// `Closed` is the initial state. The three open states are mutually
/// exclusive, so a window can never be minimized and maximized at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Closed,
    Normal,
    Minimized,
    Maximized,
}

impl WindowState {
    #[inline]
    pub fn is_open(self) -> bool {
        self != WindowState::Closed
    }
}

/// A user-manipulable panel
///
/// Every transition method returns `true` when it changed the window and
/// `false` when its guard rejected the call. Rejections are silent: UI
/// actions must be safely repeatable.
#[derive(Debug)]
pub struct Window {
    id: WindowId,
    title: String,
    state: WindowState,
    focused: bool,
    z_order: i32,
    /// Current geometry in parent space
    position: Vec2,
    size: Size,
    /// Geometry to put back when leaving the maximized state
    saved_rect: Option<(Vec2, Size)>,
    constraints: WindowConstraints,
    drag: Option<DragState>,
    /// Manager sequence number of the last stacking action (z-order ties)
    pub(crate) stacked_at: u64,
    services: Collaborators,
}

impl Window {
    /// Build a closed window from its configuration
    pub fn new(config: WindowConfig, services: Collaborators) -> Self {
        let constraints = config.constraints();
        Self {
            size: config.size.clamp(constraints.min_size, constraints.max_size),
            id: config.id,
            title: config.title,
            state: WindowState::Closed,
            focused: false,
            z_order: 0,
            position: config.position,
            saved_rect: None,
            constraints,
            drag: None,
            stacked_at: 0,
            services,
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[inline]
    pub fn id(&self) -> &WindowId {
        &self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn state(&self) -> WindowState {
        self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Stacking value (higher is in front)
    #[inline]
    pub fn z_order(&self) -> i32 {
        self.z_order
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn constraints(&self) -> &WindowConstraints {
        &self.constraints
    }

    /// Pre-maximize geometry; `Some` only while maximized
    pub fn saved_rect(&self) -> Option<Rect> {
        self.saved_rect.map(|(pos, size)| Rect::from_pos_size(pos, size))
    }

    /// Whether the content panel is shown (open and not minimized)
    #[inline]
    pub fn content_visible(&self) -> bool {
        matches!(self.state, WindowState::Normal | WindowState::Maximized)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    // ---------------------------------------------------------------------
    // Lifecycle transitions
    // ---------------------------------------------------------------------

    /// Closed → Normal, focused
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }

        self.state = WindowState::Normal;
        self.focused = true;
        self.drag = None;
        debug!(window = %self.id, z_order = self.z_order, "window opened");

        self.services.play(SoundKind::Open);
        self.services.publish(WindowEvent::Opened {
            window_id: self.id.clone(),
            z_order: self.z_order,
        });
        true
    }

    /// Open → Closed, if closable
    ///
    /// A maximized window gets its saved geometry back so it reopens in
    /// its normal layout.
    pub fn close(&mut self) -> bool {
        if !self.is_open() || !self.constraints.closable {
            return false;
        }

        self.drag = None;
        self.put_back_saved_rect();
        self.state = WindowState::Closed;
        self.focused = false;
        debug!(window = %self.id, "window closed");

        self.services.play(SoundKind::Close);
        self.services.publish(WindowEvent::Closed { window_id: self.id.clone() });
        true
    }

    /// Collapse to the title bar; blurs the window
    pub fn minimize(&mut self) -> bool {
        if !self.is_open() || self.is_minimized() || !self.constraints.minimizable {
            return false;
        }

        self.blur();
        self.drag = None;
        self.put_back_saved_rect();
        self.state = WindowState::Minimized;
        debug!(window = %self.id, "window minimized");

        self.services.play(SoundKind::Click);
        self.services.publish(WindowEvent::Minimized { window_id: self.id.clone() });
        true
    }

    /// Expand to the parent bounds, remembering the current geometry
    ///
    /// Without a bounds provider the geometry is left as is.
    pub fn maximize(&mut self) -> bool {
        if !self.is_open() || self.is_maximized() || !self.constraints.maximizable {
            return false;
        }

        self.drag = None;
        self.saved_rect = Some((self.position, self.size));
        if let Some(bounds) = self.services.parent_bounds() {
            self.position = bounds.position();
            self.size = bounds.size();
        }
        self.state = WindowState::Maximized;
        debug!(window = %self.id, "window maximized");

        self.services.play(SoundKind::Click);
        self.services.publish(WindowEvent::Maximized { window_id: self.id.clone() });
        true
    }

    /// Minimized or Maximized → Normal
    pub fn restore(&mut self) -> bool {
        match self.state {
            WindowState::Minimized => {}
            WindowState::Maximized => self.put_back_saved_rect(),
            WindowState::Closed | WindowState::Normal => return false,
        }

        self.state = WindowState::Normal;
        debug!(window = %self.id, "window restored");

        self.services.play(SoundKind::Click);
        self.services.publish(WindowEvent::Restored { window_id: self.id.clone() });
        true
    }

    /// Maximize button behavior
    pub fn toggle_maximize(&mut self) -> bool {
        if self.is_maximized() {
            self.restore()
        } else {
            self.maximize()
        }
    }

    /// Gain focus; minimized windows cannot hold focus
    pub fn focus(&mut self) -> bool {
        if !self.content_visible() || self.focused {
            return false;
        }

        self.focused = true;
        trace!(window = %self.id, "window focused");
        self.services.publish(WindowEvent::Focused { window_id: self.id.clone() });
        true
    }

    /// Lose focus; cancels a drag in progress
    pub fn blur(&mut self) -> bool {
        if !self.focused {
            return false;
        }

        self.focused = false;
        self.drag = None;
        trace!(window = %self.id, "window blurred");
        self.services.publish(WindowEvent::Blurred { window_id: self.id.clone() });
        true
    }

    pub(crate) fn set_z_order(&mut self, z_order: i32, stacked_at: u64) {
        self.z_order = z_order;
        self.stacked_at = stacked_at;
    }

    fn put_back_saved_rect(&mut self) {
        if let Some((pos, size)) = self.saved_rect.take() {
            self.position = pos;
            self.size = size;
        }
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    /// Resize within the size constraints
    pub fn resize(&mut self, size: Size) -> bool {
        if !self.is_open() || self.is_maximized() || !self.constraints.resizable {
            return false;
        }

        self.size = size.clamp(self.constraints.min_size, self.constraints.max_size);
        true
    }

    /// Move without a drag gesture (e.g. a collaborator clamping to the
    /// screen after a drag). Maximized windows stay put.
    pub fn set_position(&mut self, position: Vec2) -> bool {
        if self.is_maximized() {
            return false;
        }

        self.position = position;
        true
    }

    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Area that receives pointer input: the title bar alone when minimized
    pub fn hit_rect(&self) -> Rect {
        if self.is_minimized() {
            self.title_bar_rect()
        } else {
            self.rect()
        }
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        self.button_rect(0)
    }

    /// Get the maximize button rectangle
    pub fn maximize_button_rect(&self) -> Rect {
        self.button_rect(1)
    }

    /// Get the minimize button rectangle
    pub fn minimize_button_rect(&self) -> Rect {
        self.button_rect(2)
    }

    /// Buttons are laid out right to left; `slot` 0 is rightmost
    fn button_rect(&self, slot: u8) -> Rect {
        let slot = f32::from(slot);
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * (slot + 1.0)
            - FRAME_STYLE.button_spacing * slot;
        let y = self.position.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Region under `pos`, or `None` if the window is closed or missed.
    /// Buttons disabled by the constraints are not hit.
    pub fn region_at(&self, pos: Vec2) -> Option<WindowRegion> {
        if !self.is_open() || !self.hit_rect().contains(pos) {
            return None;
        }

        if self.constraints.closable && self.close_button_rect().contains(pos) {
            return Some(WindowRegion::CloseButton);
        }
        if self.constraints.maximizable && self.maximize_button_rect().contains(pos) {
            return Some(WindowRegion::MaximizeButton);
        }
        if self.constraints.minimizable && self.minimize_button_rect().contains(pos) {
            return Some(WindowRegion::MinimizeButton);
        }
        if self.title_bar_rect().contains(pos) {
            return Some(WindowRegion::TitleBar);
        }
        Some(WindowRegion::Content)
    }

    // ---------------------------------------------------------------------
    // Drag gesture
    // ---------------------------------------------------------------------

    /// Pointer pressed on `region` at `pointer` (parent space). Starts a
    /// drag when the press lands on the title bar of a non-maximized window.
    ///
    /// Raising the window is the manager's job, see
    /// [`WindowManager::pointer_down`](super::WindowManager::pointer_down).
    pub fn pointer_down(&mut self, pointer: Vec2, region: WindowRegion) -> bool {
        if !self.is_open() || self.is_maximized() || region != WindowRegion::TitleBar {
            return false;
        }

        self.drag = Some(DragState::begin(self.position, pointer));
        trace!(window = %self.id, ?pointer, "drag started");
        true
    }

    /// Follow the pointer while dragging. No clamping is applied.
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        match self.drag {
            Some(drag) if !self.is_maximized() => {
                self.position = drag.position_for(pointer);
                trace!(window = %self.id, position = ?self.position, "dragging");
                true
            }
            _ => false,
        }
    }

    /// End the drag, wherever the pointer is
    pub fn pointer_up(&mut self) -> bool {
        self.drag.take().is_some()
    }
}
