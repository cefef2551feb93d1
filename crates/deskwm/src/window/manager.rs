//! Window manager for registration, z-order and focus

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::config::ManagerConfig;
use crate::error::WindowError;
use crate::math::{Size, Vec2};
use super::{Window, WindowId, WindowRegion};

/// Single source of truth for which windows exist, which are open and how
/// they stack
///
/// Z-order values come from one counter that grows by
/// [`ManagerConfig::z_order_step`] on every `open` and `bring_to_front`, so
/// a larger value always means a more recent raise and existing windows are
/// never renumbered.
///
/// # Known limitation
///
/// The counter is not guarded against `i32` overflow; at the default step a
/// session would need more than two hundred million raises to reach it.
#[derive(Debug)]
pub struct WindowManager {
    /// All registered windows by id
    windows: HashMap<WindowId, Window>,
    /// Open windows; sorted by z-order after every raise
    open_stack: Vec<WindowId>,
    /// Last z-order value handed out
    current_max_z: i32,
    /// Sequence of stacking actions, breaks z-order ties
    stack_seq: u64,
    config: ManagerConfig,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}

impl WindowManager {
    /// Create a manager with the counter seeded at `config.base_z_order`
    pub fn new(mut config: ManagerConfig) -> Self {
        if config.z_order_step <= 0 {
            warn!(step = config.z_order_step, "non-positive z-order step, using 1");
            config.z_order_step = 1;
        }

        Self {
            windows: HashMap::new(),
            open_stack: Vec::new(),
            current_max_z: config.base_z_order,
            stack_seq: 0,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Registry
    // ---------------------------------------------------------------------

    /// Register a window. The first registration of an id wins; later ones
    /// are dropped and `false` is returned.
    ///
    /// A window that arrives already open joins the open stack on top, and
    /// if it holds focus every other window is blurred.
    pub fn register(&mut self, mut window: Window) -> bool {
        if self.windows.contains_key(window.id().as_str()) {
            debug!(window = %window.id(), "window already registered, keeping the first");
            return false;
        }

        let id = window.id().clone();
        if window.is_open() {
            let (z_order, stacked_at) = self.next_stacking();
            window.set_z_order(z_order, stacked_at);
            self.open_stack.push(id.clone());
            if window.is_focused() {
                self.blur_others(&id);
            }
        }

        debug!(window = %id, open = window.is_open(), "window registered");
        self.windows.insert(id, window);
        true
    }

    /// Remove a window from the registry and the open stack
    pub fn unregister(&mut self, id: &str) -> Option<Window> {
        let window = self.windows.remove(id)?;
        self.open_stack.retain(|open| open.as_str() != id);
        debug!(window = id, "window unregistered");
        Some(window)
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Number of registered windows
    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Registered windows, in no particular order
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    fn window(&self, id: &str) -> Result<&Window, WindowError> {
        self.windows.get(id).ok_or_else(|| not_found(id))
    }

    fn window_mut(&mut self, id: &str) -> Result<&mut Window, WindowError> {
        self.windows.get_mut(id).ok_or_else(|| not_found(id))
    }

    // ---------------------------------------------------------------------
    // Open / close
    // ---------------------------------------------------------------------

    /// Open a window, or raise it if it is already open
    pub fn open(&mut self, id: &str) -> Result<(), WindowError> {
        if self.window(id)?.is_open() {
            return self.bring_to_front(id);
        }

        let (z_order, stacked_at) = self.next_stacking();
        let window = self.window_mut(id)?;
        window.set_z_order(z_order, stacked_at);
        window.open();

        let window_id = window.id().clone();
        if !self.open_stack.contains(&window_id) {
            self.open_stack.push(window_id.clone());
        }
        self.blur_others(&window_id);
        Ok(())
    }

    /// Close an open window. Non-closable windows stay open.
    pub fn close(&mut self, id: &str) -> Result<(), WindowError> {
        if self.window_mut(id)?.close() {
            self.open_stack.retain(|open| open.as_str() != id);
        }
        Ok(())
    }

    /// Close every open window in stack order; windows that refuse stay
    /// open and keep their place
    pub fn close_all(&mut self) {
        let stack = self.open_stack.clone();
        for id in &stack {
            if let Some(window) = self.windows.get_mut(id) {
                window.close();
            }
        }

        let windows = &self.windows;
        self.open_stack.retain(|id| windows.get(id).is_some_and(Window::is_open));
        debug!(remaining = self.open_stack.len(), "closed all windows");
    }

    // ---------------------------------------------------------------------
    // Stacking and focus
    // ---------------------------------------------------------------------

    /// Give an open window the next z-order, focus it and blur the rest.
    /// A minimized window is restored first. Closed windows are ignored.
    pub fn bring_to_front(&mut self, id: &str) -> Result<(), WindowError> {
        if !self.window(id)?.is_open() {
            return Ok(());
        }

        let (z_order, stacked_at) = self.next_stacking();
        let window = self.window_mut(id)?;
        window.set_z_order(z_order, stacked_at);
        if window.is_minimized() {
            window.restore();
        }
        window.focus();
        trace!(window = id, z_order, "window raised");

        let window_id = window.id().clone();
        self.blur_others(&window_id);
        self.sort_stack();
        Ok(())
    }

    /// Drop an open window to the base z-order and blur it
    ///
    /// Other windows keep their values, and the open stack is not re-sorted
    /// until the next raise. Anything raised since the counter was seeded
    /// stays above the window, but it is not pushed below windows that were
    /// given the base value earlier.
    pub fn send_to_back(&mut self, id: &str) -> Result<(), WindowError> {
        if !self.window(id)?.is_open() {
            return Ok(());
        }

        let stacked_at = self.next_stack_seq();
        let base = self.config.base_z_order;
        let window = self.window_mut(id)?;
        window.set_z_order(base, stacked_at);
        window.blur();
        trace!(window = id, z_order = base, "window sent to back");
        Ok(())
    }

    fn next_stacking(&mut self) -> (i32, u64) {
        self.current_max_z += self.config.z_order_step;
        (self.current_max_z, self.next_stack_seq())
    }

    fn next_stack_seq(&mut self) -> u64 {
        self.stack_seq += 1;
        self.stack_seq
    }

    fn blur_others(&mut self, keep: &WindowId) {
        for id in &self.open_stack {
            if id == keep {
                continue;
            }
            if let Some(window) = self.windows.get_mut(id) {
                window.blur();
            }
        }
    }

    fn sort_stack(&mut self) {
        let windows = &self.windows;
        self.open_stack.sort_by_key(|id| {
            windows
                .get(id)
                .map(|w| (w.z_order(), w.stacked_at))
                .unwrap_or_default()
        });
    }

    // ---------------------------------------------------------------------
    // Presentation
    // ---------------------------------------------------------------------

    pub fn minimize(&mut self, id: &str) -> Result<(), WindowError> {
        self.window_mut(id)?.minimize();
        Ok(())
    }

    pub fn maximize(&mut self, id: &str) -> Result<(), WindowError> {
        self.window_mut(id)?.maximize();
        Ok(())
    }

    pub fn restore(&mut self, id: &str) -> Result<(), WindowError> {
        self.window_mut(id)?.restore();
        Ok(())
    }

    pub fn toggle_maximize(&mut self, id: &str) -> Result<(), WindowError> {
        self.window_mut(id)?.toggle_maximize();
        Ok(())
    }

    pub fn resize(&mut self, id: &str, size: Size) -> Result<(), WindowError> {
        self.window_mut(id)?.resize(size);
        Ok(())
    }

    pub fn set_position(&mut self, id: &str, position: Vec2) -> Result<(), WindowError> {
        self.window_mut(id)?.set_position(position);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Pointer routing
    // ---------------------------------------------------------------------

    /// Pointer pressed on a window: the window decides whether a drag
    /// starts, then the manager raises it. Returns whether a drag started.
    pub fn pointer_down(&mut self, id: &str, pointer: Vec2, region: WindowRegion) -> Result<bool, WindowError> {
        let dragging = self.window_mut(id)?.pointer_down(pointer, region);
        self.bring_to_front(id)?;
        Ok(dragging)
    }

    /// Forward a pointer move to the window being dragged, if any
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        let dragged = self.open_stack.iter().find(|id| {
            self.windows.get(*id).is_some_and(Window::is_dragging)
        });

        match dragged.cloned() {
            Some(id) => self.windows.get_mut(&id).is_some_and(|w| w.pointer_move(pointer)),
            None => false,
        }
    }

    /// End every drag in progress
    pub fn pointer_up(&mut self) -> bool {
        let mut ended = false;
        for window in self.windows.values_mut() {
            ended |= window.pointer_up();
        }
        ended
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn is_open(&self, id: &str) -> bool {
        self.windows.get(id).is_some_and(Window::is_open)
    }

    /// Open windows in open-stack order. The snapshot is not live.
    pub fn open_windows(&self) -> Vec<&Window> {
        self.open_stack
            .iter()
            .filter_map(|id| self.windows.get(id))
            .collect()
    }

    /// Open windows sorted back to front
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows = self.open_windows();
        windows.sort_by_key(|w| (w.z_order(), w.stacked_at));
        windows
    }

    /// Frontmost open window
    pub fn topmost(&self) -> Option<&Window> {
        self.windows_by_z().pop()
    }

    /// The focused window, if any
    pub fn focused(&self) -> Option<&Window> {
        self.open_windows().into_iter().find(|w| w.is_focused())
    }

    /// Topmost window under `pos` and the region hit
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        self.windows_by_z()
            .into_iter()
            .rev()
            .find_map(|w| w.region_at(pos).map(|region| (w.id().clone(), region)))
    }
}

fn not_found(id: &str) -> WindowError {
    warn!(window = id, "window not registered");
    WindowError::NotFound(WindowId::from(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{WindowEvent, WindowEventKind};
    use crate::math::Rect;
    use crate::test_utils::{recording_services, Recorders};
    use crate::window::{WindowConfig, WindowState};
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn manager_with(configs: Vec<WindowConfig>) -> (WindowManager, Recorders) {
        let (services, recorders) = recording_services(Rect::new(0.0, 0.0, 1920.0, 1040.0));
        let mut wm = WindowManager::default();
        for config in configs {
            wm.register(Window::new(config, services.clone()));
        }
        (wm, recorders)
    }

    fn ab() -> (WindowManager, Recorders) {
        manager_with(vec![WindowConfig::new("a"), WindowConfig::new("b")])
    }

    fn z(wm: &WindowManager, id: &str) -> i32 {
        wm.get(id).unwrap().z_order()
    }

    fn order(wm: &WindowManager) -> Vec<String> {
        wm.open_windows().iter().map(|w| w.id().to_string()).collect()
    }

    fn assert_single_focus(wm: &WindowManager) {
        let focused = wm.all_windows().filter(|w| w.is_focused()).count();
        assert!(focused <= 1, "{focused} windows focused");
        for w in wm.all_windows().filter(|w| w.is_focused()) {
            assert!(w.content_visible());
        }
    }

    #[test]
    fn test_register_first_wins() {
        let (services, _) = recording_services(Rect::new(0.0, 0.0, 800.0, 600.0));
        let mut wm = WindowManager::default();

        assert!(wm.register(Window::new(
            WindowConfig { title: "First".to_string(), ..WindowConfig::new("a") },
            services.clone()
        )));
        assert!(!wm.register(Window::new(
            WindowConfig { title: "Second".to_string(), ..WindowConfig::new("a") },
            services
        )));

        assert_eq!(wm.len(), 1);
        assert_eq!(wm.get("a").unwrap().title(), "First");
    }

    #[test]
    fn test_register_already_open_window_joins_stack() {
        let (services, rec) = recording_services(Rect::new(0.0, 0.0, 1920.0, 1040.0));
        let mut wm = WindowManager::default();

        let mut early = Window::new(WindowConfig::new("early"), services.clone());
        early.open();
        assert!(wm.register(early));
        assert!(wm.register(Window::new(WindowConfig::new("b"), services)));

        assert!(wm.is_open("early"));
        assert_eq!(order(&wm), vec!["early"]);
        assert_eq!(z(&wm, "early"), 110);

        wm.open("b").unwrap();
        assert_eq!(order(&wm), vec!["early", "b"]);
        assert!(!wm.get("early").unwrap().is_focused());
        assert_eq!(wm.focused().map(|w| w.id().as_str()), Some("b"));
        assert_single_focus(&wm);
        assert_eq!(
            rec.events.events().last(),
            Some(&WindowEvent::Blurred { window_id: WindowId::from("early") })
        );
    }

    #[test]
    fn test_register_focused_window_blurs_the_rest() {
        let (services, _) = recording_services(Rect::new(0.0, 0.0, 1920.0, 1040.0));
        let mut wm = WindowManager::default();
        wm.register(Window::new(WindowConfig::new("a"), services.clone()));
        wm.open("a").unwrap();

        let mut late = Window::new(WindowConfig::new("late"), services);
        late.open();
        assert!(wm.register(late));

        assert!(!wm.get("a").unwrap().is_focused());
        assert_eq!(wm.topmost().unwrap().id().as_str(), "late");
        assert_single_focus(&wm);
    }

    #[test]
    fn test_unregister_removes_from_open_stack() {
        let (mut wm, _) = ab();
        wm.open("a").unwrap();
        wm.open("b").unwrap();

        assert!(wm.unregister("a").is_some());
        assert!(wm.unregister("a").is_none());
        assert_eq!(order(&wm), vec!["b"]);
        assert!(!wm.is_open("a"));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (mut wm, rec) = ab();

        assert_eq!(wm.open("ghost"), Err(WindowError::NotFound(WindowId::from("ghost"))));
        assert!(wm.close("ghost").is_err());
        assert!(wm.bring_to_front("ghost").is_err());
        assert!(wm.send_to_back("ghost").is_err());
        assert!(wm.minimize("ghost").is_err());
        assert!(wm.pointer_down("ghost", Vec2::ZERO, WindowRegion::TitleBar).is_err());

        assert!(wm.open_windows().is_empty());
        assert!(rec.events.events().is_empty());
    }

    #[test]
    fn test_open_assigns_increasing_z_order() {
        let (mut wm, rec) = ab();
        wm.open("a").unwrap();
        wm.open("b").unwrap();

        assert_eq!(z(&wm, "a"), 110);
        assert_eq!(z(&wm, "b"), 120);
        assert_eq!(
            rec.events.events()[0],
            WindowEvent::Opened { window_id: WindowId::from("a"), z_order: 110 }
        );
        assert!(!wm.get("a").unwrap().is_focused());
        assert!(wm.get("b").unwrap().is_focused());
        assert_single_focus(&wm);
    }

    #[test]
    fn test_open_twice_raises_without_duplicate_entry() {
        let (mut wm, _) = ab();
        wm.open("a").unwrap();
        wm.open("b").unwrap();
        wm.open("a").unwrap();

        assert_eq!(order(&wm), vec!["b", "a"]);
        assert_eq!(z(&wm, "a"), 130);
        assert!(wm.get("a").unwrap().is_focused());
        assert!(!wm.get("b").unwrap().is_focused());
    }

    #[test]
    fn test_bring_to_front_scenario() {
        let (mut wm, _) = ab();
        wm.open("a").unwrap();
        wm.open("b").unwrap();
        wm.bring_to_front("a").unwrap();

        let stack: Vec<_> = wm.open_windows().iter().map(|w| (w.id().to_string(), w.z_order())).collect();
        assert_eq!(stack, vec![("b".to_string(), 120), ("a".to_string(), 130)]);
        assert!(wm.get("a").unwrap().is_focused());
        assert!(!wm.get("b").unwrap().is_focused());
    }

    #[test]
    fn test_bring_to_front_ignores_closed() {
        let (mut wm, _) = ab();
        wm.bring_to_front("a").unwrap();
        assert_eq!(z(&wm, "a"), 0);
        wm.open("a").unwrap();
        assert_eq!(z(&wm, "a"), 110);
    }

    #[test]
    fn test_bring_to_front_restores_minimized() {
        let (mut wm, _) = ab();
        wm.open("a").unwrap();
        wm.minimize("a").unwrap();
        assert!(wm.focused().is_none());

        wm.bring_to_front("a").unwrap();
        let a = wm.get("a").unwrap();
        assert_eq!(a.state(), WindowState::Normal);
        assert!(a.is_focused());
    }

    #[test]
    fn test_z_orders_strictly_increase_across_windows() {
        let (mut wm, _) = manager_with(vec![
            WindowConfig::new("a"),
            WindowConfig::new("b"),
            WindowConfig::new("c"),
        ]);

        let mut last = i32::MIN;
        for id in ["a", "b", "c", "a", "c", "b", "b", "a"] {
            if wm.is_open(id) {
                wm.bring_to_front(id).unwrap();
            } else {
                wm.open(id).unwrap();
            }
            let value = z(&wm, id);
            assert!(value > last, "{id}: {value} <= {last}");
            last = value;
            assert_single_focus(&wm);
        }
    }

    #[test]
    fn test_close_leaves_no_focus() {
        let (mut wm, rec) = ab();
        wm.open("a").unwrap();
        wm.open("b").unwrap();
        rec.events.clear();

        wm.close("b").unwrap();
        assert!(wm.focused().is_none());
        assert_eq!(order(&wm), vec!["a"]);
        assert_eq!(rec.events.events(), vec![WindowEvent::Closed { window_id: WindowId::from("b") }]);
    }

    #[test]
    fn test_close_non_closable_keeps_stack() {
        let (mut wm, _) = manager_with(vec![WindowConfig { closable: false, ..WindowConfig::new("pinned") }]);
        wm.open("pinned").unwrap();
        wm.close("pinned").unwrap();
        assert!(wm.is_open("pinned"));
        assert_eq!(order(&wm), vec!["pinned"]);
    }

    #[test]
    fn test_close_all_skips_non_closable() {
        let (mut wm, _) = manager_with(vec![
            WindowConfig::new("a"),
            WindowConfig { closable: false, ..WindowConfig::new("b") },
            WindowConfig::new("c"),
        ]);
        wm.open("a").unwrap();
        wm.open("b").unwrap();
        wm.open("c").unwrap();

        wm.close_all();

        assert_eq!(wm.get("a").unwrap().state(), WindowState::Closed);
        assert!(wm.is_open("b"));
        assert_eq!(wm.get("c").unwrap().state(), WindowState::Closed);
        assert_eq!(order(&wm), vec!["b"]);
    }

    #[test]
    fn test_send_to_back_uses_base_then_raise_is_on_top() {
        let (mut wm, _) = manager_with(vec![
            WindowConfig::new("a"),
            WindowConfig::new("b"),
            WindowConfig::new("c"),
        ]);
        wm.open("a").unwrap();
        wm.open("b").unwrap();
        wm.open("c").unwrap();

        wm.send_to_back("c").unwrap();
        assert_eq!(z(&wm, "c"), 100);
        assert!(!wm.get("c").unwrap().is_focused());
        assert_eq!(wm.topmost().unwrap().id().as_str(), "b");
        // open stack order is untouched until the next raise
        assert_eq!(order(&wm), vec!["a", "b", "c"]);

        wm.bring_to_front("c").unwrap();
        assert!(wm.all_windows().filter(|w| w.id().as_str() != "c").all(|w| w.z_order() < z(&wm, "c")));
        assert_eq!(order(&wm), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_send_to_back_ties_broken_by_recency() {
        let (mut wm, _) = ab();
        wm.open("a").unwrap();
        wm.open("b").unwrap();
        wm.send_to_back("b").unwrap();
        wm.send_to_back("a").unwrap();

        let back_to_front: Vec<_> = wm.windows_by_z().iter().map(|w| w.id().to_string()).collect();
        assert_eq!(back_to_front, vec!["b", "a"]);
    }

    #[test]
    fn test_send_to_back_ignores_closed() {
        let (mut wm, _) = ab();
        wm.send_to_back("a").unwrap();
        assert_eq!(z(&wm, "a"), 0);
    }

    #[test]
    fn test_pointer_down_raises_and_drags() {
        let (mut wm, _) = manager_with(vec![
            WindowConfig { position: Vec2::new(100.0, 100.0), ..WindowConfig::new("a") },
            WindowConfig::new("b"),
        ]);
        wm.open("a").unwrap();
        wm.open("b").unwrap();

        assert!(wm.pointer_down("a", Vec2::new(50.0, 50.0), WindowRegion::TitleBar).unwrap());
        assert!(wm.get("a").unwrap().is_focused());
        assert_eq!(wm.topmost().unwrap().id().as_str(), "a");

        assert!(wm.pointer_move(Vec2::new(80.0, 80.0)));
        assert_eq!(wm.get("a").unwrap().position(), Vec2::new(130.0, 130.0));

        assert!(wm.pointer_up());
        assert!(!wm.pointer_move(Vec2::new(0.0, 0.0)));
        assert_eq!(wm.get("a").unwrap().position(), Vec2::new(130.0, 130.0));
    }

    #[test]
    fn test_content_press_raises_without_drag() {
        let (mut wm, _) = ab();
        wm.open("a").unwrap();
        wm.open("b").unwrap();

        assert!(!wm.pointer_down("a", Vec2::new(300.0, 300.0), WindowRegion::Content).unwrap());
        assert!(wm.get("a").unwrap().is_focused());
        assert!(!wm.pointer_move(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_region_at_prefers_topmost() {
        let (mut wm, _) = ab();
        wm.open("a").unwrap();
        wm.open("b").unwrap();

        // both sit at the origin with the same size
        assert_eq!(wm.region_at(Vec2::new(200.0, 200.0)), Some((WindowId::from("b"), WindowRegion::Content)));
        wm.bring_to_front("a").unwrap();
        assert_eq!(wm.region_at(Vec2::new(200.0, 10.0)), Some((WindowId::from("a"), WindowRegion::TitleBar)));
        assert_eq!(wm.region_at(Vec2::new(5000.0, 10.0)), None);
    }

    #[test]
    fn test_presentation_routing() {
        let (mut wm, rec) = ab();
        wm.open("a").unwrap();

        wm.maximize("a").unwrap();
        assert!(wm.get("a").unwrap().is_maximized());
        wm.toggle_maximize("a").unwrap();
        assert_eq!(wm.get("a").unwrap().state(), WindowState::Normal);
        wm.minimize("a").unwrap();
        wm.restore("a").unwrap();
        assert_eq!(wm.get("a").unwrap().state(), WindowState::Normal);

        wm.resize("a", Size::new(500.0, 350.0)).unwrap();
        wm.set_position("a", Vec2::new(12.0, 34.0)).unwrap();
        assert_eq!(wm.get("a").unwrap().rect(), Rect::new(12.0, 34.0, 500.0, 350.0));

        let kinds: Vec<_> = rec.events.events().iter().map(WindowEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                WindowEventKind::Opened,
                WindowEventKind::Maximized,
                WindowEventKind::Restored,
                WindowEventKind::Blurred,
                WindowEventKind::Minimized,
                WindowEventKind::Restored,
            ]
        );
    }

    #[test]
    fn test_non_positive_step_is_corrected() {
        let wm = WindowManager::new(ManagerConfig { base_z_order: 0, z_order_step: 0 });
        assert_eq!(wm.config().z_order_step, 1);
    }
}
