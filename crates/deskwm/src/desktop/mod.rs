//! Desktop controller module
//!
//! A [`Desktop`] is the per-screen owner of a [`WindowManager`](crate::WindowManager):
//! it builds the windows listed in the configuration, routes pointer and
//! keyboard input to them and applies queued [`WindowCommand`](crate::WindowCommand)s.

#[allow(clippy::module_inception)]
mod desktop;
mod input;

pub use desktop::Desktop;
