//! Collaborator contracts
//!
//! Windows and the desktop never own their collaborators. Each component
//! receives a [`Collaborators`] bundle at construction and calls through it;
//! a missing collaborator simply means the side effect is skipped.

mod audio;
mod bounds;

use std::fmt;
use std::rc::Rc;

use crate::events::{EventSink, WindowEvent};
use crate::math::Rect;

pub use audio::{AudioSink, SoundKind};
pub use bounds::BoundsProvider;

/// Shared handles to the collaborators a window talks to
///
/// Cloning is cheap (reference-counted handles). Everything runs on the UI
/// thread, so the handles are `Rc`, not `Arc`.
#[derive(Clone, Default)]
pub struct Collaborators {
    audio: Option<Rc<dyn AudioSink>>,
    events: Option<Rc<dyn EventSink>>,
    bounds: Option<Rc<dyn BoundsProvider>>,
}

impl Collaborators {
    /// No collaborators: every side effect is a no-op
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an audio feedback sink
    pub fn with_audio(mut self, audio: Rc<dyn AudioSink>) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Attach a notification sink
    pub fn with_events(mut self, events: Rc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Attach the provider of the area a maximized window fills
    pub fn with_bounds(mut self, bounds: Rc<dyn BoundsProvider>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub(crate) fn play(&self, kind: SoundKind) {
        if let Some(audio) = &self.audio {
            audio.play_sound(kind);
        }
    }

    pub(crate) fn publish(&self, event: WindowEvent) {
        if let Some(events) = &self.events {
            events.publish(&event);
        }
    }

    pub(crate) fn parent_bounds(&self) -> Option<Rect> {
        self.bounds.as_ref().map(|bounds| bounds.parent_bounds())
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators")
            .field("audio", &self.audio.is_some())
            .field("events", &self.events.is_some())
            .field("bounds", &self.bounds.is_some())
            .finish()
    }
}
