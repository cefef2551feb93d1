//! Recording collaborators for unit tests

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{EventSink, WindowEvent};
use crate::math::Rect;
use crate::services::{AudioSink, Collaborators, SoundKind};

#[derive(Default)]
pub(crate) struct RecordingAudio {
    sounds: RefCell<Vec<SoundKind>>,
}

impl RecordingAudio {
    pub(crate) fn sounds(&self) -> Vec<SoundKind> {
        self.sounds.borrow().clone()
    }
}

impl AudioSink for RecordingAudio {
    fn play_sound(&self, kind: SoundKind) {
        self.sounds.borrow_mut().push(kind);
    }
}

#[derive(Default)]
pub(crate) struct RecordingEvents {
    events: RefCell<Vec<WindowEvent>>,
}

impl RecordingEvents {
    pub(crate) fn events(&self) -> Vec<WindowEvent> {
        self.events.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventSink for RecordingEvents {
    fn publish(&self, event: &WindowEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

pub(crate) struct Recorders {
    pub(crate) audio: Rc<RecordingAudio>,
    pub(crate) events: Rc<RecordingEvents>,
}

/// Collaborators that record every call, with fixed parent bounds
pub(crate) fn recording_services(bounds: Rect) -> (Collaborators, Recorders) {
    let audio = Rc::new(RecordingAudio::default());
    let events = Rc::new(RecordingEvents::default());
    let services = Collaborators::new()
        .with_audio(audio.clone())
        .with_events(events.clone())
        .with_bounds(Rc::new(bounds));
    (services, Recorders { audio, events })
}
