//! Audio feedback contract

use serde::{Deserialize, Serialize};

/// UI sound cues the window system asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundKind {
    Click,
    Hover,
    Open,
    Close,
    Error,
    Success,
    Notification,
    Typing,
}

/// Fire-and-forget sound playback
///
/// Implementations must return promptly; the window system never waits on
/// playback and ignores whether the cue was actually heard.
pub trait AudioSink {
    fn play_sound(&self, kind: SoundKind);
}
