use std::time::{Duration, Instant};

use crate::vm::time_fmt::format_clock;

/// Idle time after which the overlay hides while playing.
pub const CONTROLS_IDLE: Duration = Duration::from_secs(3);

/// Overlay state of the built-in player.
///
/// Every method that counts as interaction takes the current instant so the
/// auto-hide deadline can be driven by a timer in the view and by plain
/// values in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerControls {
    playing: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    muted: bool,
    fullscreen: bool,
    visible: bool,
    hide_at: Option<Instant>,
}

impl Default for PlayerControls {
    fn default() -> Self {
        Self {
            playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            fullscreen: false,
            visible: true,
            hide_at: None,
        }
    }
}

impl PlayerControls {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// `current / total`, both as `m:ss`.
    #[must_use]
    pub fn time_label(&self) -> String {
        format!(
            "{} / {}",
            format_clock(self.current_time),
            format_clock(self.duration)
        )
    }

    /// Playback position in percent, for the seek bar.
    #[must_use]
    pub fn position_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn toggle_play(&mut self, now: Instant) {
        self.playing = !self.playing;
        self.interact(now);
    }

    /// The media element paused or played on its own (ended, buffering).
    pub fn set_playing(&mut self, playing: bool, now: Instant) {
        self.playing = playing;
        self.interact(now);
    }

    pub fn seek(&mut self, seconds: f64, now: Instant) {
        let upper = if self.duration > 0.0 { self.duration } else { f64::MAX };
        self.current_time = if seconds.is_finite() {
            seconds.clamp(0.0, upper)
        } else {
            0.0
        };
        self.interact(now);
    }

    /// Volume is clamped to `0..=1`; zero mutes and anything louder unmutes.
    pub fn set_volume(&mut self, volume: f64, now: Instant) {
        self.volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.muted = self.volume == 0.0;
        self.interact(now);
    }

    pub fn toggle_mute(&mut self, now: Instant) {
        self.muted = !self.muted;
        self.interact(now);
    }

    /// Fullscreen changes can come from the window as well as the button, so
    /// this sets rather than toggles.
    pub fn set_fullscreen(&mut self, fullscreen: bool, now: Instant) {
        self.fullscreen = fullscreen;
        self.interact(now);
    }

    pub fn on_time_update(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds >= 0.0 {
            self.current_time = seconds;
        }
    }

    pub fn on_duration(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds >= 0.0 {
            self.duration = seconds;
        }
    }

    pub fn pointer_moved(&mut self, now: Instant) {
        self.interact(now);
    }

    pub fn pointer_left(&mut self) {
        if self.playing {
            self.visible = false;
            self.hide_at = None;
        }
    }

    /// Hide the overlay once the idle deadline passed. Returns whether the
    /// visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if self.playing && now >= deadline => {
                self.hide_at = None;
                let changed = self.visible;
                self.visible = false;
                changed
            }
            _ => false,
        }
    }

    fn interact(&mut self, now: Instant) {
        self.visible = true;
        self.hide_at = self.playing.then(|| now + CONTROLS_IDLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_hide_after_idle_while_playing() {
        let start = Instant::now();
        let mut controls = PlayerControls::default();
        controls.toggle_play(start);
        assert!(controls.is_playing());

        assert!(!controls.tick(start + Duration::from_secs(2)));
        assert!(controls.controls_visible());

        assert!(controls.tick(start + CONTROLS_IDLE));
        assert!(!controls.controls_visible());

        controls.pointer_moved(start + Duration::from_secs(4));
        assert!(controls.controls_visible());
        assert!(!controls.tick(start + Duration::from_secs(6)));
        assert!(controls.tick(start + Duration::from_secs(7)));
    }

    #[test]
    fn paused_player_keeps_controls() {
        let start = Instant::now();
        let mut controls = PlayerControls::default();
        controls.pointer_moved(start);
        assert!(!controls.tick(start + Duration::from_secs(10)));
        controls.pointer_left();
        assert!(controls.controls_visible());
    }

    #[test]
    fn pointer_leave_hides_while_playing() {
        let start = Instant::now();
        let mut controls = PlayerControls::default();
        controls.toggle_play(start);
        controls.pointer_left();
        assert!(!controls.controls_visible());
    }

    #[test]
    fn zero_volume_mutes() {
        let now = Instant::now();
        let mut controls = PlayerControls::default();
        controls.set_volume(0.0, now);
        assert!(controls.is_muted());
        controls.set_volume(0.4, now);
        assert!(!controls.is_muted());
        controls.set_volume(3.0, now);
        assert_eq!(controls.volume(), 1.0);
        controls.toggle_mute(now);
        assert!(controls.is_muted());
    }

    #[test]
    fn seek_stays_inside_media() {
        let now = Instant::now();
        let mut controls = PlayerControls::default();
        controls.on_duration(125.0);
        controls.seek(500.0, now);
        assert_eq!(controls.current_time(), 125.0);
        controls.seek(-3.0, now);
        assert_eq!(controls.current_time(), 0.0);
        controls.on_time_update(65.4);
        assert_eq!(controls.time_label(), "1:05 / 2:05");
    }

    #[test]
    fn fullscreen_is_set_not_toggled() {
        let now = Instant::now();
        let mut controls = PlayerControls::default();
        controls.set_fullscreen(true, now);
        controls.set_fullscreen(true, now);
        assert!(controls.is_fullscreen());
        controls.set_fullscreen(false, now);
        assert!(!controls.is_fullscreen());
    }
}
