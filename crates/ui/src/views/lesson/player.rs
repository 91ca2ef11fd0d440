use std::time::{Duration, Instant};

use dioxus::document::eval;
use dioxus::prelude::*;
use lms_core::media::MediaSource;

use crate::vm::PlayerControls;

use super::scripts::{PLAYER_ID, PlayerCommand, VIDEO_ID, player_command_script, player_events_script};

const TICK: Duration = Duration::from_millis(250);

#[component]
pub fn VideoPlayer(media: MediaSource) -> Element {
    match media {
        MediaSource::Embed(url) => rsx! {
            div { class: "player player--embed",
                iframe {
                    src: "{url}",
                    title: "Lesson video",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }
        },
        MediaSource::Direct(url) => rsx! { NativePlayer { url } },
    }
}

fn send(command: PlayerCommand) {
    let _ = eval(&player_command_script(command));
}

#[component]
fn NativePlayer(url: String) -> Element {
    let mut controls = use_signal(PlayerControls::default);

    use_future(move || async move {
        let mut events = eval(&player_events_script());
        while let Ok(sample) = events.recv::<Vec<f64>>().await {
            let &[time, duration, playing, fullscreen] = sample.as_slice() else {
                continue;
            };
            let now = Instant::now();
            let mut state = controls.write();
            state.on_duration(duration);
            state.on_time_update(time);
            if (playing > 0.0) != state.is_playing() {
                state.set_playing(playing > 0.0, now);
            }
            if (fullscreen > 0.0) != state.is_fullscreen() {
                state.set_fullscreen(fullscreen > 0.0, now);
            }
        }
    });

    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            let mut next = controls.peek().clone();
            if next.tick(Instant::now()) {
                controls.set(next);
            }
        }
    });

    let toggle_play = move |_| {
        let mut state = controls.write();
        state.toggle_play(Instant::now());
        send(if state.is_playing() {
            PlayerCommand::Play
        } else {
            PlayerCommand::Pause
        });
    };

    let state = controls.read().clone();
    let overlay_class = if state.controls_visible() {
        "player__controls"
    } else {
        "player__controls player__controls--hidden"
    };
    let play_label = if state.is_playing() { "Pause" } else { "Play" };
    let mute_label = if state.is_muted() { "Unmute" } else { "Mute" };
    let fullscreen_label = if state.is_fullscreen() {
        "Exit fullscreen"
    } else {
        "Fullscreen"
    };
    let volume = if state.is_muted() { 0.0 } else { state.volume() };
    let duration = state.duration();
    let current = state.current_time();

    rsx! {
        div {
            id: PLAYER_ID,
            class: "player",
            onmousemove: move |_| controls.write().pointer_moved(Instant::now()),
            onmouseleave: move |_| controls.write().pointer_left(),
            video {
                id: VIDEO_ID,
                class: "player__video",
                src: "{url}",
                preload: "metadata",
                onclick: toggle_play,
            }
            div { class: overlay_class,
                button { class: "btn btn--ghost", aria_label: play_label, onclick: toggle_play, "{play_label}" }
                input {
                    class: "player__seek",
                    r#type: "range",
                    min: "0",
                    max: "{duration}",
                    step: "0.1",
                    value: "{current}",
                    aria_label: "Seek",
                    oninput: move |evt| {
                        if let Ok(seconds) = evt.value().parse::<f64>() {
                            let mut state = controls.write();
                            state.seek(seconds, Instant::now());
                            send(PlayerCommand::Seek(state.current_time()));
                        }
                    },
                }
                span { class: "player__time", "{state.time_label()}" }
                button {
                    class: "btn btn--ghost",
                    aria_label: mute_label,
                    onclick: move |_| {
                        let mut state = controls.write();
                        state.toggle_mute(Instant::now());
                        send(PlayerCommand::Muted(state.is_muted()));
                    },
                    "{mute_label}"
                }
                input {
                    class: "player__volume",
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.05",
                    value: "{volume}",
                    aria_label: "Volume",
                    oninput: move |evt| {
                        if let Ok(level) = evt.value().parse::<f64>() {
                            let mut state = controls.write();
                            state.set_volume(level, Instant::now());
                            send(PlayerCommand::Volume(state.volume()));
                        }
                    },
                }
                button {
                    class: "btn btn--ghost",
                    aria_label: fullscreen_label,
                    onclick: move |_| {
                        let mut state = controls.write();
                        let target = !state.is_fullscreen();
                        state.set_fullscreen(target, Instant::now());
                        send(PlayerCommand::Fullscreen(target));
                    },
                    "{fullscreen_label}"
                }
            }
        }
    }
}
