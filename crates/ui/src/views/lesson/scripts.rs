/// Element id of the built-in `<video>`.
pub(super) const VIDEO_ID: &str = "lesson-video";
/// Element id of the player frame that goes fullscreen.
pub(super) const PLAYER_ID: &str = "lesson-player";

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum PlayerCommand {
    Play,
    Pause,
    Seek(f64),
    Volume(f64),
    Muted(bool),
    Fullscreen(bool),
}

/// Reports `[currentTime, duration, playing, fullscreen]` on every media or
/// fullscreen event until the video leaves the page.
pub(super) fn player_events_script() -> String {
    format!(
        r#"(async function() {{
                    const video = document.getElementById({VIDEO_ID:?});
                    const frame = document.getElementById({PLAYER_ID:?});
                    if (!video) {{
                        return;
                    }}
                    const report = () => {{
                        dioxus.send([
                            video.currentTime || 0,
                            isFinite(video.duration) ? video.duration : 0,
                            video.paused ? 0 : 1,
                            document.fullscreenElement === frame ? 1 : 0,
                        ]);
                    }};
                    for (const name of ["loadedmetadata", "durationchange", "timeupdate", "play", "pause", "ended"]) {{
                        video.addEventListener(name, report);
                    }}
                    document.addEventListener("fullscreenchange", report);
                    report();
                    await new Promise((resolve) => {{
                        const watch = setInterval(() => {{
                            if (!document.getElementById({VIDEO_ID:?})) {{
                                clearInterval(watch);
                                document.removeEventListener("fullscreenchange", report);
                                resolve();
                            }}
                        }}, 1000);
                    }});
                }})();"#
    )
}

pub(super) fn player_command_script(command: PlayerCommand) -> String {
    let body = match command {
        PlayerCommand::Play => "video.play();".to_string(),
        PlayerCommand::Pause => "video.pause();".to_string(),
        PlayerCommand::Seek(seconds) => format!("video.currentTime = {seconds};"),
        PlayerCommand::Volume(volume) => {
            format!("video.volume = {volume}; video.muted = {};", volume == 0.0)
        }
        PlayerCommand::Muted(muted) => format!("video.muted = {muted};"),
        PlayerCommand::Fullscreen(true) => {
            "if (frame && !document.fullscreenElement) { frame.requestFullscreen(); }".to_string()
        }
        PlayerCommand::Fullscreen(false) => {
            "if (document.fullscreenElement) { document.exitFullscreen(); }".to_string()
        }
    };
    format!(
        r#"(function() {{
                    const video = document.getElementById({VIDEO_ID:?});
                    const frame = document.getElementById({PLAYER_ID:?});
                    if (!video) {{
                        return;
                    }}
                    {body}
                }})();"#
    )
}
