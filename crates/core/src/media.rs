/// How a lesson's video reference has to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Third-party player page, rendered in an iframe.
    Embed(String),
    /// Media file the built-in player streams directly.
    Direct(String),
}

impl MediaSource {
    #[must_use]
    pub fn classify(video_url: &str) -> Self {
        if video_url.contains("youtube.com/embed") {
            Self::Embed(video_url.to_owned())
        } else {
            Self::Direct(video_url.to_owned())
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Embed(url) | Self::Direct(url) => url,
        }
    }

    #[must_use]
    pub fn is_embed(&self) -> bool {
        matches!(self, Self::Embed(_))
    }
}
