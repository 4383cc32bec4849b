/// Playback session as restored from storage.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Stopped,
    Playing { source: String, position: f64 },
    Paused { source: String, position: f64 },
}

impl SessionState {
    /// Validating read of the three raw entries.
    ///
    /// A blank or missing source means nothing to resume, whatever the other
    /// two entries say. A position that is not a finite, non-negative number is
    /// treated as the start of the file.
    pub fn decode(
        source: Option<String>,
        time: Option<String>,
        playing: Option<String>,
    ) -> Self {
        let Some(source) = source
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        else {
            return SessionState::Stopped;
        };
        let position = time
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite() && *t >= 0.0)
            .unwrap_or(0.0);

        if playing.as_deref() == Some("true") {
            SessionState::Playing { source, position }
        } else {
            SessionState::Paused { source, position }
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            SessionState::Stopped => None,
            SessionState::Playing { source, .. } | SessionState::Paused { source, .. } => {
                Some(source)
            }
        }
    }

    pub fn position(&self) -> f64 {
        match self {
            SessionState::Stopped => 0.0,
            SessionState::Playing { position, .. } | SessionState::Paused { position, .. } => {
                *position
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, SessionState::Playing { .. })
    }
}

/// Trailing path segment of a path or URL, splitting on `/` and `\`.
pub fn file_name(src: &str) -> &str {
    src.rsplit(['/', '\\']).next().unwrap_or(src)
}

/// Prefix `folder` onto `src` unless it is already there.
pub fn qualify(src: &str, folder: &str) -> String {
    if folder.is_empty() || src.starts_with(folder) {
        src.to_string()
    } else {
        format!("{folder}{src}")
    }
}

/// File name for the dock label, with percent-escapes decoded.
pub fn display_name(src: &str) -> String {
    let name = file_name(src);
    urlencoding::decode(name)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| name.to_string())
}

/// Number formatting used for the position entry ("0", "42.5").
pub fn format_position(seconds: f64) -> String {
    seconds.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn decodes_playing_session() {
        let state = SessionState::decode(some("a.mp3"), some("42.5"), some("true"));
        assert_eq!(
            state,
            SessionState::Playing {
                source: "a.mp3".to_string(),
                position: 42.5
            }
        );
    }

    #[test]
    fn source_is_trimmed() {
        let state = SessionState::decode(some(" a.mp3 "), some("1e3"), some("true"));
        assert_eq!(
            state,
            SessionState::Playing {
                source: "a.mp3".to_string(),
                position: 1000.0
            }
        );
    }

    #[test]
    fn anything_but_true_is_paused() {
        let state = SessionState::decode(some("a.mp3"), some("3"), some("false"));
        assert!(!state.is_playing());
        let state = SessionState::decode(some("a.mp3"), None, some("TRUE"));
        assert!(matches!(state, SessionState::Paused { .. }));
    }

    #[test]
    fn playing_flag_without_source_is_stopped() {
        assert_eq!(
            SessionState::decode(None, some("12"), some("true")),
            SessionState::Stopped
        );
        assert_eq!(
            SessionState::decode(some("  "), some("12"), some("true")),
            SessionState::Stopped
        );
    }

    #[test]
    fn malformed_position_restarts_file() {
        for raw in ["abc", "NaN", "-4", "Infinity", ""] {
            let state = SessionState::decode(some("a.mp3"), some(raw), some("true"));
            assert_eq!(state.position(), 0.0, "position from {raw:?}");
        }
    }

    #[test]
    fn file_name_takes_last_segment() {
        assert_eq!(file_name("https://pod.example/audio/ep1.mp3"), "ep1.mp3");
        assert_eq!(file_name("audio\\ep2.mp3"), "ep2.mp3");
        assert_eq!(file_name("ep3.mp3"), "ep3.mp3");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn qualify_does_not_double_prefix() {
        assert_eq!(qualify("a.mp3", "audio/"), "audio/a.mp3");
        assert_eq!(qualify("audio/a.mp3", "audio/"), "audio/a.mp3");
        assert_eq!(qualify("a.mp3", ""), "a.mp3");
    }

    #[test]
    fn display_name_decodes_escapes() {
        assert_eq!(
            display_name("https://pod.example/audio/Episode%2001.mp3"),
            "Episode 01.mp3"
        );
    }

    #[test]
    fn positions_format_like_the_page_script() {
        assert_eq!(format_position(0.0), "0");
        assert_eq!(format_position(42.5), "42.5");
    }
}
