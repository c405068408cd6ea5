use hangman_core::Tone;

#[derive(Copy, Clone, Debug, PartialEq, clap::ValueEnum)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    const DARK_QUERY: &'static str = "(prefers-color-scheme: dark)";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    /// Colour of the gallows and figure strokes.
    pub(crate) const fn stroke_color(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "#333",
            Dark => "#ddd",
        }
    }

    pub(crate) const fn tone_color(self, tone: Tone) -> &'static str {
        match (self, tone) {
            (Theme::Light, tone) => tone.color(),
            (Theme::Dark, Tone::Success) => "#4caf50",
            (Theme::Dark, Tone::Failure) => "#ef5350",
        }
    }

    /// Theme asked for by the browser, light when it cannot be queried.
    pub(crate) fn preferred() -> Self {
        use gloo::utils::window;
        match window().match_media(Self::DARK_QUERY) {
            Ok(Some(query)) if query.matches() => Theme::Dark,
            Ok(_) => Theme::Light,
            Err(err) => {
                log::warn!("failed to query color scheme: {:?}", err);
                Theme::Light
            }
        }
    }

    pub(crate) fn resolve(theme: Option<Self>) -> Self {
        theme.unwrap_or_else(Self::preferred)
    }

    /// Pins the page to `theme`, or leaves it to the stylesheet's media query.
    pub(crate) fn apply(theme: Option<Self>) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("document has no root element");
            return;
        };
        if let Some(theme) = theme {
            let scheme = theme.scheme();
            log::debug!("theme-scheme: {}", scheme);
            if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
                log::error!("failed to set theme: {:?}", err);
            }
        } else {
            log::debug!("no theme preference");
            if let Err(err) = html.remove_attribute(Self::ATTR_NAME) {
                log::error!("failed to set theme: {:?}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_uses_plain_message_colors() {
        assert_eq!(Theme::Light.tone_color(Tone::Success), "green");
        assert_eq!(Theme::Light.tone_color(Tone::Failure), "red");
    }

    #[test]
    fn explicit_theme_wins_over_preference() {
        assert_eq!(Theme::resolve(Some(Theme::Dark)), Theme::Dark);
        assert_eq!(Theme::Dark.stroke_color(), "#ddd");
    }
}
