// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and route handling for application navigation.
//!
//! Routes have the shape `gallery` and `slider/{imageIndex}`. The slider
//! argument defaults to 0 when absent or unparsable; an unknown route falls
//! back to the gallery. Parsing never fails.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    /// Fullscreen slider, opened at the requested image index. The index is
    /// a raw request; the slider controller clamps it into range.
    Slider { image_index: i64 },
}

impl Screen {
    /// Parses a route string into a screen.
    pub fn parse_route(route: &str) -> Self {
        let route = route.trim();

        if let Some(argument) = route.strip_prefix("slider") {
            let image_index = argument
                .strip_prefix('/')
                .and_then(|raw| raw.parse::<i64>().ok())
                .unwrap_or(0);
            return Screen::Slider { image_index };
        }

        Screen::Gallery
    }

    /// Returns the route string for this screen.
    pub fn route(&self) -> String {
        match self {
            Screen::Gallery => "gallery".to_string(),
            Screen::Slider { image_index } => format!("slider/{}", image_index),
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Gallery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_route_parses() {
        assert_eq!(Screen::parse_route("gallery"), Screen::Gallery);
    }

    #[test]
    fn slider_route_carries_index() {
        assert_eq!(
            Screen::parse_route("slider/4"),
            Screen::Slider { image_index: 4 }
        );
    }

    #[test]
    fn slider_route_accepts_negative_index() {
        assert_eq!(
            Screen::parse_route("slider/-5"),
            Screen::Slider { image_index: -5 }
        );
    }

    #[test]
    fn missing_index_defaults_to_zero() {
        assert_eq!(
            Screen::parse_route("slider"),
            Screen::Slider { image_index: 0 }
        );
        assert_eq!(
            Screen::parse_route("slider/"),
            Screen::Slider { image_index: 0 }
        );
    }

    #[test]
    fn unparsable_index_defaults_to_zero() {
        assert_eq!(
            Screen::parse_route("slider/abc"),
            Screen::Slider { image_index: 0 }
        );
    }

    #[test]
    fn unknown_route_falls_back_to_gallery() {
        assert_eq!(Screen::parse_route("settings"), Screen::Gallery);
        assert_eq!(Screen::parse_route(""), Screen::Gallery);
    }

    #[test]
    fn routes_round_trip() {
        for screen in [Screen::Gallery, Screen::Slider { image_index: 7 }] {
            assert_eq!(Screen::parse_route(&screen.route()), screen);
        }
    }
}
