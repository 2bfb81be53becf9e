//! Input events understood by a session.
//!
//! Events arrive already decoded from whatever produced them (mouse drags,
//! scroll wheel, key presses, or a script). The textual form is one event
//! per line: `pan <dx> <dy>`, `zoom_in`, `zoom_out`, `toggle_debug`,
//! `resize <width> <height>`, `regenerate [seed]`.

use std::fmt;
use std::str::FromStr;

use strata_common::InputParseError;

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Drag the view by a pixel delta
    Pan {
        /// Horizontal drag in pixels
        dx: f64,
        /// Vertical drag in pixels
        dy: f64,
    },
    /// Double the zoom
    ZoomIn,
    /// Halve the zoom
    ZoomOut,
    /// Show or hide the debug overlay
    ToggleDebug,
    /// The window changed size
    Resize {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
    /// Replace the world with a new seed, random if `None`
    Regenerate(Option<i64>),
}

impl InputEvent {
    /// Parses a script, skipping blank lines and `#` comments.
    pub fn parse_script<'a, I>(lines: I) -> Result<Vec<Self>, InputParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::parse)
            .collect()
    }
}

fn number<T: FromStr>(token: &str) -> Result<T, InputParseError> {
    token
        .parse()
        .map_err(|_| InputParseError::InvalidNumber(token.to_owned()))
}

fn expect_args(
    event: &str,
    args: &[&str],
    allowed: &[usize],
    expected: &'static str,
) -> Result<(), InputParseError> {
    if allowed.contains(&args.len()) {
        Ok(())
    } else {
        Err(InputParseError::ArgumentCount {
            event: event.to_owned(),
            expected,
            actual: args.len(),
        })
    }
}

impl FromStr for InputEvent {
    type Err = InputParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let name = tokens.next().ok_or(InputParseError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match name {
            "pan" => {
                expect_args(name, &args, &[2], "2")?;
                Ok(Self::Pan {
                    dx: number(args[0])?,
                    dy: number(args[1])?,
                })
            },
            "zoom_in" => {
                expect_args(name, &args, &[0], "0")?;
                Ok(Self::ZoomIn)
            },
            "zoom_out" => {
                expect_args(name, &args, &[0], "0")?;
                Ok(Self::ZoomOut)
            },
            "toggle_debug" => {
                expect_args(name, &args, &[0], "0")?;
                Ok(Self::ToggleDebug)
            },
            "resize" => {
                expect_args(name, &args, &[2], "2")?;
                Ok(Self::Resize {
                    width: number(args[0])?,
                    height: number(args[1])?,
                })
            },
            "regenerate" => {
                expect_args(name, &args, &[0, 1], "0 or 1")?;
                let seed = args.first().map(|token| number(token)).transpose()?;
                Ok(Self::Regenerate(seed))
            },
            other => Err(InputParseError::UnknownEvent(other.to_owned())),
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pan { dx, dy } => write!(f, "pan {dx} {dy}"),
            Self::ZoomIn => write!(f, "zoom_in"),
            Self::ZoomOut => write!(f, "zoom_out"),
            Self::ToggleDebug => write!(f, "toggle_debug"),
            Self::Resize { width, height } => write!(f, "resize {width} {height}"),
            Self::Regenerate(Some(seed)) => write!(f, "regenerate {seed}"),
            Self::Regenerate(None) => write!(f, "regenerate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        assert_eq!(
            "pan 100 -2.5".parse::<InputEvent>(),
            Ok(InputEvent::Pan {
                dx: 100.0,
                dy: -2.5
            })
        );
        assert_eq!("zoom_in".parse::<InputEvent>(), Ok(InputEvent::ZoomIn));
        assert_eq!("  zoom_out ".parse::<InputEvent>(), Ok(InputEvent::ZoomOut));
        assert_eq!("toggle_debug".parse::<InputEvent>(), Ok(InputEvent::ToggleDebug));
        assert_eq!(
            "resize 1024 768".parse::<InputEvent>(),
            Ok(InputEvent::Resize {
                width: 1024,
                height: 768
            })
        );
        assert_eq!("regenerate".parse::<InputEvent>(), Ok(InputEvent::Regenerate(None)));
        assert_eq!(
            "regenerate -42".parse::<InputEvent>(),
            Ok(InputEvent::Regenerate(Some(-42)))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<InputEvent>(), Err(InputParseError::Empty));
        assert_eq!(
            "jump".parse::<InputEvent>(),
            Err(InputParseError::UnknownEvent("jump".into()))
        );
        assert_eq!(
            "pan 1".parse::<InputEvent>(),
            Err(InputParseError::ArgumentCount {
                event: "pan".into(),
                expected: "2",
                actual: 1,
            })
        );
        assert_eq!(
            "resize -1 20".parse::<InputEvent>(),
            Err(InputParseError::InvalidNumber("-1".into()))
        );
        assert_eq!(
            "regenerate abc".parse::<InputEvent>(),
            Err(InputParseError::InvalidNumber("abc".into()))
        );
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let events = InputEvent::parse_script(["# warm up", "", "zoom_in", "pan 4 4"])
            .expect("valid script");
        assert_eq!(
            events,
            vec![InputEvent::ZoomIn, InputEvent::Pan { dx: 4.0, dy: 4.0 }]
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let event = InputEvent::Pan { dx: -3.5, dy: 12.0 };
        assert_eq!(event.to_string().parse::<InputEvent>(), Ok(event));
        assert_eq!(InputEvent::Regenerate(Some(9)).to_string(), "regenerate 9");
    }
}
