//! Domain models for list/joined conversion.
//!
//! These are the closed value sets the converter and the UI state layer work with.

use serde::{Deserialize, Serialize};

/// Separator placed between items in joined form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// `,`
    #[default]
    Comma,
    /// `;`
    Semicolon,
    /// `|`
    Pipe,
    /// A single space character.
    Space,
}

impl Delimiter {
    /// Every legal delimiter, in menu order.
    pub const ALL: [Self; 4] = [Self::Comma, Self::Semicolon, Self::Pipe, Self::Space];

    /// The literal character inserted between items.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Pipe => '|',
            Self::Space => ' ',
        }
    }

    /// Lowercase name, as accepted on the command line and in config.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Pipe => "pipe",
            Self::Space => "space",
        }
    }

    /// Catalog key for the localized option label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Comma => "delimiters.comma",
            Self::Semicolon => "delimiters.semicolon",
            Self::Pipe => "delimiters.pipe",
            Self::Space => "delimiters.space",
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A lone space is meaningful, so only lowercase before matching names.
        match s {
            "," => return Ok(Self::Comma),
            ";" => return Ok(Self::Semicolon),
            "|" => return Ok(Self::Pipe),
            " " => return Ok(Self::Space),
            _ => {}
        }

        match s.trim().to_lowercase().as_str() {
            "comma" => Ok(Self::Comma),
            "semicolon" => Ok(Self::Semicolon),
            "pipe" => Ok(Self::Pipe),
            "space" => Ok(Self::Space),
            _ => Err(format!(
                "Unknown delimiter: {s:?}. Use: comma, semicolon, pipe, space"
            )),
        }
    }
}

/// Which way a conversion runs. Each direction is one tab of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Newline-separated list in, joined string out.
    #[default]
    #[serde(rename = "join", alias = "list_to_joined")]
    ListToJoined,
    /// Joined string in, newline-separated list out.
    #[serde(rename = "split", alias = "joined_to_list")]
    JoinedToList,
}

impl Direction {
    /// Catalog key for the localized tab name.
    #[must_use]
    pub const fn tab_key(self) -> &'static str {
        match self {
            Self::ListToJoined => "tabs.list_to_joined",
            Self::JoinedToList => "tabs.joined_to_list",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListToJoined => write!(f, "join"),
            Self::JoinedToList => write!(f, "split"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "join" | "list_to_joined" => Ok(Self::ListToJoined),
            "split" | "joined_to_list" => Ok(Self::JoinedToList),
            _ => Err(format!("Unknown mode: {s}. Use: join, split")),
        }
    }
}

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Ukrainian.
    Uk,
}

impl Language {
    /// Language code as stored in preferences.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Uk => "uk",
        }
    }

    /// Short label shown in the language switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Uk => "UA",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "uk" | "ua" => Ok(Self::Uk),
            _ => Err(format!("Unknown language: {s}. Use: en, uk")),
        }
    }
}

/// A text field that can be copied or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyField {
    Input,
    Output,
}

impl CopyField {
    /// Catalog key for the localized field name.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Input => "fields.input",
            Self::Output => "fields.output",
        }
    }
}

impl std::str::FromStr for CopyField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "input" | "in" => Ok(Self::Input),
            "output" | "out" => Ok(Self::Output),
            _ => Err(format!("Unknown field: {s}. Use: input, output")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!("comma".parse::<Delimiter>(), Ok(Delimiter::Comma));
        assert_eq!("Pipe".parse::<Delimiter>(), Ok(Delimiter::Pipe));
        assert_eq!(";".parse::<Delimiter>(), Ok(Delimiter::Semicolon));
        assert_eq!(" ".parse::<Delimiter>(), Ok(Delimiter::Space));
        assert_eq!("space".parse::<Delimiter>(), Ok(Delimiter::Space));
        assert!("tab".parse::<Delimiter>().is_err());
        assert!("".parse::<Delimiter>().is_err());
    }

    #[test]
    fn test_delimiter_chars() {
        let chars: String = Delimiter::ALL.iter().map(|d| d.as_char()).collect();
        assert_eq!(chars, ",;| ");
        assert_eq!(Delimiter::default(), Delimiter::Comma);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("uk".parse::<Language>(), Ok(Language::Uk));
        assert_eq!("UA".parse::<Language>(), Ok(Language::Uk));
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::Uk.label(), "UA");
    }

    #[test]
    fn test_direction_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            direction: Direction,
        }

        let w: Wrapper = toml::from_str("direction = \"split\"").unwrap();
        assert_eq!(w.direction, Direction::JoinedToList);
        assert_eq!(Direction::ListToJoined.to_string(), "join");
    }
}
