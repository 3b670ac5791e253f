//! Text formatting modes accepted by `parse_mode`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    MarkdownV2,
    /// Legacy Markdown; kept by the API for backward compatibility.
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::MarkdownV2 => "MarkdownV2",
            ParseMode::Markdown => "Markdown",
            ParseMode::Html => "HTML",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ParseMode {
    type Err = String;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdownv2" => Ok(ParseMode::MarkdownV2),
            "markdown" => Ok(ParseMode::Markdown),
            "html" => Ok(ParseMode::Html),
            other => Err(format!("unknown parse mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&ParseMode::Html).unwrap(), "\"HTML\"");
        assert_eq!(
            serde_json::to_string(&ParseMode::MarkdownV2).unwrap(),
            "\"MarkdownV2\""
        );
        assert_eq!("html".parse::<ParseMode>().unwrap(), ParseMode::Html);
        assert!("bbcode".parse::<ParseMode>().is_err());
    }
}
