use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way the extension pair is swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `.js` -> `.sj`
    Forward,
    /// `.sj` -> `.js`
    Reverse,
}

impl Direction {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Self::Reverse
        } else {
            Self::Forward
        }
    }

    /// The (source, target) suffixes this direction rewrites.
    pub fn suffixes(self) -> (&'static str, &'static str) {
        match self {
            Self::Forward => ("js", "sj"),
            Self::Reverse => ("sj", "js"),
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Reverse => f.write_str("reverse"),
        }
    }
}

/// One suffix rewrite: a pattern anchored at the end of a file name and the
/// suffix that replaces what it matched.
#[derive(Debug, Clone)]
pub struct RenameRule {
    pub extension: &'static str,
    pub direction: Direction,
    pattern: Regex,
    replacement: String,
}

impl RenameRule {
    fn new(extension: &'static str, direction: Direction) -> Result<Self, regex::Error> {
        let (from, to) = direction.suffixes();
        Ok(Self {
            extension,
            direction,
            pattern: Regex::new(&format!(r"\.{}$", regex::escape(from)))?,
            replacement: format!(".{to}"),
        })
    }

    pub fn is_match(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }

    /// The rewritten file name, or `None` if the rule does not apply.
    pub fn apply(&self, file_name: &str) -> Option<String> {
        let found = self.pattern.find(file_name)?;
        let mut renamed = String::with_capacity(file_name.len());
        renamed.push_str(&file_name[..found.start()]);
        renamed.push_str(&self.replacement);
        Some(renamed)
    }
}

/// The fixed set of rename rules. Only the `js` family has an entry, so
/// files selected under any other extension are never renamed.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<RenameRule>,
}

impl RuleTable {
    pub fn builtin() -> Result<Self, regex::Error> {
        Ok(Self {
            rules: vec![
                RenameRule::new("js", Direction::Forward)?,
                RenameRule::new("js", Direction::Reverse)?,
            ],
        })
    }

    pub fn rule(&self, direction: Direction) -> Option<&RenameRule> {
        self.rules.iter().find(|r| r.direction == direction)
    }
}
