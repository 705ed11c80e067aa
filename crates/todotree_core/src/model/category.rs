use std::fmt;

/// Categories offered by the front end. Free text is still accepted and kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    SkinCare,
    Shopping,
    Study,
    #[default]
    Personal,
    Work,
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 5] = [
        Category::SkinCare,
        Category::Shopping,
        Category::Study,
        Category::Personal,
        Category::Work,
    ];

    pub fn parse(raw: &str) -> Self {
        match canonical_key(raw).as_deref() {
            Some("skin_care" | "skincare") => Self::SkinCare,
            Some("shopping") => Self::Shopping,
            Some("study") => Self::Study,
            Some("personal") => Self::Personal,
            Some("work") => Self::Work,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::SkinCare => "Skin Care",
            Self::Shopping => "Shopping",
            Self::Study => "Study",
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::Other(text) => text,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercase ASCII words joined by single underscores, or `None` when nothing is left.
pub(crate) fn canonical_key(raw: &str) -> Option<String> {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
