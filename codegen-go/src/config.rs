use unicode_general_category::{GeneralCategory, get_general_category};

/// Options controlling what gets emitted for one struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub struct_name: String,
    /// exported (`UserName`) or unexported (`userName`) field identifiers
    pub public_fields: bool,
    pub getters: bool,
    pub setters: bool,
    pub constructor: bool,
    pub package: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid struct name {0:?}: not a Go identifier")]
    InvalidStructName(String),

    #[error("invalid package name {0:?}: not a Go identifier")]
    InvalidPackageName(String),

    #[error("struct name {0:?} gives the blank receiver `_`, which getters and setters can't use")]
    BlankReceiver(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            struct_name: "Foo".into(),
            public_fields: true,
            getters: false,
            setters: false,
            constructor: true,
            package: "main".into(),
        }
    }
}

impl Config {
    /// Exported fields and getters both requested. Code is still generated
    /// for both, which leaves a field and a method with the same name.
    pub fn accessor_conflict(&self) -> bool {
        self.public_fields && self.getters
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_go_identifier(&self.struct_name) {
            return Err(ConfigError::InvalidStructName(self.struct_name.clone()));
        }
        if !is_go_identifier(&self.package) {
            return Err(ConfigError::InvalidPackageName(self.package.clone()));
        }
        if (self.getters || self.setters) && self.struct_name.starts_with('_') {
            return Err(ConfigError::BlankReceiver(self.struct_name.clone()));
        }
        Ok(())
    }
}

const GO_KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// identifier = letter { letter | unicode_digit }
fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let valid = match chars.next() {
        Some(first) if is_letter(first) => chars.all(|c| is_letter(c) || is_digit(c)),
        _ => false,
    };
    valid && !GO_KEYWORDS.contains(&s)
}

fn is_letter(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}
