//! Command templates and flag sets.
//!
//! A [`CommandTemplate`] is an ordered token list for one tool invocation.
//! Tokens are either literal arguments or named slots (`$flags$`, `$src$`,
//! ...) that the caller fills at invocation time. Slots expand to zero or
//! more arguments in place, so argument order is exactly the declared order.

use serde::{Serialize, Serializer};

use crate::resolver::errors::ConfigError;

/// A named substitution slot in a command template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placeholder {
    /// Active flag set for the build mode
    Flags,
    /// GUI toolkit flags reported by pkg-config
    Gtk,
    /// Include or library search paths
    Path,
    /// Source file
    Src,
    /// Object file (compile output) or object files (link input)
    Obj,
    /// The project's own library
    Mrtrix,
    /// Math/linear-algebra library flags
    Gsl,
    /// Compression library flags
    Lz,
    /// Executable output
    Bin,
    /// Shared library output
    Lib,
}

impl Placeholder {
    pub const ALL: [Placeholder; 10] = [
        Placeholder::Flags,
        Placeholder::Gtk,
        Placeholder::Path,
        Placeholder::Src,
        Placeholder::Obj,
        Placeholder::Mrtrix,
        Placeholder::Gsl,
        Placeholder::Lz,
        Placeholder::Bin,
        Placeholder::Lib,
    ];

    /// Get the slot name (without `$` delimiters).
    pub fn as_str(&self) -> &'static str {
        match self {
            Placeholder::Flags => "flags",
            Placeholder::Gtk => "gtk",
            Placeholder::Path => "path",
            Placeholder::Src => "src",
            Placeholder::Obj => "obj",
            Placeholder::Mrtrix => "mrtrix",
            Placeholder::Gsl => "gsl",
            Placeholder::Lz => "lz",
            Placeholder::Bin => "bin",
            Placeholder::Lib => "lib",
        }
    }

    /// Look up a slot by name, with or without `$` delimiters.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name
            .strip_prefix('$')
            .and_then(|n| n.strip_suffix('$'))
            .unwrap_or(name);
        Placeholder::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}$", self.as_str())
    }
}

/// One element of a command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Slot(Placeholder),
}

impl Token {
    /// Parse a `$name$` slot or a plain literal.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        if s.len() > 1 && s.starts_with('$') && s.ends_with('$') {
            return Placeholder::from_name(s)
                .map(Token::Slot)
                .ok_or_else(|| ConfigError::UnknownPlaceholder {
                    token: s.to_string(),
                });
        }
        Ok(Token::Literal(s.to_string()))
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Literal(s.to_string())
    }
}

impl From<Placeholder> for Token {
    fn from(p: Placeholder) -> Self {
        Token::Slot(p)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Literal(s) => f.write_str(s),
            Token::Slot(p) => write!(f, "{}", p),
        }
    }
}

/// Ordered argument template for a single tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandTemplate {
    tokens: Vec<Token>,
}

impl CommandTemplate {
    /// Create a template from tokens.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        CommandTemplate {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Parse a template from strings, treating `$name$` entries as slots.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ConfigError> {
        let tokens = tokens
            .iter()
            .map(|t| Token::parse(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CommandTemplate { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The program to run, if the template starts with a literal.
    pub fn program(&self) -> Option<&str> {
        match self.tokens.first() {
            Some(Token::Literal(s)) => Some(s),
            _ => None,
        }
    }

    /// Slots still waiting for a value, in template order.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Slot(p) => Some(*p),
                Token::Literal(_) => None,
            })
            .collect()
    }

    /// Replace every occurrence of `placeholder` with `values`, in place.
    ///
    /// An empty `values` removes the slot. Returns a new template.
    pub fn bind<S: AsRef<str>>(&self, placeholder: Placeholder, values: &[S]) -> CommandTemplate {
        let mut tokens = Vec::with_capacity(self.tokens.len() + values.len());
        for token in &self.tokens {
            match token {
                Token::Slot(p) if *p == placeholder => {
                    tokens.extend(values.iter().map(|v| Token::Literal(v.as_ref().to_string())));
                }
                other => tokens.push(other.clone()),
            }
        }
        CommandTemplate { tokens }
    }

    /// Produce the final argument vector.
    ///
    /// Fails if any slot has not been bound.
    pub fn render(&self) -> Result<Vec<String>, ConfigError> {
        self.tokens
            .iter()
            .map(|t| match t {
                Token::Literal(s) => Ok(s.clone()),
                Token::Slot(p) => Err(ConfigError::UnboundPlaceholder {
                    placeholder: p.to_string(),
                }),
            })
            .collect()
    }
}

impl std::fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl Serialize for CommandTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tokens.iter().map(|t| t.to_string()))
    }
}

/// Ordered, possibly duplicated list of tool flags.
///
/// Order is preserved exactly: later flags may override earlier ones at the
/// tool level. Overlay helpers return new sets and never touch `self`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FlagSet(Vec<String>);

impl FlagSet {
    pub fn new() -> Self {
        FlagSet(Vec::new())
    }

    /// Build a flag set from string literals.
    pub fn of(flags: &[&str]) -> Self {
        FlagSet(flags.iter().map(|f| f.to_string()).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|f| f == flag)
    }

    /// Copy of this set with `flag` at the end.
    pub fn with(&self, flag: &str) -> FlagSet {
        let mut flags = self.0.clone();
        flags.push(flag.to_string());
        FlagSet(flags)
    }

    /// Copy of this set with `flag` at the front.
    pub fn with_front(&self, flag: &str) -> FlagSet {
        let mut flags = Vec::with_capacity(self.0.len() + 1);
        flags.push(flag.to_string());
        flags.extend(self.0.iter().cloned());
        FlagSet(flags)
    }

    /// Copy of this set followed by `other`.
    pub fn chain(&self, other: &FlagSet) -> FlagSet {
        let mut flags = self.0.clone();
        flags.extend(other.0.iter().cloned());
        FlagSet(flags)
    }

    /// Append in place. Only used while profiles are being initialized.
    pub(crate) fn push(&mut self, flag: impl Into<String>) {
        self.0.push(flag.into());
    }
}

impl From<Vec<String>> for FlagSet {
    fn from(flags: Vec<String>) -> Self {
        FlagSet(flags)
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
