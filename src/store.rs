//! Section-scoped key/value stores and the token-stream builder.
//!
//! One `SectionStore` exists per configuration domain (`Core` plus one per
//! supported target language). `build_configs` consumes the lexer's token
//! sequence in order and populates all four stores, tracking the active
//! domain as explicit state.

use indexmap::IndexMap;

use crate::constants::{KNOWN_KEYS, MAX_STORE_ENTRIES};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// A logical configuration domain. Exactly one store exists per domain for
/// the lifetime of a configuration-processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Core,
    LangC,
    LangCpp,
    LangPython,
}

impl Domain {
    /// Resolves the `name` value of a `[Language]` section.
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "clang" => Some(Self::LangC),
            "cpp" | "c++" => Some(Self::LangCpp),
            "py" => Some(Self::LangPython),
            _ => None,
        }
    }

    /// Resolves the value of the `--lang` command-line flag.
    pub fn from_cli_name(name: &str) -> Option<Self> {
        match name {
            "c" | "clang" => Some(Self::LangC),
            "c++" | "cpp" => Some(Self::LangCpp),
            "py" => Some(Self::LangPython),
            _ => None,
        }
    }
}

/// An associative key/value table scoped to one domain.
///
/// Entries preserve document order. Capacity is bounded; inserting past the
/// bound fails closed instead of dropping data. Duplicate keys within one
/// domain are rejected outright.
#[derive(Debug, Default)]
pub struct SectionStore {
    entries: IndexMap<String, String>,
}

impl SectionStore {
    pub fn insert(&mut self, key: String, value: String) -> Result<()> {
        if self.entries.len() >= MAX_STORE_ENTRIES {
            return Err(Error::SemanticError(format!(
                "section holds too many entries (max {})",
                MAX_STORE_ENTRIES
            )));
        }
        if self.entries.contains_key(&key) {
            return Err(Error::SemanticError(format!(
                "duplicate key `{}` in the same section",
                key
            )));
        }
        self.entries.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four populated stores of one configuration-processing run.
#[derive(Debug, Default)]
pub struct ConfigSet {
    core: SectionStore,
    lang_c: SectionStore,
    lang_cpp: SectionStore,
    lang_python: SectionStore,
}

impl ConfigSet {
    pub fn store(&self, domain: Domain) -> &SectionStore {
        match domain {
            Domain::Core => &self.core,
            Domain::LangC => &self.lang_c,
            Domain::LangCpp => &self.lang_cpp,
            Domain::LangPython => &self.lang_python,
        }
    }

    fn store_mut(&mut self, domain: Domain) -> &mut SectionStore {
        match domain {
            Domain::Core => &mut self.core,
            Domain::LangC => &mut self.lang_c,
            Domain::LangCpp => &mut self.lang_cpp,
            Domain::LangPython => &mut self.lang_python,
        }
    }
}

/// Consumes the token sequence and populates the domain stores.
///
/// The active domain starts at `Core`. A `[Core]` header re-selects it; a
/// `[Language]` header must be immediately followed by the `name` key whose
/// value selects the language domain. Any other section name, any key
/// outside the known-key set, and any structurally impossible token are
/// fatal.
///
/// # Errors
/// * `Error::SemanticError` on unknown sections, keys or languages, on a
///   malformed `[Language]` header, and on duplicate keys
pub fn build_configs(tokens: Vec<Token>) -> Result<ConfigSet> {
    let mut configs = ConfigSet::default();
    let mut domain = Domain::Core;

    let mut iter = tokens.into_iter();
    while let Some(token) = iter.next() {
        match token.kind {
            TokenKind::Section => match token.text.as_str() {
                "Core" => domain = Domain::Core,
                "Language" => domain = language_domain(&mut iter)?,
                other => {
                    return Err(Error::SemanticError(format!(
                        "unknown section name `{}`",
                        other
                    )));
                }
            },

            TokenKind::Key => {
                if !KNOWN_KEYS.contains(&token.text.as_str()) {
                    return Err(Error::SemanticError(format!(
                        "`{}` doesn't appear to be a known key",
                        token.text
                    )));
                }
                let value = next_value(&mut iter)?;
                configs.store_mut(domain).insert(token.text, value)?;
            }

            // The lexer only emits a value right after its key; seeing one
            // here means the stream is out of order.
            TokenKind::Value => {
                return Err(Error::SemanticError(
                    "value token without a preceding key".to_string(),
                ));
            }
        }
    }

    Ok(configs)
}

fn language_domain(iter: &mut impl Iterator<Item = Token>) -> Result<Domain> {
    let key = iter
        .next()
        .filter(|t| t.kind == TokenKind::Key)
        .ok_or_else(|| {
            Error::SemanticError(
                "the first entry after `[Language]` must be `name`".to_string(),
            )
        })?;
    if key.text != "name" {
        return Err(Error::SemanticError(
            "the first entry after `[Language]` must be `name`".to_string(),
        ));
    }

    let value = next_value(iter)?;
    Domain::from_config_name(&value)
        .ok_or_else(|| Error::SemanticError(format!("unknown language `{}`", value)))
}

fn next_value(iter: &mut impl Iterator<Item = Token>) -> Result<String> {
    iter.next()
        .filter(|t| t.kind == TokenKind::Value)
        .map(|t| t.text)
        .ok_or_else(|| {
            Error::SemanticError("key token without a following value".to_string())
        })
}
