//! Naming policies for field and enum names.
//!
//! The central piece is [`convert`], a word-boundary segmentation that rewrites
//! identifier-style names into separator-delimited forms:
//!
//! | Input        | snake_case     | UPPER_SNAKE_CASE | kebab-case     |
//! |--------------|----------------|------------------|----------------|
//! | `PascalCase` | `pascal_case`  | `PASCAL_CASE`    | `pascal-case`  |
//! | `XMLReader`  | `xml_reader`   | `XML_READER`     | `xml-reader`   |
//! | `word  word` | `word_word`    | `WORD_WORD`      | `word-word`    |
//!
//! Policies are values implementing [`NamingPolicy`]. Besides [`SeparatorCase`] and
//! [`CamelCase`], any `Fn(&str) -> String` can be used as a policy.
//!
//! ## Examples
//!
//! ```rust
//! use serde_symbolic::naming::{self, NamingPolicy, SeparatorCase};
//!
//! assert_eq!(naming::convert("PascalCase", true, '_'), "pascal_case");
//! assert_eq!(SeparatorCase::KEBAB.convert_name("XMLReader"), "xml-reader");
//! ```

/// A function from an identifier-style name to its serialized form.
pub trait NamingPolicy: Send + Sync {
    fn convert_name(&self, name: &str) -> String;
}

impl<F> NamingPolicy for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn convert_name(&self, name: &str) -> String {
        self(name)
    }
}

/// Separator-delimited casing: snake_case, kebab-case and their upper variants.
///
/// # Examples
///
/// ```rust
/// use serde_symbolic::naming::SeparatorCase;
///
/// let case = SeparatorCase::new(false, '.');
/// assert_eq!(case.convert("camelCase"), "CAMEL.CASE");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeparatorCase {
    lowercase: bool,
    separator: char,
}

impl SeparatorCase {
    /// `snake_case`
    pub const SNAKE: SeparatorCase = SeparatorCase::new(true, '_');
    /// `UPPER_SNAKE_CASE`
    pub const UPPER_SNAKE: SeparatorCase = SeparatorCase::new(false, '_');
    /// `kebab-case`
    pub const KEBAB: SeparatorCase = SeparatorCase::new(true, '-');
    /// `UPPER-KEBAB-CASE`
    pub const UPPER_KEBAB: SeparatorCase = SeparatorCase::new(false, '-');

    #[must_use]
    pub const fn new(lowercase: bool, separator: char) -> Self {
        SeparatorCase {
            lowercase,
            separator,
        }
    }

    #[must_use]
    pub const fn is_lowercase(&self) -> bool {
        self.lowercase
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    #[must_use]
    pub fn convert(&self, name: &str) -> String {
        convert(name, self.lowercase, self.separator)
    }
}

impl NamingPolicy for SeparatorCase {
    fn convert_name(&self, name: &str) -> String {
        self.convert(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Space,
    Other,
}

impl CharClass {
    #[inline]
    fn of(c: char) -> Self {
        if c.is_uppercase() {
            CharClass::Uppercase
        } else if c.is_lowercase() {
            CharClass::Lowercase
        } else if c.is_numeric() {
            CharClass::Digit
        } else if is_space_separator(c) {
            CharClass::Space
        } else {
            CharClass::Other
        }
    }
}

/// Unicode general category `Zs`. Tabs and line breaks are not in it.
#[inline]
fn is_space_separator(c: char) -> bool {
    matches!(
        c,
        '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WordState {
    NotStarted,
    Uppercase,
    LowercaseOrDigit,
    SpaceSeparator,
}

/// Rewrites `name` into words joined by `separator`, all lowercase or all uppercase.
///
/// A new word starts at an uppercase letter that follows a lowercase letter (digits in
/// between included) or spaces, and at the last letter of an uppercase run that is
/// followed by a lowercase letter. Spaces are dropped (a run of them becomes one
/// separator between words). Every other character, the separator included, is copied
/// through unchanged and never causes a separator on either side.
///
/// # Examples
///
/// ```rust
/// use serde_symbolic::naming::convert;
///
/// assert_eq!(convert("XMLReader", true, '_'), "xml_reader");
/// assert_eq!(convert("SHA512Hash", true, '_'), "sha512_hash");
/// assert_eq!(convert("  leading and  trailing ", true, '-'), "leading-and-trailing");
/// assert_eq!(convert("already_snake", true, '_'), "already_snake");
/// ```
#[must_use]
pub fn convert(name: &str, lowercase: bool, separator: char) -> String {
    let mut output = String::with_capacity(name.len() + name.len() / 5);
    let mut state = WordState::NotStarted;
    let mut chars = name.chars().peekable();

    while let Some(current) = chars.next() {
        match CharClass::of(current) {
            CharClass::Uppercase => {
                let starts_word = match state {
                    WordState::LowercaseOrDigit | WordState::SpaceSeparator => true,
                    WordState::Uppercase => chars
                        .peek()
                        .is_some_and(|&next| CharClass::of(next) == CharClass::Lowercase),
                    WordState::NotStarted => false,
                };
                if starts_word {
                    output.push(separator);
                }
                push_cased(&mut output, current, lowercase);
                state = WordState::Uppercase;
            }
            CharClass::Lowercase => {
                if state == WordState::SpaceSeparator {
                    output.push(separator);
                }
                push_cased(&mut output, current, lowercase);
                state = WordState::LowercaseOrDigit;
            }
            CharClass::Digit => {
                // a digit keeps the class of what precedes it: SHA512Hash -> sha512_hash,
                // and a leading digit never arms a split (1A -> 1a)
                if state == WordState::SpaceSeparator {
                    output.push(separator);
                    state = WordState::NotStarted;
                }
                output.push(current);
            }
            CharClass::Space => {
                if state != WordState::NotStarted {
                    state = WordState::SpaceSeparator;
                }
            }
            CharClass::Other => {
                output.push(current);
                state = WordState::NotStarted;
            }
        }
    }

    output
}

#[inline]
fn push_cased(output: &mut String, c: char, lowercase: bool) {
    if lowercase {
        output.extend(c.to_lowercase());
    } else {
        output.extend(c.to_uppercase());
    }
}

/// `camelCase`: lowercases the leading uppercase run of a name.
///
/// The last letter of a leading acronym stays uppercase when a lowercase letter follows
/// it, so `XMLReader` becomes `xmlReader`. Names that do not start with an uppercase
/// letter are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use serde_symbolic::naming::{CamelCase, NamingPolicy};
///
/// assert_eq!(CamelCase.convert_name("OneOne"), "oneOne");
/// assert_eq!(CamelCase.convert_name("XMLReader"), "xmlReader");
/// assert_eq!(CamelCase.convert_name("URL"), "url");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CamelCase;

impl NamingPolicy for CamelCase {
    fn convert_name(&self, name: &str) -> String {
        if !name.chars().next().is_some_and(char::is_uppercase) {
            return name.to_string();
        }

        let mut lowered = name.len();
        for (position, (index, current)) in name.char_indices().enumerate() {
            if position == 1 && !current.is_uppercase() {
                lowered = index;
                break;
            }
            let end = index + current.len_utf8();
            let next = name[end..].chars().next();
            if let Some(next) = next.filter(|next| position > 0 && !next.is_uppercase()) {
                // a space ends the run without starting a new word
                lowered = if is_space_separator(next) { end } else { index };
                break;
            }
        }

        let (head, tail) = name.split_at(lowered);
        let mut output = String::with_capacity(name.len());
        output.extend(head.chars().flat_map(char::to_lowercase));
        output.push_str(tail);
        output
    }
}
