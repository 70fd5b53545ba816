// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

pub(crate) const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";

/// Separates a flag name from its value. Only the first one counts.
const VALUE_SEPARATOR: char = '=';

/// Prefix that turns `-nofoo` into a negation of `foo`.
pub(crate) const NEGATION_PREFIX: &str = "no";

/// The value a negation must carry to *not* negate (`-nofoo=0`).
pub(crate) const FALSE_VALUE: &str = "0";

/// Strip a leading `--` or `-` from a flag name.
///
/// Used both when parsing tokens and when looking names up, so `"-foo"`,
/// `"--foo"` and `"foo"` all refer to the same flag.
pub fn canonical_name(name: &str) -> &str {
    name.strip_prefix(LONG_OPT_PREFIX)
        .or_else(|| name.strip_prefix(OPT_PREFIX))
        .unwrap_or(name)
}

/// A single command-line token that looks like a flag.
///
/// Tokens borrow from the raw argument they were parsed from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Token<'a> {
    /// Canonical flag name (dashes removed). May be empty for malformed
    /// tokens such as `-` or `--=x`.
    pub name: &'a str,
    /// Everything after the first `=`, or [None] if there was no `=`.
    pub value: Option<&'a str>,
}

impl<'a> Token<'a> {
    /// Classify a raw argument.
    ///
    /// Returns [None] for arguments that do not start with a dash
    /// (positional arguments).
    pub fn parse(raw: &'a str) -> Option<Self> {
        if !raw.starts_with(OPT_PREFIX) {
            return None;
        }

        let flag = canonical_name(raw);

        let token = match flag.split_once(VALUE_SEPARATOR) {
            Some((name, value)) => Token {
                name,
                value: Some(value),
            },
            None => Token {
                name: flag,
                value: None,
            },
        };

        Some(token)
    }

    /// The value as stored in the argument map: absent values become `""`.
    pub fn value(&self) -> &'a str {
        self.value.unwrap_or("")
    }

    /// If this token is written as `-noX`, returns `X`.
    ///
    /// A bare `-no` is not a negation of the empty name.
    pub fn negated_name(&self) -> Option<&'a str> {
        self.name
            .strip_prefix(NEGATION_PREFIX)
            .filter(|base| !base.is_empty())
    }

    /// `-noX=0` is a double negative: it asserts `X` rather than negating it.
    pub fn is_double_negative(&self) -> bool {
        self.negated_name().is_some() && self.value == Some(FALSE_VALUE)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}{}{}{}", OPT_PREFIX, self.name, VALUE_SEPARATOR, value),
            None => write!(f, "{}{}", OPT_PREFIX, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        let tests = &[
            ("", ""),
            ("-", ""),
            ("--", ""),
            ("---", "-"),
            ("foo", "foo"),
            ("-foo", "foo"),
            ("--foo", "foo"),
            ("---foo", "-foo"),
            ("-no-foo", "no-foo"),
        ];

        for (i, (name, expected)) in tests.iter().enumerate() {
            let msg = format!("test[{}]: name: {:?}", i, name);

            assert_eq!(canonical_name(name), *expected, "{}", msg);
        }
    }

    #[test]
    fn test_token_parse() {
        #[derive(Debug)]
        struct TestData<'a> {
            raw: &'a str,
            result: Option<Token<'a>>,
        }

        let tests = &[
            TestData {
                raw: "",
                result: None,
            },
            TestData {
                raw: "foo",
                result: None,
            },
            TestData {
                raw: " -foo",
                result: None,
            },
            TestData {
                raw: "-",
                result: Some(Token {
                    name: "",
                    value: None,
                }),
            },
            TestData {
                raw: "--",
                result: Some(Token {
                    name: "",
                    value: None,
                }),
            },
            TestData {
                raw: "-=x",
                result: Some(Token {
                    name: "",
                    value: Some("x"),
                }),
            },
            TestData {
                raw: "-foo",
                result: Some(Token {
                    name: "foo",
                    value: None,
                }),
            },
            TestData {
                raw: "--foo",
                result: Some(Token {
                    name: "foo",
                    value: None,
                }),
            },
            TestData {
                raw: "-foo=",
                result: Some(Token {
                    name: "foo",
                    value: Some(""),
                }),
            },
            TestData {
                raw: "--foo=bar",
                result: Some(Token {
                    name: "foo",
                    value: Some("bar"),
                }),
            },
            TestData {
                // Only the first '=' splits.
                raw: "-foo=a=b==c",
                result: Some(Token {
                    name: "foo",
                    value: Some("a=b==c"),
                }),
            },
            TestData {
                raw: "-foo=hello world",
                result: Some(Token {
                    name: "foo",
                    value: Some("hello world"),
                }),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = Token::parse(d.raw);

            assert_eq!(result, d.result, "{}", msg);
        }
    }

    #[test]
    fn test_token_negation() {
        #[derive(Debug)]
        struct TestData<'a> {
            raw: &'a str,
            negated_name: Option<&'a str>,
            double_negative: bool,
        }

        let tests = &[
            TestData {
                raw: "-foo",
                negated_name: None,
                double_negative: false,
            },
            TestData {
                raw: "-no",
                negated_name: None,
                double_negative: false,
            },
            TestData {
                raw: "-no=0",
                negated_name: None,
                double_negative: false,
            },
            TestData {
                raw: "-noise",
                negated_name: Some("ise"),
                double_negative: false,
            },
            TestData {
                raw: "-nonoise",
                negated_name: Some("noise"),
                double_negative: false,
            },
            TestData {
                raw: "--nonoise=1",
                negated_name: Some("noise"),
                double_negative: false,
            },
            TestData {
                raw: "-nonoise=0",
                negated_name: Some("noise"),
                double_negative: true,
            },
            TestData {
                raw: "-nonoise=00",
                negated_name: Some("noise"),
                double_negative: false,
            },
            TestData {
                raw: "-nonoise=",
                negated_name: Some("noise"),
                double_negative: false,
            },
            TestData {
                // Case sensitive.
                raw: "-NOnoise",
                negated_name: None,
                double_negative: false,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let token = Token::parse(d.raw).unwrap();

            assert_eq!(token.negated_name(), d.negated_name, "{}", msg);
            assert_eq!(token.is_double_negative(), d.double_negative, "{}", msg);
        }
    }

    #[test]
    fn test_token_display() {
        let tests = &[
            ("-foo", "-foo"),
            ("--foo", "-foo"),
            ("-foo=", "-foo="),
            ("--foo=bar", "-foo=bar"),
            ("-", "-"),
            ("-nofoo=0", "-nofoo=0"),
        ];

        for (i, (raw, display)) in tests.iter().enumerate() {
            let token = Token::parse(raw).unwrap();

            let value = format!("{}", token);

            let msg = format!("test[{}]: raw: {:?}, value: {:?}", i, raw, value);

            assert_eq!(value, *display, "{}", msg);
        }
    }
}
