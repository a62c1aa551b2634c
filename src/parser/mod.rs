//! Grammar-driven reader for ISO 8601 durations
//!
//! The duration grammar is a fixed, ordered sequence of token
//! specifications, walked over the input exactly once, left to right. Each
//! position names the designator it expects, which is how the month/minute
//! ambiguity of `M` is resolved: the `M` slot before the time separator
//! means months, the one after it means minutes.
//!
//! A failed *optional* spec consumes nothing and substitutes its default
//! token. A failed *required* spec truncates the walk: the tokens gathered
//! so far are the whole stream, and every later field keeps its zero
//! default. Truncation is an explicit outcome here, distinct from failure;
//! a missing time separator simply yields a duration with no time portion.

mod error;
mod token;

pub use error::{ParseError, ParseResult};
pub use token::{Sign, SpannedToken, Token};

use crate::duration::{Duration, RawDuration};
use crate::lexer::{Designator, Scanner};
use crate::Span;
use rust_decimal::Decimal;

/// What a grammar position asks the scanner for
#[derive(Debug, Clone, Copy)]
enum UnitParser {
    /// The leading `+`/`-`
    Sign,
    /// A bare structural designator
    Bare(Designator),
    /// An integer count terminated by a designator
    Integer(Designator, fn(u64) -> Token),
    /// A decimal value terminated by a designator
    Decimal(Designator, fn(Decimal) -> Token),
}

/// What happens when a grammar position fails to match
#[derive(Debug, Clone, Copy)]
enum Fallback {
    /// Abandon the rest of the grammar; tokens so far are the whole stream
    Truncate,
    /// Substitute this token and continue without consuming input
    Default(Token),
}

/// One position in the duration grammar
#[derive(Debug, Clone, Copy)]
struct TokenSpec {
    parser: UnitParser,
    fallback: Fallback,
}

/// The duration grammar, one spec per position
///
/// `MonthOrMinute` appears twice; its meaning is fixed by the slot.
const GRAMMAR: [TokenSpec; 10] = [
    TokenSpec {
        parser: UnitParser::Sign,
        fallback: Fallback::Default(Token::Sign(Sign::Positive)),
    },
    TokenSpec {
        parser: UnitParser::Bare(Designator::DurationStart),
        fallback: Fallback::Truncate,
    },
    TokenSpec {
        parser: UnitParser::Integer(Designator::Year, Token::Years),
        fallback: Fallback::Default(Token::Years(0)),
    },
    TokenSpec {
        parser: UnitParser::Integer(Designator::MonthOrMinute, Token::Months),
        fallback: Fallback::Default(Token::Months(0)),
    },
    TokenSpec {
        parser: UnitParser::Integer(Designator::Week, Token::Weeks),
        fallback: Fallback::Default(Token::Weeks(0)),
    },
    TokenSpec {
        parser: UnitParser::Integer(Designator::Day, Token::Days),
        fallback: Fallback::Default(Token::Days(0)),
    },
    TokenSpec {
        parser: UnitParser::Bare(Designator::TimeSeparator),
        fallback: Fallback::Truncate,
    },
    TokenSpec {
        parser: UnitParser::Decimal(Designator::Hour, Token::Hours),
        fallback: Fallback::Default(Token::Hours(Decimal::ZERO)),
    },
    TokenSpec {
        parser: UnitParser::Decimal(Designator::MonthOrMinute, Token::Minutes),
        fallback: Fallback::Default(Token::Minutes(Decimal::ZERO)),
    },
    TokenSpec {
        parser: UnitParser::Decimal(Designator::Second, Token::Seconds),
        fallback: Fallback::Default(Token::Seconds(Decimal::ZERO)),
    },
];

/// Outcome of resolving a single grammar position
#[derive(Debug)]
enum StepOutcome {
    /// The position matched real input
    Matched(SpannedToken),
    /// An optional position failed; its default stands in
    Defaulted(SpannedToken),
    /// A required position failed; the rest of the grammar is abandoned
    Truncated,
}

/// Token stream produced by walking the grammar
#[derive(Debug, Default)]
struct TokenStream {
    tokens: Vec<SpannedToken>,
    /// Unit values textually present in the input (not defaulted)
    matched_units: usize,
    /// Time unit values textually present
    matched_time_units: usize,
    /// Span of the time separator, if one was matched
    time_separator: Option<Span>,
}

/// Parser for ISO 8601 durations
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    /// Total input length, for trailing-input spans
    len: usize,
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given source
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            scanner: Scanner::new(source),
            len: source.len(),
        }
    }

    /// Parse a complete duration
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid ISO 8601 duration: the
    /// grammar leaves input unconsumed, no unit is specified, a time
    /// separator has no time units after it, or normalization rejects the
    /// fraction layout.
    pub fn parse(&mut self) -> ParseResult<Duration> {
        let stream = self.read_tokens();

        if !self.scanner.is_at_end() {
            return Err(ParseError::TrailingInput {
                span: Span::new(self.scanner.pos(), self.len),
            });
        }
        if let Some(span) = stream.time_separator {
            if stream.matched_time_units == 0 {
                return Err(ParseError::EmptyTime { span });
            }
        }
        if stream.matched_units == 0 {
            return Err(ParseError::NoUnits {
                span: Span::new(0, self.len),
            });
        }

        RawDuration::from_tokens(&stream.tokens).normalize()
    }

    /// Walk the grammar once, producing the token stream
    ///
    /// Never backtracks: once a position is resolved (matched, defaulted, or
    /// truncating) the walk moves strictly forward.
    fn read_tokens(&mut self) -> TokenStream {
        let mut stream = TokenStream::default();
        for spec in &GRAMMAR {
            match self.step(spec) {
                StepOutcome::Matched(spanned) => {
                    if spanned.token.is_unit_value() {
                        stream.matched_units += 1;
                        if spanned.token.is_time_unit() {
                            stream.matched_time_units += 1;
                        }
                    }
                    if matches!(
                        spanned.token,
                        Token::Designator(Designator::TimeSeparator)
                    ) {
                        stream.time_separator = Some(spanned.span);
                    }
                    stream.tokens.push(spanned);
                }
                StepOutcome::Defaulted(spanned) => stream.tokens.push(spanned),
                StepOutcome::Truncated => break,
            }
        }
        stream
    }

    fn step(&mut self, spec: &TokenSpec) -> StepOutcome {
        let start = self.scanner.pos();
        let token = match spec.parser {
            UnitParser::Sign => self.scanner.read_sign().map(|byte| {
                Token::Sign(if byte == b'-' {
                    Sign::Negative
                } else {
                    Sign::Positive
                })
            }),
            UnitParser::Bare(designator) => self
                .scanner
                .match_designator(designator)
                .then_some(Token::Designator(designator)),
            UnitParser::Integer(designator, build) => {
                self.scanner.read_integer(designator).map(build)
            }
            UnitParser::Decimal(designator, build) => {
                self.scanner.read_decimal(designator).map(build)
            }
        };

        match (token, spec.fallback) {
            (Some(token), _) => StepOutcome::Matched(SpannedToken::new(
                token,
                Span::new(start, self.scanner.pos()),
            )),
            (None, Fallback::Default(default)) => {
                StepOutcome::Defaulted(SpannedToken::new(default, Span::default()))
            }
            (None, Fallback::Truncate) => StepOutcome::Truncated,
        }
    }
}
