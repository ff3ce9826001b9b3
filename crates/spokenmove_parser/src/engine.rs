//! Anchored ordered-choice matching.
//!
//! The engine walks a [`CompiledGrammar`] from its start rule. Alternatives are
//! tried in declaration order and the first one whose matchers all succeed
//! wins; a failing matcher unwinds the cursor to where the alternative began.
//! A rule invocation yields at most one result, so nothing outside a rule can
//! ask it to try again.
//!
//! All per-parse state lives in a private `Matcher` on the stack. The grammar
//! is only read.

use std::collections::BTreeSet;
use std::ops::Range;

use spokenmove_foundation::{Error, ErrorContext, Result};

use crate::grammar::{Captures, CompiledGrammar, CompiledMatcher, Fragment, RuleId};

/// Receives parse events as they happen.
///
/// Every method has an empty default so observers implement only what they
/// need. Observers cannot change the outcome of a parse.
#[allow(unused_variables)]
pub trait ParseObserver {
    /// A parse is about to begin.
    fn parse_start(&mut self, input: &str) {}

    /// A rule is being tried at `offset`.
    fn rule_enter(&mut self, rule: &str, depth: usize, offset: usize) {}

    /// A rule matched through `alternative`, consuming `span`.
    fn rule_match(
        &mut self,
        rule: &str,
        depth: usize,
        alternative: usize,
        span: Range<usize>,
        output: &str,
    ) {
    }

    /// No alternative of a rule matched at `offset`.
    fn rule_fail(&mut self, rule: &str, depth: usize, offset: usize) {}

    /// A semantic action rejected its fragments. The parse stops here.
    fn action_error(&mut self, rule: &str, depth: usize, error: &Error) {}

    /// The start rule matched but left input unconsumed.
    fn residual_input(&mut self, offset: usize, rest: &str) {}

    /// The parse finished.
    fn parse_end(&mut self, input: &str, result: std::result::Result<&str, &Error>) {}
}

/// An observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}

impl CompiledGrammar {
    /// Matches the start rule against the whole of `input`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` when no alternative of the start rule consumes
    /// the entire input, or the error of the first semantic action that fails.
    pub fn parse(&self, input: &str) -> Result<String> {
        self.parse_observed(input, &mut NoopObserver)
    }

    /// Like [`CompiledGrammar::parse`], reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`CompiledGrammar::parse`].
    pub fn parse_observed(&self, input: &str, observer: &mut dyn ParseObserver) -> Result<String> {
        observer.parse_start(input);
        let result = Matcher::new(self, input, &mut *observer).run();
        match &result {
            Ok(output) => observer.parse_end(input, Ok(output)),
            Err(err) => observer.parse_end(input, Err(err)),
        }
        result
    }
}

/// Per-parse matching state.
struct Matcher<'g, 'i, 'o> {
    grammar: &'g CompiledGrammar,
    input: &'i str,
    observer: &'o mut dyn ParseObserver,
    /// Furthest offset at which a matcher failed
    furthest: usize,
    /// What would have been accepted at `furthest`
    expected: BTreeSet<String>,
}

impl<'g, 'i, 'o> Matcher<'g, 'i, 'o> {
    fn new(
        grammar: &'g CompiledGrammar,
        input: &'i str,
        observer: &'o mut dyn ParseObserver,
    ) -> Self {
        Self {
            grammar,
            input,
            observer,
            furthest: 0,
            expected: BTreeSet::new(),
        }
    }

    fn run(mut self) -> Result<String> {
        let Some(fragment) = self.match_rule(self.grammar.start(), 0, 0)? else {
            return Err(self.into_parse_error());
        };

        let end = fragment.span.end;
        if end < self.input.len() {
            self.observer.residual_input(end, &self.input[end..]);
            self.fail(end, "end of input".to_string());
            return Err(self.into_parse_error());
        }

        Ok(fragment.value)
    }

    fn into_parse_error(self) -> Error {
        Error::parse_error(
            self.input,
            self.furthest,
            self.expected.into_iter().collect(),
        )
    }

    fn match_rule(&mut self, id: RuleId, pos: usize, depth: usize) -> Result<Option<Fragment<'i>>> {
        let grammar = self.grammar;
        let rule = grammar.rule(id);
        self.observer.rule_enter(&rule.name, depth, pos);

        'alternatives: for (n, alt) in rule.alternatives.iter().enumerate() {
            let mut cursor = pos;
            let mut fragments = Vec::with_capacity(alt.matchers.len());

            for matcher in &alt.matchers {
                let matched = self
                    .match_one(matcher, cursor, depth)
                    .map_err(|err| push_frame(err, &rule.name))?;
                match matched {
                    Some(fragment) => {
                        cursor = fragment.span.end;
                        fragments.push(fragment);
                    }
                    None => continue 'alternatives,
                }
            }

            let value = match (alt.action)(&Captures::new(fragments)) {
                Ok(value) => value,
                Err(err) => {
                    self.observer.action_error(&rule.name, depth, &err);
                    let context = ErrorContext::new()
                        .with_source(rule.name.clone())
                        .with_column(pos);
                    return Err(err.with_context(context));
                }
            };

            self.observer
                .rule_match(&rule.name, depth, n, pos..cursor, &value);
            return Ok(Some(Fragment {
                span: pos..cursor,
                text: &self.input[pos..cursor],
                value,
            }));
        }

        self.observer.rule_fail(&rule.name, depth, pos);
        Ok(None)
    }

    fn match_one(
        &mut self,
        matcher: &CompiledMatcher,
        pos: usize,
        depth: usize,
    ) -> Result<Option<Fragment<'i>>> {
        let matched = match matcher {
            CompiledMatcher::Rule(id) => return self.match_rule(*id, pos, depth + 1),
            CompiledMatcher::Literal { canonical, forms } => forms
                .iter()
                .find_map(|form| self.match_text(pos, form))
                .map(|end| (end, canonical.clone())),
            CompiledMatcher::Class { class, aliases } => aliases
                .iter()
                .find_map(|(form, member)| self.match_text(pos, form).map(|end| (end, *member)))
                .or_else(|| {
                    let c = self.input[pos..].chars().next()?;
                    class.accepts(c).map(|member| (pos + c.len_utf8(), member))
                })
                .map(|(end, member)| (end, member.to_string())),
            CompiledMatcher::Repeat(class) => {
                let mut end = pos;
                let mut value = String::new();
                for c in self.input[pos..].chars() {
                    let Some(member) = class.accepts(c) else {
                        break;
                    };
                    end += c.len_utf8();
                    value.push(member);
                }
                Some((end, value))
            }
        };

        match matched {
            Some((end, value)) => Ok(Some(Fragment {
                span: pos..end,
                text: &self.input[pos..end],
                value,
            })),
            None => {
                let expected = self.grammar.describe(matcher);
                self.fail(pos, expected);
                Ok(None)
            }
        }
    }

    /// Compares `form` against the input at `pos` char by char, folding case
    /// the way the lexicon normalizes it.
    fn match_text(&self, pos: usize, form: &str) -> Option<usize> {
        let mut rest = self.input.get(pos..)?.char_indices();
        for expected in form.chars() {
            let (_, c) = rest.next()?;
            if !c.to_lowercase().eq(expected.to_lowercase()) {
                return None;
            }
        }
        Some(rest.next().map_or(self.input.len(), |(i, _)| pos + i))
    }

    fn fail(&mut self, pos: usize, expected: String) {
        if pos > self.furthest {
            self.furthest = pos;
            self.expected.clear();
        }
        if pos == self.furthest {
            self.expected.insert(expected);
        }
    }
}

/// Records an enclosing rule on an error travelling up the rule stack.
fn push_frame(mut err: Error, rule: &str) -> Error {
    let context = err.context.take().unwrap_or_default().with_frame(rule);
    err.with_context(context)
}
