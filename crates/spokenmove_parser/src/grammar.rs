//! Grammar rule definitions and compilation.
//!
//! A grammar is declared as a list of [`RuleDef`]s that reference each other
//! by name. [`GrammarCompiler`] resolves those names into rule indices, folds
//! the lexicon's aliases into every literal and character-class matcher, and
//! rejects grammars the engine could not run: undefined, duplicate or empty
//! rules, and left recursion.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Range, RangeInclusive};

use spokenmove_foundation::{Error, ErrorKind, Result};

use crate::lexicon::Lexicon;

/// A semantic action: turns the fragments matched by one alternative into
/// an output fragment.
pub type Action = fn(&Captures<'_>) -> Result<String>;

/// Action that concatenates every captured value in match order.
///
/// # Errors
///
/// Never fails; the signature matches [`Action`].
pub fn concat(captures: &Captures<'_>) -> Result<String> {
    Ok(captures.concat())
}

/// Action that contributes nothing to the output.
///
/// # Errors
///
/// Never fails; the signature matches [`Action`].
pub fn discard(_: &Captures<'_>) -> Result<String> {
    Ok(String::new())
}

// =============================================================================
// Matched fragments
// =============================================================================

/// The result of one successful matcher within an alternative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment<'i> {
    /// Byte span of the consumed input.
    pub span: Range<usize>,
    /// The consumed input, as written.
    pub text: &'i str,
    /// The semantic value: canonical token, class member, or rule output.
    pub value: String,
}

/// The fragments matched by an alternative, handed to its action.
#[derive(Clone, Debug, Default)]
pub struct Captures<'i> {
    fragments: Vec<Fragment<'i>>,
}

impl<'i> Captures<'i> {
    /// Wraps matched fragments.
    #[must_use]
    pub fn new(fragments: Vec<Fragment<'i>>) -> Self {
        Self { fragments }
    }

    /// Returns the fragment at a matcher position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Fragment<'i>> {
        self.fragments.get(index)
    }

    /// Returns the value at a matcher position, or `""` if out of range.
    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.fragments.get(index).map_or("", |f| f.value.as_str())
    }

    /// Concatenates all values in match order.
    #[must_use]
    pub fn concat(&self) -> String {
        self.fragments.iter().map(|f| f.value.as_str()).collect()
    }

    /// Returns the number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Iterates over the fragments in match order.
    pub fn iter(&self) -> impl Iterator<Item = &Fragment<'i>> {
        self.fragments.iter()
    }
}

// =============================================================================
// Definitions
// =============================================================================

/// A set of characters matched one at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharClass {
    /// Name used in diagnostics and traces
    pub name: String,
    /// Accepted character ranges (lowercase when case-insensitive)
    pub ranges: Vec<RangeInclusive<char>>,
    /// Whether input is lowercased before testing membership
    pub case_insensitive: bool,
}

impl CharClass {
    /// Creates a case-sensitive class over one range.
    #[must_use]
    pub fn range(name: impl Into<String>, range: RangeInclusive<char>) -> Self {
        Self {
            name: name.into(),
            ranges: vec![range],
            case_insensitive: false,
        }
    }

    /// The single space character.
    #[must_use]
    pub fn space() -> Self {
        Self::range("space", ' '..=' ')
    }

    /// Makes the class fold ASCII case.
    #[must_use]
    pub fn ignore_case(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Tests a character, returning the member it matches.
    #[must_use]
    pub fn accepts(&self, c: char) -> Option<char> {
        let c = if self.case_insensitive {
            c.to_ascii_lowercase()
        } else {
            c
        };
        self.ranges.iter().any(|r| r.contains(&c)).then_some(c)
    }

    /// Iterates over every member character in declaration order.
    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        self.ranges.iter().flat_map(Clone::clone)
    }
}

/// One step of an alternative, as declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    /// Literal text, matched case-insensitively; its aliases are accepted too.
    Literal(String),
    /// Exactly one member of a character class, or one of a member's aliases.
    Class(CharClass),
    /// Zero or more members of a character class.
    Repeat(CharClass),
    /// A reference to another rule by name.
    Rule(String),
}

impl Element {
    /// Creates a literal element. The text is stored lowercase.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self::Literal(text.to_lowercase())
    }

    /// Creates a rule reference.
    #[must_use]
    pub fn rule(name: &str) -> Self {
        Self::Rule(name.to_string())
    }
}

/// One alternative of a rule: a sequence of elements and the action fired
/// when all of them match.
#[derive(Clone, Debug)]
pub struct AlternativeDef {
    /// Elements, matched left to right
    pub elements: Vec<Element>,
    /// Output assembly for this alternative
    pub action: Action,
}

/// A named rule with ordered alternatives.
#[derive(Clone, Debug)]
pub struct RuleDef {
    /// Rule name
    pub name: String,
    /// Alternatives in precedence order
    pub alternatives: Vec<AlternativeDef>,
}

impl RuleDef {
    /// Creates a rule with no alternatives yet.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alternatives: Vec::new(),
        }
    }

    /// Appends an alternative. Earlier alternatives take precedence.
    #[must_use]
    pub fn alt(mut self, elements: impl IntoIterator<Item = Element>, action: Action) -> Self {
        self.alternatives.push(AlternativeDef {
            elements: elements.into_iter().collect(),
            action,
        });
        self
    }
}

/// A full grammar: rules plus the name of the rule that must match the
/// entire input.
#[derive(Clone, Debug)]
pub struct GrammarDef {
    /// Start rule name
    pub start: String,
    /// Rules in declaration order
    pub rules: Vec<RuleDef>,
}

impl GrammarDef {
    /// Creates an empty grammar with the given start rule.
    #[must_use]
    pub fn new(start: &str) -> Self {
        Self {
            start: start.to_string(),
            rules: Vec::new(),
        }
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule(mut self, rule: RuleDef) -> Self {
        self.rules.push(rule);
        self
    }
}

// =============================================================================
// Compiled form
// =============================================================================

/// Index of a rule within a [`CompiledGrammar`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleId(usize);

impl RuleId {
    /// Returns the index into the rule table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A matcher with rule references resolved and aliases expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompiledMatcher {
    /// Literal text. `forms` holds the aliases in declared order followed by
    /// the canonical text, all lowercase.
    Literal {
        /// The canonical token, reported as the matched value
        canonical: String,
        /// Surface forms, tried in order
        forms: Vec<String>,
    },
    /// One class member. Member aliases are tried before the member itself.
    Class {
        /// The character class
        class: CharClass,
        /// `(surface form, member)` pairs in member order, then declared order
        aliases: Vec<(String, char)>,
    },
    /// Zero or more class members.
    Repeat(CharClass),
    /// Another rule.
    Rule(RuleId),
}

impl CompiledMatcher {
    /// Returns true if this matcher can succeed without consuming input.
    fn nullable(&self, nullable_rules: &[bool]) -> bool {
        match self {
            Self::Literal { .. } | Self::Class { .. } => false,
            Self::Repeat(_) => true,
            Self::Rule(id) => nullable_rules[id.0],
        }
    }
}

/// A compiled alternative.
#[derive(Clone, Debug)]
pub struct CompiledAlternative {
    /// Matchers, in order
    pub matchers: Vec<CompiledMatcher>,
    /// Output assembly
    pub action: Action,
}

/// A compiled rule.
#[derive(Clone, Debug)]
pub struct CompiledRule {
    /// Rule name
    pub name: String,
    /// Alternatives in precedence order
    pub alternatives: Vec<CompiledAlternative>,
}

/// An immutable, indexed grammar ready for matching.
///
/// Holds no per-parse state; one instance can serve any number of parses,
/// from any number of threads.
#[derive(Clone, Debug)]
pub struct CompiledGrammar {
    rules: Vec<CompiledRule>,
    index: HashMap<String, RuleId>,
    start: RuleId,
}

impl CompiledGrammar {
    /// Returns the start rule.
    #[must_use]
    pub fn start(&self) -> RuleId {
        self.start
    }

    /// Returns a rule by id.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> &CompiledRule {
        &self.rules[id.0]
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn rule_id(&self, name: &str) -> Option<RuleId> {
        self.index.get(name).copied()
    }

    /// Iterates over all rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    /// Describes what a matcher expects, for diagnostics.
    #[must_use]
    pub fn describe(&self, matcher: &CompiledMatcher) -> String {
        match matcher {
            CompiledMatcher::Literal { canonical, .. } => format!("{canonical:?}"),
            CompiledMatcher::Class { class, .. } | CompiledMatcher::Repeat(class) => {
                class.name.clone()
            }
            CompiledMatcher::Rule(id) => self.rules[id.0].name.clone(),
        }
    }
}

impl fmt::Display for CompiledGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule.name)?;
            for (n, alt) in rule.alternatives.iter().enumerate() {
                let sep = if n == 0 { '=' } else { '/' };
                let parts: Vec<_> = alt.matchers.iter().map(|m| self.describe(m)).collect();
                writeln!(f, "    {sep} {}", parts.join(" "))?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Compiler
// =============================================================================

/// Compiles [`GrammarDef`]s against a lexicon.
pub struct GrammarCompiler;

impl GrammarCompiler {
    /// Compiles a grammar, folding the lexicon's aliases into its matchers.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRule`, `UndefinedRule`, `EmptyRule` or
    /// `LeftRecursion` when the definition cannot be run.
    pub fn compile(def: &GrammarDef, lexicon: &Lexicon) -> Result<CompiledGrammar> {
        let mut index = HashMap::with_capacity(def.rules.len());
        for (i, rule) in def.rules.iter().enumerate() {
            if index.insert(rule.name.clone(), RuleId(i)).is_some() {
                return Err(Error::new(ErrorKind::DuplicateRule(rule.name.clone())));
            }
        }

        let rules = def
            .rules
            .iter()
            .map(|rule| Self::compile_rule(rule, &index, lexicon))
            .collect::<Result<Vec<_>>>()?;

        let start = index
            .get(&def.start)
            .copied()
            .ok_or_else(|| Error::undefined_rule(def.start.clone()))?;

        check_left_recursion(&rules)?;

        Ok(CompiledGrammar {
            rules,
            index,
            start,
        })
    }

    fn compile_rule(
        rule: &RuleDef,
        index: &HashMap<String, RuleId>,
        lexicon: &Lexicon,
    ) -> Result<CompiledRule> {
        if rule.alternatives.is_empty() {
            return Err(Error::new(ErrorKind::EmptyRule(rule.name.clone())));
        }

        let mut alternatives = Vec::with_capacity(rule.alternatives.len());
        for alt in &rule.alternatives {
            if alt.elements.is_empty() {
                return Err(Error::new(ErrorKind::EmptyRule(rule.name.clone())));
            }
            let matchers = alt
                .elements
                .iter()
                .map(|element| Self::compile_element(&rule.name, element, index, lexicon))
                .collect::<Result<Vec<_>>>()?;
            alternatives.push(CompiledAlternative {
                matchers,
                action: alt.action,
            });
        }

        Ok(CompiledRule {
            name: rule.name.clone(),
            alternatives,
        })
    }

    fn compile_element(
        rule: &str,
        element: &Element,
        index: &HashMap<String, RuleId>,
        lexicon: &Lexicon,
    ) -> Result<CompiledMatcher> {
        match element {
            Element::Literal(text) => {
                if text.is_empty() {
                    return Err(Error::new(ErrorKind::EmptyRule(format!(
                        "{rule}: empty literal"
                    ))));
                }
                let canonical = text.to_lowercase();
                let mut forms: Vec<String> = lexicon.aliases(&canonical).to_vec();
                forms.push(canonical.clone());
                Ok(CompiledMatcher::Literal { canonical, forms })
            }
            Element::Class(class) | Element::Repeat(class) => {
                if class.members().next().is_none() {
                    return Err(Error::new(ErrorKind::EmptyRule(format!(
                        "{rule}: empty class {}",
                        class.name
                    ))));
                }
                if let Element::Repeat(_) = element {
                    return Ok(CompiledMatcher::Repeat(class.clone()));
                }
                let aliases = class
                    .members()
                    .flat_map(|member| {
                        lexicon
                            .aliases(&member.to_string())
                            .iter()
                            .map(move |alias| (alias.clone(), member))
                            .collect::<Vec<_>>()
                    })
                    .collect();
                Ok(CompiledMatcher::Class {
                    class: class.clone(),
                    aliases,
                })
            }
            Element::Rule(name) => index
                .get(name)
                .copied()
                .map(CompiledMatcher::Rule)
                .ok_or_else(|| Error::undefined_rule(name.clone())),
        }
    }
}

/// Computes which rules can match the empty string.
fn nullable_rules(rules: &[CompiledRule]) -> Vec<bool> {
    let mut nullable = vec![false; rules.len()];
    loop {
        let mut changed = false;
        for (i, rule) in rules.iter().enumerate() {
            if nullable[i] {
                continue;
            }
            let any_empty = rule
                .alternatives
                .iter()
                .any(|alt| alt.matchers.iter().all(|m| m.nullable(&nullable)));
            if any_empty {
                nullable[i] = true;
                changed = true;
            }
        }
        if !changed {
            return nullable;
        }
    }
}

/// Rejects rules that can re-enter themselves before consuming input.
fn check_left_recursion(rules: &[CompiledRule]) -> Result<()> {
    #[derive(Copy, Clone, PartialEq, Eq)]
    enum Mark {
        Unvisited,
        Active,
        Done,
    }

    fn visit(node: usize, edges: &[Vec<usize>], marks: &mut [Mark]) -> Option<usize> {
        match marks[node] {
            Mark::Active => return Some(node),
            Mark::Done => return None,
            Mark::Unvisited => {}
        }
        marks[node] = Mark::Active;
        for &next in &edges[node] {
            if let Some(cycle) = visit(next, edges, marks) {
                return Some(cycle);
            }
        }
        marks[node] = Mark::Done;
        None
    }

    let nullable = nullable_rules(rules);

    // Edges to every rule reachable at the same cursor position.
    let edges: Vec<Vec<usize>> = rules
        .iter()
        .map(|rule| {
            let mut targets = Vec::new();
            for alt in &rule.alternatives {
                for matcher in &alt.matchers {
                    if let CompiledMatcher::Rule(id) = matcher {
                        targets.push(id.0);
                    }
                    if !matcher.nullable(&nullable) {
                        break;
                    }
                }
            }
            targets
        })
        .collect();

    let mut marks = vec![Mark::Unvisited; rules.len()];
    for node in 0..rules.len() {
        if let Some(cycle) = visit(node, &edges, &mut marks) {
            return Err(Error::new(ErrorKind::LeftRecursion(
                rules[cycle].name.clone(),
            )));
        }
    }
    Ok(())
}
