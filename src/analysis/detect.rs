//! Two-phase message kind detection.
//!
//! Phase A matches rules against the flattened field paths; Phase B
//! matches the same semantic rule order against string values. Both
//! phases are ordered `(matcher, kind)` tables so precedence stays
//! auditable and each rule is independently testable.
//!
//! Phase B always runs and its match overrides Phase A's. That
//! precedence is observed gateway behavior and load-bearing — changing
//! it changes classification outcomes on real traffic.

use serde_json::Value;
use tracing::debug;

use crate::analysis::types::MessageKind;

/// How a rule matches against a set of lower-cased haystack strings.
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Any haystack contains any listed substring.
    Contains(&'static [&'static str]),
    /// Any haystack's final path segment equals a listed word exactly.
    LastSegment(&'static [&'static str]),
    /// Every listed substring appears in some (possibly different) haystack.
    ContainsAll(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, haystacks: &[String]) -> bool {
        match self {
            Self::Contains(needles) => haystacks
                .iter()
                .any(|h| needles.iter().any(|n| h.contains(n))),
            Self::LastSegment(words) => haystacks
                .iter()
                .any(|h| words.contains(&last_segment(h))),
            Self::ContainsAll(needles) => needles
                .iter()
                .all(|n| haystacks.iter().any(|h| h.contains(n))),
        }
    }
}

/// One priority-ordered detection rule.
#[derive(Debug, Clone, Copy)]
struct Rule {
    kind: MessageKind,
    matcher: Matcher,
}

/// Phase A: field-name rules, highest priority first.
static FIELD_RULES: &[Rule] = &[
    Rule { kind: MessageKind::Sticker, matcher: Matcher::Contains(&["sticker"]) },
    Rule { kind: MessageKind::Reaction, matcher: Matcher::Contains(&["reaction"]) },
    Rule { kind: MessageKind::Template, matcher: Matcher::LastSegment(&["template", "components", "language"]) },
    Rule { kind: MessageKind::Buttons, matcher: Matcher::Contains(&["buttons"]) },
    Rule { kind: MessageKind::List, matcher: Matcher::Contains(&["sections", "buttontext"]) },
    Rule { kind: MessageKind::Location, matcher: Matcher::ContainsAll(&["latitude", "longitude"]) },
    Rule { kind: MessageKind::Contact, matcher: Matcher::Contains(&["contact", "wuid"]) },
    Rule { kind: MessageKind::Poll, matcher: Matcher::Contains(&["selectablecount"]) },
    Rule { kind: MessageKind::Status, matcher: Matcher::LastSegment(&["statusjidlist", "allcontacts"]) },
    Rule { kind: MessageKind::Ptv, matcher: Matcher::Contains(&["video"]) },
    Rule { kind: MessageKind::Audio, matcher: Matcher::Contains(&["audio"]) },
    Rule { kind: MessageKind::Media, matcher: Matcher::LastSegment(&["media", "mediatype", "mimetype"]) },
    Rule { kind: MessageKind::Text, matcher: Matcher::LastSegment(&["text"]) },
];

/// Phase B: content rules, same semantic order as Phase A. Marker sets
/// use singular word forms so free text matches ("tap the button below").
static CONTENT_RULES: &[Rule] = &[
    Rule { kind: MessageKind::Sticker, matcher: Matcher::Contains(&["sticker"]) },
    Rule { kind: MessageKind::Reaction, matcher: Matcher::Contains(&["reaction"]) },
    Rule { kind: MessageKind::Template, matcher: Matcher::Contains(&["template"]) },
    Rule { kind: MessageKind::Buttons, matcher: Matcher::Contains(&["button"]) },
    Rule { kind: MessageKind::List, matcher: Matcher::Contains(&["buttontext", "section"]) },
    Rule { kind: MessageKind::Location, matcher: Matcher::ContainsAll(&["latitude", "longitude"]) },
    Rule { kind: MessageKind::Contact, matcher: Matcher::Contains(&["contact", "wuid"]) },
    Rule { kind: MessageKind::Poll, matcher: Matcher::Contains(&["selectablecount"]) },
    Rule { kind: MessageKind::Status, matcher: Matcher::Contains(&["statusjidlist", "allcontacts"]) },
    Rule { kind: MessageKind::Ptv, matcher: Matcher::Contains(&["ptv"]) },
    Rule { kind: MessageKind::Audio, matcher: Matcher::Contains(&["audio"]) },
    Rule { kind: MessageKind::Media, matcher: Matcher::Contains(&["mediatype", "mimetype"]) },
    Rule { kind: MessageKind::Text, matcher: Matcher::Contains(&["text"]) },
];

/// Detect the message kind from flattened field paths and values.
///
/// Pure function; returns `MessageKind::Unknown` when no rule in either
/// phase matches.
pub fn detect(field_names: &[String], values: &[Value]) -> MessageKind {
    let paths: Vec<String> = field_names.iter().map(|p| p.to_lowercase()).collect();
    let field_match = first_match(FIELD_RULES, &paths);

    let contents: Vec<String> = values
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_lowercase)
        .collect();
    let content_match = first_match(CONTENT_RULES, &contents);

    if let (Some(content), Some(field)) = (content_match, field_match)
        && content != field
    {
        debug!(
            content = content.label(),
            field = field.label(),
            "Content rule overrides field-name rule"
        );
    }

    content_match.or(field_match).unwrap_or(MessageKind::Unknown)
}

fn first_match(rules: &[Rule], haystacks: &[String]) -> Option<MessageKind> {
    if haystacks.is_empty() {
        return None;
    }
    rules
        .iter()
        .find(|rule| rule.matcher.matches(haystacks))
        .map(|rule| rule.kind)
}

/// Final segment of a dotted path, with any bracketed index stripped:
/// `a.b[2].c` → `c`, `buttons[0]` → `buttons`.
fn last_segment(path: &str) -> &str {
    let segment = path.rsplit('.').next().unwrap_or(path);
    match segment.find('[') {
        Some(bracket) => &segment[..bracket],
        None => segment,
    }
}
