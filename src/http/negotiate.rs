//! Accept header negotiation between the HTML landing page and JSON.
//!
//! Each candidate type is matched against the media ranges in the header,
//! preferring the most specific range (`text/html` beats `text/*` beats
//! `*/*`). Candidates are then ranked by weight, specificity, and position of
//! their range in the header. HTML is listed first on the server side, so it
//! wins any remaining tie. A missing header accepts everything.

use std::cmp::Ordering;

/// The response representation chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Html,
    Json,
}

/// Choose between HTML and JSON for the given `Accept` header value.
///
/// `html_available` is false when no landing template is loaded, in which case
/// the answer is always JSON. A header that accepts neither type also gets JSON.
pub fn negotiate(accept: Option<&str>, html_available: bool) -> Representation {
    if !html_available {
        return Representation::Json;
    }
    let accept = accept.unwrap_or("*/*");

    let ranges: Vec<MediaRange<'_>> = accept
        .split(',')
        .filter_map(MediaRange::parse)
        .collect();
    let html = best_match(&ranges, "text", "html");
    let json = best_match(&ranges, "application", "json");

    match (html, json) {
        (Some(html), Some(json)) if rank(&html, &json) == Ordering::Less => Representation::Json,
        (Some(_), _) => Representation::Html,
        (None, _) => Representation::Json,
    }
}

#[derive(Debug)]
struct MediaRange<'a> {
    kind: &'a str,
    subtype: &'a str,
    q: f32,
}

impl<'a> MediaRange<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.split(';');
        let (kind, subtype) = parts.next()?.trim().split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        let q = parts
            .filter_map(|param| param.split_once('='))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
            .and_then(|(_, value)| value.trim().parse::<f32>().ok())
            .filter(|q| q.is_finite())
            .map_or(1.0, |q| q.clamp(0.0, 1.0));

        Some(Self { kind, subtype, q })
    }

    /// Match specificity against a concrete type, or `None` if it doesn't match.
    fn specificity(&self, kind: &str, subtype: &str) -> Option<u8> {
        let kind_matches = self.kind.eq_ignore_ascii_case(kind);
        let subtype_matches = self.subtype.eq_ignore_ascii_case(subtype);
        match (self.kind, self.subtype) {
            _ if kind_matches && subtype_matches => Some(2),
            (_, "*") if kind_matches => Some(1),
            ("*", "*") => Some(0),
            _ => None,
        }
    }
}

/// How a candidate type matched the header.
#[derive(Debug, Clone, Copy)]
struct Match {
    q: f32,
    specificity: u8,
    /// Position of the matching range in the header
    order: usize,
}

/// The range that decides a candidate's weight: most specific first, then the
/// highest weight, then the later range. Unacceptable (`q=0`) results are dropped.
fn best_match(ranges: &[MediaRange<'_>], kind: &str, subtype: &str) -> Option<Match> {
    ranges
        .iter()
        .enumerate()
        .filter_map(|(order, range)| {
            range.specificity(kind, subtype).map(|specificity| Match {
                q: range.q,
                specificity,
                order,
            })
        })
        .max_by(|a, b| {
            a.specificity
                .cmp(&b.specificity)
                .then(a.q.total_cmp(&b.q))
                .then(a.order.cmp(&b.order))
        })
        .filter(|m| m.q > 0.0)
}

/// `Greater` when `a` ranks ahead of `b`: higher weight, then more specific,
/// then earlier in the header.
fn rank(a: &Match, b: &Match) -> Ordering {
    a.q.total_cmp(&b.q)
        .then(a.specificity.cmp(&b.specificity))
        .then(b.order.cmp(&a.order))
}
