//! Term comparison with SPARQL semantics.
//!
//! `ORDER BY` places unbound values first, then blank nodes, IRIs and
//! literals. Literals compare by value when both belong to the same value
//! space (numbers, strings, booleans, date-times, dates); other pairs fall
//! back to comparing lexical form, datatype IRI and language tag in turn.
//!
//! A date-time without a timezone is only ordered against one with a
//! timezone when they are more than 14 hours apart. Closer pairs are
//! indeterminate, which makes filter comparisons fail.

use crate::core::{Literal, Term};
use crate::model::vocab::{rdf, xsd};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// Total order used by `ORDER BY`
pub fn order_terms(left: Option<&Term>, right: Option<&Term>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => match (left, right) {
            (Term::BlankNode(a), Term::BlankNode(b)) => a.cmp(b),
            (Term::BlankNode(_), _) => Ordering::Less,
            (_, Term::BlankNode(_)) => Ordering::Greater,
            (Term::NamedNode(a), Term::NamedNode(b)) => a.cmp(b),
            (Term::NamedNode(_), Term::Literal(_)) => Ordering::Less,
            (Term::Literal(_), Term::NamedNode(_)) => Ordering::Greater,
            (Term::Literal(a), Term::Literal(b)) => {
                compare_literals(a, b).unwrap_or_else(|| lexical_key(a).cmp(&lexical_key(b)))
            }
        },
    }
}

/// Value comparison of two literals; `None` when they are not comparable
pub fn compare_literals(left: &Literal, right: &Literal) -> Option<Ordering> {
    let (left_type, right_type) = (left.datatype(), right.datatype());

    if xsd::NUMERIC.contains(&left_type) && xsd::NUMERIC.contains(&right_type) {
        return compare_numbers(left.value(), right.value());
    }
    if left_type == xsd::STRING && right_type == xsd::STRING {
        return Some(left.value().cmp(right.value()));
    }
    if left_type == rdf::LANG_STRING && right_type == rdf::LANG_STRING {
        return (left.language() == right.language()).then(|| left.value().cmp(right.value()));
    }
    if left_type == xsd::BOOLEAN && right_type == xsd::BOOLEAN {
        return Some(parse_boolean(left.value())?.cmp(&parse_boolean(right.value())?));
    }
    if left_type == xsd::DATE_TIME && right_type == xsd::DATE_TIME {
        return Timestamp::parse_date_time(left.value())?.compare(&Timestamp::parse_date_time(right.value())?);
    }
    if left_type == xsd::DATE && right_type == xsd::DATE {
        return Timestamp::parse_date(left.value())?.compare(&Timestamp::parse_date(right.value())?);
    }
    None
}

fn lexical_key(literal: &Literal) -> (&str, &str, Option<&str>) {
    (literal.value(), literal.datatype(), literal.language())
}

/// A point on the `xsd:dateTime` timeline.
///
/// Zoned values hold their UTC instant. Local values hold the wall-clock
/// time as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timestamp {
    instant: NaiveDateTime,
    zoned: bool,
}

impl Timestamp {
    const MAX_OFFSET_HOURS: i64 = 14;

    fn parse_date_time(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
            return Some(Self { instant: instant.naive_utc(), zoned: true });
        }
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|instant| Self { instant, zoned: false })
    }

    /// `YYYY-MM-DD` with an optional `Z` or `±HH:MM` suffix, at midnight
    fn parse_date(value: &str) -> Option<Self> {
        let value = value.trim();
        let (date, zone) = (value.get(..10)?, value.get(10..)?);
        let midnight = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)?;
        if zone.is_empty() {
            return Some(Self { instant: midnight, zoned: false });
        }
        let offset = parse_offset(zone)?;
        Some(Self { instant: midnight.checked_sub_signed(Duration::seconds(offset))?, zoned: true })
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self.zoned, other.zoned) {
            (true, false) => Self::zoned_against_local(self.instant, other.instant),
            (false, true) => Self::zoned_against_local(other.instant, self.instant).map(Ordering::reverse),
            _ => Some(self.instant.cmp(&other.instant)),
        }
    }

    /// A local time may carry any offset within ±14:00
    fn zoned_against_local(zoned: NaiveDateTime, local: NaiveDateTime) -> Option<Ordering> {
        let window = Duration::hours(Self::MAX_OFFSET_HOURS);
        if zoned < local.checked_sub_signed(window)? {
            Some(Ordering::Less)
        } else if zoned > local.checked_add_signed(window)? {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

/// Seconds east of UTC for `Z` or `±HH:MM`
fn parse_offset(zone: &str) -> Option<i64> {
    if zone == "Z" {
        return Some(0);
    }
    let sign = match zone.get(..1)? {
        "+" => 1,
        "-" => -1,
        _ => return None,
    };
    let (hours, minutes) = zone.get(1..)?.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let (hours, minutes) = (hours.parse::<i64>().ok()?, minutes.parse::<i64>().ok()?);
    if minutes >= 60 || hours * 60 + minutes > Timestamp::MAX_OFFSET_HOURS * 60 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

/// Value comparison of two terms as used by filter operators
pub fn compare_values(left: &Term, right: &Term) -> Option<Ordering> {
    match (left, right) {
        (Term::Literal(left), Term::Literal(right)) => compare_literals(left, right),
        _ => None,
    }
}

/// SPARQL `=`: `None` when equality cannot be decided
pub fn equal_values(left: &Term, right: &Term) -> Option<bool> {
    if left == right {
        return Some(true);
    }
    match (left, right) {
        (Term::Literal(_), Term::Literal(_)) => compare_values(left, right).map(|o| o == Ordering::Equal),
        _ => Some(false),
    }
}

fn compare_numbers(left: &str, right: &str) -> Option<Ordering> {
    let (left, right) = (left.trim(), right.trim());
    if let (Ok(a), Ok(b)) = (left.parse::<i128>(), right.parse::<i128>()) {
        return Some(a.cmp(&b));
    }
    let a = parse_double(left)?;
    let b = parse_double(right)?;
    a.partial_cmp(&b)
}

fn parse_double(value: &str) -> Option<f64> {
    match value {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        other => other.parse::<f64>().ok(),
    }
}

fn parse_boolean(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
