//! Display labels and presentation ordering

use crate::core::Identifier;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Fields that make up a human-readable label and a presentation order
pub trait Labeled {
    fn identifier(&self) -> &Identifier;

    fn name(&self) -> Option<&str>;

    fn job_title(&self) -> Option<&str> {
        None
    }

    fn call_sign(&self) -> Option<&str> {
        None
    }

    fn order(&self) -> Option<i64> {
        None
    }

    fn start_date(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// `job title + name`, else the call sign, else the identifier string
    fn display_label(&self) -> String {
        let mut parts = Vec::new();
        match self.name() {
            Some(name) => {
                if let Some(job_title) = self.job_title() {
                    parts.push(job_title);
                }
                parts.push(name);
            }
            None => {
                if let Some(call_sign) = self.call_sign() {
                    parts.push(call_sign);
                }
            }
        }
        if parts.is_empty() {
            self.identifier().to_canonical_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Order by start date, then explicit order, then label, then identifier
pub fn compare<L: Labeled + ?Sized, R: Labeled + ?Sized>(left: &L, right: &R) -> Ordering {
    if let (Some(left_start), Some(right_start)) = (left.start_date(), right.start_date()) {
        let ordering = left_start.cmp(&right_start);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left.order()
        .unwrap_or(0)
        .cmp(&right.order().unwrap_or(0))
        .then_with(|| left.display_label().cmp(&right.display_label()))
        .then_with(|| left.identifier().cmp(right.identifier()))
}
