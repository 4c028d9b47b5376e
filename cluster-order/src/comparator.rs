use crate::natural::NaturalOrder;
use crate::{RowValues, SortDirection, SortSpec};
use std::cmp::Ordering;

/// Multi-key row ordering: the primary column in the requested direction,
/// then the secondary priority columns, always ascending.
#[derive(Debug, Clone)]
pub struct RowComparator<'a> {
    keys: Vec<&'a str>,
    direction: SortDirection,
    order: NaturalOrder,
}

impl<'a> RowComparator<'a> {
    pub fn new<S: AsRef<str>>(spec: &'a SortSpec, priority: &'a [S]) -> Self {
        let primary = spec.primary_column.as_str();
        let mut keys = Vec::with_capacity(priority.len() + 1);
        keys.push(primary);
        keys.extend(
            priority
                .iter()
                .map(AsRef::as_ref)
                .filter(|column| *column != primary),
        );
        Self {
            keys,
            direction: spec.primary_direction,
            order: NaturalOrder::new(spec.case_insensitive),
        }
    }

    /// Effective key sequence, primary column first.
    pub fn keys(&self) -> &[&'a str] {
        &self.keys
    }

    pub fn compare<R: RowValues + ?Sized>(&self, a: &R, b: &R) -> Ordering {
        for (idx, key) in self.keys.iter().enumerate() {
            let ord = self
                .order
                .compare(a.value_or_null(key), b.value_or_null(key));
            if ord == Ordering::Equal {
                continue;
            }
            if idx == 0 && self.direction == SortDirection::Descending {
                return ord.reverse();
            }
            return ord;
        }
        Ordering::Equal
    }
}

pub fn compare_rows<R, S>(a: &R, b: &R, spec: &SortSpec, priority: &[S]) -> Ordering
where
    R: RowValues + ?Sized,
    S: AsRef<str>,
{
    RowComparator::new(spec, priority).compare(a, b)
}

/// Sorts in place. The sort is stable, so rows that compare equal on every
/// key keep their original relative order.
pub fn sort_rows<R, S>(rows: &mut [R], spec: &SortSpec, priority: &[S])
where
    R: RowValues,
    S: AsRef<str>,
{
    let comparator = RowComparator::new(spec, priority);
    rows.sort_by(|a, b| comparator.compare(a, b));
}

/// Row ids in sorted order, leaving `rows` untouched.
pub fn sorted_ids<R, S>(rows: &[R], spec: &SortSpec, priority: &[S]) -> Vec<u64>
where
    R: RowValues,
    S: AsRef<str>,
{
    let comparator = RowComparator::new(spec, priority);
    let mut order: Vec<&R> = rows.iter().collect();
    order.sort_by(|a, b| comparator.compare(*a, *b));
    order.into_iter().map(|row| row.row_id()).collect()
}
