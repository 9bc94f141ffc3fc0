//! Generic version ordering
//!
//! Orders arbitrary version strings the way Maven's `ComparableVersion` does.
//! A string is split on `.` and `-` and on every digit/letter transition into
//! a tree of items:
//!
//! - numeric runs compare as integers of any size
//! - alphabetic runs compare by qualifier rank:
//!   `alpha < beta < milestone < rc < snapshot < "" (release) < sp`, with any
//!   other qualifier sorting after those, lexically among themselves
//! - `-` opens a nested list, so `1.0-rc1` becomes `[1, [rc, [1]]]`
//! - trailing zeros and empty qualifiers are dropped, so `1.0.0 == 1`
//!
//! A missing item on the shorter side compares as "null". Null equals zero and
//! release, sorts above any pre-release qualifier, and below any number.
//! This is what puts `1.0.0` above `1.0.0-rc1` above `1.0.0-alpha`.

use std::cmp::Ordering;
use std::fmt;

const QUALIFIERS: [&str; 7] = ["alpha", "beta", "milestone", "rc", "snapshot", "", "sp"];

/// Rank of the empty (release) qualifier in [`QUALIFIERS`]
const RELEASE_RANK: &str = "5";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    /// Decimal digits with leading zeros stripped; zero is the empty string
    Int(String),
    /// Lower-cased qualifier after alias expansion
    Str(String),
    List(Vec<Item>),
}

impl Item {
    fn int(digits: &str) -> Self {
        Item::Int(digits.trim_start_matches('0').to_string())
    }

    fn string(value: &str, followed_by_digit: bool) -> Self {
        let value = if followed_by_digit && value.len() == 1 {
            match value {
                "a" => "alpha",
                "b" => "beta",
                "m" => "milestone",
                other => other,
            }
        } else {
            value
        };

        let value = match value {
            "ga" | "final" | "release" => "",
            "cr" => "rc",
            other => other,
        };

        Item::Str(value.to_string())
    }

    fn parse(is_digit: bool, token: &str) -> Self {
        if is_digit {
            Item::int(token)
        } else {
            Item::string(token, false)
        }
    }

    fn is_null(&self) -> bool {
        match self {
            Item::Int(digits) => digits.is_empty(),
            Item::Str(value) => value.is_empty(),
            Item::List(items) => items.is_empty(),
        }
    }

    /// Compare against another item, or against "null" when `other` is `None`
    fn compare_to(&self, other: Option<&Item>) -> Ordering {
        match (self, other) {
            (Item::Int(digits), None) => {
                if digits.is_empty() {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
            (Item::Int(a), Some(Item::Int(b))) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Item::Int(_), Some(_)) => Ordering::Greater,

            (Item::Str(value), None) => qualifier_rank(value).as_str().cmp(RELEASE_RANK),
            (Item::Str(a), Some(Item::Str(b))) => qualifier_rank(a).cmp(&qualifier_rank(b)),
            (Item::Str(_), Some(_)) => Ordering::Less,

            (Item::List(items), None) => items
                .first()
                .map_or(Ordering::Equal, |first| first.compare_to(None)),
            (Item::List(_), Some(Item::Int(_))) => Ordering::Less,
            (Item::List(_), Some(Item::Str(_))) => Ordering::Greater,
            (Item::List(a), Some(Item::List(b))) => compare_lists(a, b),
        }
    }
}

fn qualifier_rank(qualifier: &str) -> String {
    match QUALIFIERS.iter().position(|q| *q == qualifier) {
        Some(index) => index.to_string(),
        None => format!("{}-{}", QUALIFIERS.len(), qualifier),
    }
}

fn compare_lists(left: &[Item], right: &[Item]) -> Ordering {
    let mut left = left.iter();
    let mut right = right.iter();

    loop {
        let result = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(r)) => r.compare_to(None).reverse(),
            (Some(l), r) => l.compare_to(r),
        };

        if result != Ordering::Equal {
            return result;
        }
    }
}

/// Drop trailing null items, looking through trailing nested lists
fn normalize(items: &mut Vec<Item>) {
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        if items[i].is_null() {
            items.remove(i);
        } else if !matches!(items[i], Item::List(_)) {
            break;
        }
    }
}

fn tokenize(version: &str) -> Vec<Item> {
    let version = version.to_lowercase();

    let mut parents: Vec<Vec<Item>> = Vec::new();
    let mut current: Vec<Item> = Vec::new();
    let mut is_digit = false;
    let mut start = 0;

    for (i, c) in version.char_indices() {
        match c {
            '.' | '-' => {
                let item = if i == start {
                    Item::Int(String::new())
                } else {
                    Item::parse(is_digit, &version[start..i])
                };
                current.push(item);
                start = i + 1;

                if c == '-' {
                    parents.push(std::mem::take(&mut current));
                }
            }
            c if c.is_ascii_digit() => {
                if !is_digit && i > start {
                    current.push(Item::string(&version[start..i], true));
                    start = i;
                    parents.push(std::mem::take(&mut current));
                }
                is_digit = true;
            }
            _ => {
                if is_digit && i > start {
                    current.push(Item::parse(true, &version[start..i]));
                    start = i;
                    parents.push(std::mem::take(&mut current));
                }
                is_digit = false;
            }
        }
    }

    if version.len() > start {
        current.push(Item::parse(is_digit, &version[start..]));
    }

    while let Some(mut parent) = parents.pop() {
        normalize(&mut current);
        parent.push(Item::List(current));
        current = parent;
    }
    normalize(&mut current);

    current
}

/// A version string with a total order over arbitrary qualifiers
///
/// # Examples
/// ```
/// use git_revision::domain::ComparableVersion;
///
/// let release = ComparableVersion::new("1.0.0");
/// let candidate = ComparableVersion::new("1.0.0-rc1");
/// assert!(release > candidate);
/// ```
#[derive(Debug, Clone)]
pub struct ComparableVersion {
    value: String,
    items: Vec<Item>,
}

impl ComparableVersion {
    pub fn new(version: impl Into<String>) -> Self {
        let value = version.into();
        let items = tokenize(&value);
        ComparableVersion { value, items }
    }

    /// The original string, unmodified
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Ord for ComparableVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_lists(&self.items, &other.items)
    }
}

impl PartialOrd for ComparableVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ComparableVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ComparableVersion {}

impl fmt::Display for ComparableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Compare two version strings with [`ComparableVersion`] ordering
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    ComparableVersion::new(left).cmp(&ComparableVersion::new(right))
}
