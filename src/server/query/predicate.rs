//! Store-agnostic query state accumulated by the query builder.

/// A single narrowing constraint. All predicates in a [`QuerySpec`] are
/// combined with logical AND when the query executes.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `field == value`
    Equals { field: String, value: String },
    /// `field` is one of `values`
    OneOf { field: String, values: Vec<String> },
    /// `min <= field <= max`
    Between { field: String, min: f64, max: f64 },
    /// At least one of `fields` contains `term`, ignoring case.
    ContainsAny { fields: Vec<String>, term: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    /// Parses a single sort token, where a leading `-` means descending.
    ///
    /// Returns `None` for a token with no field name.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (field, direction) = match token.strip_prefix('-') {
            Some(field) => (field.trim(), SortDirection::Descending),
            None => (token, SortDirection::Ascending),
        };

        if field.is_empty() {
            return None;
        }

        Some(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// Which fields of each document are returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Projection {
    #[default]
    All,
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl Projection {
    /// Builds a projection from a list of field tokens.
    ///
    /// When every token carries the `-` prefix the projection excludes those
    /// fields; otherwise only the un-prefixed tokens are included. An empty
    /// token list selects all fields.
    pub fn from_tokens(tokens: &[String]) -> Self {
        let excluded: Vec<String> = tokens
            .iter()
            .filter_map(|token| token.strip_prefix('-'))
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        if !tokens.is_empty() && excluded.len() == tokens.len() {
            return Self::Exclude(excluded);
        }

        let included: Vec<String> = tokens
            .iter()
            .filter(|token| !token.starts_with('-'))
            .cloned()
            .collect();

        if included.is_empty() {
            Self::All
        } else {
            Self::Include(included)
        }
    }
}

const MAX_SKIP: u64 = i64::MAX as u64;

/// The page of results to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// One-based page number.
    pub page: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Number of matching documents before the start of this page.
    ///
    /// Never exceeds `i64::MAX`, the largest offset SQL backends accept.
    pub fn skip(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .checked_mul(self.limit)
            .map_or(MAX_SKIP, |skip| skip.min(MAX_SKIP))
    }
}

/// Composed, not-yet-executed query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    pub predicates: Vec<Predicate>,
    pub sort: Vec<SortKey>,
    pub projection: Projection,
    /// `None` returns the whole matching set.
    pub window: Option<PageWindow>,
}
