//! Keyword dictionaries and name normalization.
//!
//! Column names are the cheapest signal available, so every dictionary
//! match works on a normalized form (lowercased, punctuation collapsed to
//! underscores). The dictionaries encode domain vocabulary: what a sales
//! table tends to call its columns, which words mark a column as an
//! identifier, a metric, or a grouping dimension.

/// Vocabulary of sales and commerce datasets.
pub const SALES_PATTERNS: &[&str] = &[
    "revenue", "sales", "price", "product", "quantity", "order", "customer", "profit", "discount",
    "total", "amount", "unit_price", "cost", "sku", "invoice", "payment", "transaction",
    "purchase", "item", "cart", "shipping", "subtotal", "tax", "margin", "store", "channel",
];

/// Vocabulary of survey and feedback datasets.
pub const SURVEY_PATTERNS: &[&str] = &[
    "rating", "satisfaction", "score", "feedback", "response", "survey", "opinion", "agree",
    "disagree", "recommend", "experience", "quality", "likert", "scale", "nps", "sentiment",
    "review", "comment", "strongly_agree", "strongly_disagree", "neutral", "poor", "excellent",
];

/// Vocabulary of market and financial datasets.
pub const FINANCIAL_PATTERNS: &[&str] = &[
    "stock", "ticker", "portfolio", "market_cap", "pe_ratio", "dividend", "open", "close", "high",
    "low", "volume", "adj_close", "return", "yield", "bond", "equity", "asset", "liability",
    "balance", "interest_rate", "exchange_rate", "currency", "forex", "trade",
];

/// Vocabulary of demographic and socioeconomic datasets.
pub const DEMOGRAPHICS_PATTERNS: &[&str] = &[
    "age", "gender", "education", "income", "population", "ethnicity", "race", "marital_status",
    "occupation", "employment", "household", "census", "birth", "death", "migration", "salary",
    "wage", "degree", "university", "school", "country", "state", "city", "zip",
];

/// Words that mark a column as a row identifier.
pub const ID_PATTERNS: &[&str] = &[
    "id", "index", "key", "uuid", "code", "serial", "number", "no", "sr", "sno",
];

/// Words that mark a column as free text (names, descriptions, contact info).
pub const NAME_PATTERNS: &[&str] = &[
    "name", "title", "label", "description", "comment", "note", "text", "remark", "address",
    "email", "phone", "url",
];

/// Words that mark a numeric column as an aggregatable quantity.
pub const METRIC_KEYWORDS: &[&str] = &[
    "revenue",
    "sales",
    "price",
    "amount",
    "total",
    "cost",
    "profit",
    "margin",
    "quantity",
    "count",
    "score",
    "rating",
    "value",
    "sum",
    "avg",
    "average",
    "rate",
    "percentage",
    "pct",
    "growth",
    "change",
    "return",
    "yield",
    "temperature",
    "humidity",
    "speed",
    "weight",
    "height",
    "distance",
    "income",
    "salary",
    "wage",
    "budget",
    "expense",
    "balance",
    "volume",
    "popularity",
    "views",
    "clicks",
    "impressions",
    "conversions",
    "duration",
    "runtime",
    "minutes",
    "hours",
    "vote",
    "likes",
];

/// Metric names whose values should be averaged rather than summed.
pub const AVG_KEYWORDS: &[&str] = &[
    "rating",
    "score",
    "percentage",
    "pct",
    "rate",
    "ratio",
    "average",
    "avg",
    "return",
    "yield",
    "satisfaction",
    "nps",
    "grade",
    "rank",
    "popularity",
    "vote_average",
    "vote_count",
];

/// Words that mark a column as a grouping dimension.
pub const DIMENSION_KEYWORDS: &[&str] = &[
    "category",
    "type",
    "group",
    "class",
    "segment",
    "region",
    "area",
    "zone",
    "department",
    "team",
    "brand",
    "product",
    "item",
    "channel",
    "source",
    "status",
    "level",
    "tier",
    "grade",
    "rank",
    "priority",
    "country",
    "state",
    "city",
    "location",
    "store",
    "gender",
    "age_group",
    "occupation",
    "education",
    "month",
    "quarter",
    "year",
    "week",
    "day",
    "season",
    "genre",
    "language",
    "platform",
    "device",
    "browser",
];

/// Normalize a column name for dictionary matching: lowercase, runs of
/// non-alphanumerics collapsed to single underscores, trimmed.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }
    out
}

/// Human-readable column title: camelCase splits, separators become
/// spaces, each word's first letter is capitalized (the rest untouched).
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    let mut at_word_start = true;
    for ch in name.chars() {
        if ch == '_' || ch == '-' || ch == '.' || ch.is_whitespace() {
            prev_lower = false;
            if !at_word_start {
                out.push(' ');
                at_word_start = true;
            }
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            out.push(' ');
            at_word_start = true;
        }
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_lower = ch.is_ascii_lowercase();
        at_word_start = false;
    }
    out.trim().to_string()
}

/// Fraction of column names that match the dictionary, counting a match
/// when either string contains the other.
pub fn match_fraction(column_names: &[&str], patterns: &[&str]) -> f64 {
    let normalized: Vec<String> = column_names.iter().map(|n| normalize_name(n)).collect();
    let matches = normalized
        .iter()
        .filter(|name| {
            patterns
                .iter()
                .any(|p| name.contains(p) || p.contains(name.as_str()))
        })
        .count();
    matches as f64 / column_names.len().max(1) as f64
}

/// Exact, prefix (`id_...`), or suffix (`..._id`) identifier-name match.
pub fn is_identifier_name(normalized: &str) -> bool {
    ID_PATTERNS.iter().any(|p| {
        normalized == *p
            || normalized.ends_with(&format!("_{p}"))
            || normalized.starts_with(&format!("{p}_"))
    })
}

/// Substring match against the free-text vocabulary.
pub fn is_freetext_name(normalized: &str) -> bool {
    NAME_PATTERNS.iter().any(|p| normalized.contains(p))
}

/// Substring match against the metric vocabulary.
pub fn has_metric_keyword(normalized: &str) -> bool {
    METRIC_KEYWORDS.iter().any(|p| normalized.contains(p))
}

/// Substring match against the average-flavored metric vocabulary.
pub fn has_avg_keyword(normalized: &str) -> bool {
    AVG_KEYWORDS.iter().any(|p| normalized.contains(p))
}

/// Substring match against the dimension vocabulary.
pub fn has_dimension_keyword(normalized: &str) -> bool {
    DIMENSION_KEYWORDS.iter().any(|p| normalized.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_names() {
        assert_eq!(normalize_name("Unit Price ($)"), "unit_price");
        assert_eq!(normalize_name("order--ID"), "order_id");
        assert_eq!(normalize_name("__revenue__"), "revenue");
        assert_eq!(normalize_name("Total2024"), "total2024");
    }

    #[test]
    fn title_cases_names() {
        assert_eq!(title_case("unit_price"), "Unit Price");
        assert_eq!(title_case("adjClose"), "Adj Close");
        assert_eq!(title_case("vote-average.score"), "Vote Average Score");
        assert_eq!(title_case("USUBJID"), "USUBJID");
    }

    #[test]
    fn identifier_names_need_boundary_matches() {
        assert!(is_identifier_name("id"));
        assert!(is_identifier_name("customer_id"));
        assert!(is_identifier_name("id_customer"));
        // "grid" contains "id" but is not an identifier name
        assert!(!is_identifier_name("grid"));
    }

    #[test]
    fn match_fraction_is_bidirectional() {
        // "rev" is a substring of the "revenue" pattern, so it matches
        let fraction = match_fraction(&["rev", "region", "notes"], SALES_PATTERNS);
        assert!((fraction - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn match_fraction_handles_empty_input() {
        assert_eq!(match_fraction(&[], SALES_PATTERNS), 0.0);
    }
}
