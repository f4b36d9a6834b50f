//! Field-name heuristics.
//!
//! Field names are matched against [`HEURISTICS`] in order; the first pattern
//! contained (case-insensitively) in the field's leaf name wins. This is a
//! heuristic: `"estate"` matches `state`, `"curly"` matches `url`. More
//! specific patterns are listed before the generic ones they contain
//! (`firstname` before `name`, `zipcode` before `address`).

/// Semantic category a field name can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCategory {
    Email,
    FirstName,
    LastName,
    FullName,
    Phone,
    Street,
    City,
    State,
    Country,
    FullAddress,
    PostalCode,
    Description,
    Url,
    Identifier,
}

/// Priority-ordered `(pattern, category)` pairs. Patterns are lowercase.
pub const HEURISTICS: &[(&str, NameCategory)] = &[
    ("email", NameCategory::Email),
    ("firstname", NameCategory::FirstName),
    ("first_name", NameCategory::FirstName),
    ("givenname", NameCategory::FirstName),
    ("lastname", NameCategory::LastName),
    ("last_name", NameCategory::LastName),
    ("surname", NameCategory::LastName),
    ("fullname", NameCategory::FullName),
    ("full_name", NameCategory::FullName),
    ("phone", NameCategory::Phone),
    ("mobile", NameCategory::Phone),
    ("zipcode", NameCategory::PostalCode),
    ("zip_code", NameCategory::PostalCode),
    ("postalcode", NameCategory::PostalCode),
    ("postal_code", NameCategory::PostalCode),
    ("postcode", NameCategory::PostalCode),
    ("street", NameCategory::Street),
    ("city", NameCategory::City),
    ("state", NameCategory::State),
    ("country", NameCategory::Country),
    ("address", NameCategory::FullAddress),
    ("description", NameCategory::Description),
    ("bio", NameCategory::Description),
    ("summary", NameCategory::Description),
    ("website", NameCategory::Url),
    ("url", NameCategory::Url),
    ("uuid", NameCategory::Identifier),
    ("guid", NameCategory::Identifier),
    ("identifier", NameCategory::Identifier),
    ("name", NameCategory::FullName),
];

/// Find the category for a field name, using the last segment of dotted
/// paths.
///
/// ```
/// use docmock_fake::heuristics::{match_name, NameCategory};
///
/// assert_eq!(match_name("firstName"), Some(NameCategory::FirstName));
/// assert_eq!(match_name("address.zipCode"), Some(NameCategory::PostalCode));
/// assert_eq!(match_name("age"), None);
/// ```
pub fn match_name(field_name: &str) -> Option<NameCategory> {
    let leaf = field_name.rsplit('.').next().unwrap_or(field_name);
    let leaf = leaf.to_ascii_lowercase();
    HEURISTICS
        .iter()
        .find(|(pattern, _)| leaf.contains(pattern))
        .map(|(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_patterns_win_over_generic() {
        assert_eq!(match_name("lastName"), Some(NameCategory::LastName));
        assert_eq!(match_name("userName"), Some(NameCategory::FullName));
        assert_eq!(match_name("emailAddress"), Some(NameCategory::Email));
        assert_eq!(match_name("homeAddress"), Some(NameCategory::FullAddress));
        assert_eq!(match_name("zip_code"), Some(NameCategory::PostalCode));
    }

    #[test]
    fn case_insensitive_substring() {
        assert_eq!(match_name("PHONENUMBER"), Some(NameCategory::Phone));
        assert_eq!(match_name("profileUrl"), Some(NameCategory::Url));
        assert_eq!(match_name("shortBio"), Some(NameCategory::Description));
    }

    #[test]
    fn only_leaf_segment_counts() {
        assert_eq!(match_name("address.city"), Some(NameCategory::City));
        assert_eq!(match_name("email.count"), None);
    }

    #[test]
    fn no_match() {
        assert_eq!(match_name("age"), None);
        assert_eq!(match_name("isActive"), None);
        assert_eq!(match_name("salary"), None);
    }
}
