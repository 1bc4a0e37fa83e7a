//! Attribute name to label conversion

/// Convert `CamelCase` and `kebab-case` to `snake_case`
///
/// # Examples
///
/// ```
/// use vellum_helpers::inflector::underscore;
///
/// assert_eq!(underscore("createdAt"), "created_at");
/// assert_eq!(underscore("HTMLParser"), "html_parser");
/// assert_eq!(underscore("first-name"), "first_name");
/// ```
pub fn underscore(word: &str) -> String {
	let chars: Vec<char> = word.chars().collect();
	let mut out = String::with_capacity(word.len() + 4);
	for (i, &c) in chars.iter().enumerate() {
		if c == '-' {
			out.push('_');
			continue;
		}
		if c.is_uppercase() && i > 0 {
			let prev = chars[i - 1];
			let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
			let boundary = prev.is_lowercase()
				|| prev.is_ascii_digit()
				|| (prev.is_uppercase() && next_is_lower);
			if boundary && !out.ends_with('_') {
				out.push('_');
			}
		}
		out.extend(c.to_lowercase());
	}
	out
}

/// Turn a snake_case name into a sentence-cased label
///
/// Leading underscores and a trailing `_id` are dropped.
///
/// # Examples
///
/// ```
/// use vellum_helpers::inflector::humanize;
///
/// assert_eq!(humanize("author_id"), "Author");
/// assert_eq!(humanize("created_at"), "Created at");
/// ```
pub fn humanize(word: &str) -> String {
	let trimmed = word.trim_start_matches('_');
	let trimmed = trimmed.strip_suffix("_id").unwrap_or(trimmed);
	let spaced = trimmed.replace('_', " ").to_lowercase();
	capitalize(&spaced)
}

/// Label for an attribute name: every word capitalised
///
/// # Examples
///
/// ```
/// use vellum_helpers::inflector::titleize;
///
/// assert_eq!(titleize("created_at"), "Created At");
/// assert_eq!(titleize("authorId"), "Author");
/// ```
pub fn titleize(word: &str) -> String {
	humanize(&underscore(word))
		.split(' ')
		.map(capitalize)
		.collect::<Vec<_>>()
		.join(" ")
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("name", "Name")]
	#[case("created_at", "Created At")]
	#[case("first-name", "First Name")]
	#[case("firstName", "First Name")]
	#[case("author_id", "Author")]
	#[case("authorId", "Author")]
	#[case("id", "Id")]
	#[case("_private_note", "Private Note")]
	#[case("HTMLParser", "Html Parser")]
	#[case("address_line2", "Address Line2")]
	#[case("", "")]
	fn test_titleize(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(titleize(input), expected);
	}

	#[rstest]
	#[case("already_snake", "already_snake")]
	#[case("version2Name", "version2_name")]
	#[case("ABC", "abc")]
	#[case("snake_Case", "snake_case")]
	fn test_underscore(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(underscore(input), expected);
	}
}
