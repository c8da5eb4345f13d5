/// Derives a lowercase, hyphenated, URL-safe slug from a display name.
///
/// Alphanumeric characters are lowercased; every run of other characters
/// collapses into a single hyphen; leading and trailing hyphens are trimmed.
///
/// # Arguments
/// - `name` - The display name to slugify
///
/// # Returns
/// - `String` - The derived slug, e.g. `"Tech Bootcamp"` -> `"tech-bootcamp"`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}
