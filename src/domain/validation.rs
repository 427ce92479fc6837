/// Validates a service name for use as a package name, unit file stem, and
/// binary name under `/usr/bin`.
///
/// Checks:
/// - Non-empty
/// - Does not start with '-' or '.'
/// - Characters are ASCII alphanumeric, '@', '.', '_', '+', or '-'
pub fn validate_service_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.starts_with('-') || name.starts_with('.') {
        return false;
    }
    name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '+' | '-'))
}
