/// Number of characters kept from a `datetime-local` value (`YYYY-MM-DDTHH:MM`).
const MINUTE_PRECISION_LEN: usize = 16;

/// Reduce a user-entered local date-time to minute precision for the wire.
///
/// Returns `None` when the field is unset. Anything else is cut to 16
/// characters and suffixed with `:00`, without further validation.
pub fn format_time(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let mut formatted: String = raw.chars().take(MINUTE_PRECISION_LEN).collect();
    formatted.push_str(":00");
    Some(formatted)
}
