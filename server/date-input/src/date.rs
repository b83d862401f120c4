//! Date field normalization.

/// Trim a raw field value to its leading YYYY-MM-DD portion.
///
/// Rules, first match wins:
/// 1. Absent or empty -> empty string.
/// 2. Length exactly 10 -> unchanged (already date-only).
/// 3. Contains 'T' -> everything before the first 'T'.
/// 4. Otherwise unchanged.
///
/// Purely syntactic: no check that the result is a real calendar date.
pub fn format_date_input(value: Option<&str>) -> String {
  let s = match value {
    Some(s) if !s.is_empty() => s,
    _ => return String::new(),
  };
  if s.len() == 10 {
    return s.to_string();
  }
  match s.find('T') {
    Some(idx) => s[..idx].to_string(),
    None => s.to_string(),
  }
}
