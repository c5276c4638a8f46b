/// Formats a number of seconds as `m:ss`.
///
/// Minutes are not padded and are allowed to exceed 59, so one hour reads
/// `60:00`.
pub fn format_remaining(total_secs: u32) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
