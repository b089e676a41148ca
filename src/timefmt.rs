/// Game ticks per second. Lap times come out of the game as tick counts and
/// every view renders them through [`format_ticks`].
pub const TICRATE: u64 = 35;

/// Renders a tick count as `M:SS.cc`.
///
/// Seconds are zero-padded to two digits, centiseconds are the sub-second
/// tick remainder scaled by `100 / rate` (integer division throughout, no
/// rounding). Pure and total; callers pass the rate explicitly, normally
/// [`TICRATE`].
pub fn format_ticks(ticks: u64, ticks_per_second: u64) -> String {
    let minutes = ticks / (60 * ticks_per_second);
    let seconds = (ticks / ticks_per_second) % 60;
    let centiseconds = (ticks % ticks_per_second) * (100 / ticks_per_second);
    format!("{}:{:02}.{:02}", minutes, seconds, centiseconds)
}
