/// TTL for listing fetches; keeps prices fresh across frequent
/// re-renders without hammering the providers
pub const QUOTE_TTL_SECS: u64 = 60;

/// TTL for chart series fetches; historical series change slowly
pub const SERIES_TTL_SECS: u64 = 300;

/// Page size requested from the general market feed
pub const MARKET_PAGE_SIZE: u32 = 50;

/// Kline interval for the pinned pair chart
pub const KLINE_INTERVAL: &str = "1h";

/// Number of hourly klines in a 7-day window
pub const KLINE_POINTS: u32 = 168;

/// Chart window in days for the general feed
pub const CHART_DAYS: u32 = 7;
