/// Symbolic date tokens understood by the expander, replaced in this order.
pub const TOKEN_TODAY: &str = "@today";
pub const TOKEN_IGNORE: &str = "@ignore";
pub const TOKEN_CUR_YEAR: &str = "@cur_year";
pub const TOKEN_CUR_MONTH: &str = "@cur_month";
pub const TOKEN_CUR_DAY: &str = "@cur_day";

/// Route components shared across crates.
pub const V2_ROUTE_COMPONENT: &str = "v2";
pub const V1_ROUTE_COMPONENT: &str = "v1";

/// Fallback day bound used in point mode when no month is given.
pub const MAX_DAYS_IN_MONTH: i32 = 31;
