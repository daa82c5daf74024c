//! Wire-level constants shared by the HTTP layer and the tests
//!
//! Paths, header names and user-facing messages live here so that handlers,
//! error mapping and integration tests agree on the exact text.

/// REST路径
pub mod paths {
    pub const USER_BASE_URL: &str = "/api/v1/users";
    pub const ME: &str = "/me";
    pub const DEBIT: &str = "/debit";
    pub const CREDIT: &str = "/credit";
    pub const BALANCE_BY_USERNAME: &str = "/:username/balance";
}

/// Header carrying the authenticated username, set by the upstream gateway.
pub const USERNAME_HEADER: &str = "x-username";

/// 校验错误消息
pub mod validation {
    pub const AMOUNT_NOT_NULL: &str = "Amount must not be null";
    pub const AMOUNT_MIN: &str = "Amount must be at least 3";
    pub const AMOUNT_MAX: &str = "Amount must be at most 400";
    pub const NAME_NOT_BLANK: &str = "Name must not be blank";
    pub const SURNAME_NOT_BLANK: &str = "Surname must not be blank";
    pub const LIMIT_POSITIVE: &str = "Limit must be at least 1";
}

/// Default page for `GET /api/v1/users`.
pub const DEFAULT_OFFSET: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 10;
