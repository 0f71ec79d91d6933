//! Application-wide constants

pub const TOKEN_TYPE_ACCESS: &str = "access";

/// Sessions are valid for one hour from issuance.
pub const SESSION_TTL_SECS: i64 = 3600;
