//! Default request headers

/// User agent sent with every outbound request
pub fn user_agent() -> String {
    format!("creator-finder/{}", crate::VERSION)
}

/// Accept header for JSON APIs
pub fn accept_json() -> &'static str {
    "application/json,text/javascript,*/*;q=0.01"
}
