use actix_web::HttpRequest;

const UA_MAX_CHARS: usize = 50;

/// Best-effort client identifier for rate limiting: first hop of the
/// forwarded-for chain (falling back to other proxy headers, then "unknown"),
/// joined with a truncated user-agent. Spoofable by design; good enough to
/// bucket anonymous contact-form traffic.
pub fn client_identifier(req: &HttpRequest) -> String {
    let headers = req.headers();

    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let ip = header_value("x-forwarded-for")
        .and_then(|chain| chain.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| header_value("x-real-ip"))
        .or_else(|| header_value("cf-connecting-ip"))
        .unwrap_or("unknown");

    let ua = header_value("user-agent")
        .map(|ua| ua.chars().take(UA_MAX_CHARS).collect::<String>())
        .unwrap_or_else(|| "no-ua".to_string());

    format!("{ip}-{ua}")
}
