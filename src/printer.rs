use crate::scanner::token::SpannedToken;

/// One token per line, in source order.
pub fn to_text(tokens: &[SpannedToken]) -> String {
    let mut buf = String::new();
    for token in tokens {
        buf.push_str(&token.to_string());
        buf.push('\n');
    }
    buf
}

pub fn to_json(tokens: &[SpannedToken]) -> String {
    serde_json::to_string_pretty(tokens).expect("tokens should be serializable")
}
