/// Masks a bot token for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the token.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
