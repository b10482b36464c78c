//! Gateway utility functions.

/// Expand `${VAR}` patterns with values from the process environment.
///
/// Unknown variables are replaced with an empty string.
pub fn expand_env_vars(input: &str) -> String {
    expand_with(input, |name| std::env::var(name).ok())
}

/// Expand `${VAR}` patterns through `lookup`.
///
/// A `$` not followed by `{` is kept as is, and an unterminated `${` takes
/// the rest of the input as the variable name.
pub fn expand_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            let mut var_name = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var_name.push(c);
            }
            if let Some(val) = lookup(&var_name) {
                result.push_str(&val);
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::expand_with;

    fn vars(name: &str) -> Option<String> {
        match name {
            "OPENAI_API_KEY" => Some("sk-live".into()),
            "PORT" => Some("8080".into()),
            _ => None,
        }
    }

    #[test]
    fn replaces_known_and_drops_unknown() {
        assert_eq!(
            expand_with("key = \"${OPENAI_API_KEY}\"", vars),
            "key = \"sk-live\""
        );
        assert_eq!(expand_with("${MISSING}x", vars), "x");
        assert_eq!(expand_with("port ${PORT}/$HOME", vars), "port 8080/$HOME");
    }
}
