#[macro_use]
mod common;

#[cfg(test)]
mod scanning {
    tests! {
        unexpected_characters in scanning is ERR
        "[Line 1] Error: Unexpected character '#'"
        "[Line 2] Error: Unexpected character '@'"
    }

    tests! {
        unterminated_string in scanning is ERR
        "[Line 1] Error: Unterminated string"
    }

    tests! {
        unterminated_multiline in scanning is ERR
        "[Line 1] Error: Unterminated string"
    }
}
