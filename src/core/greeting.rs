//! Greeting messages

/// Greeting printed by `greet`
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}! 🥳")
}

/// Reply printed by `interact` once the user has answered
pub fn welcome(answer: &str) -> String {
    format!("Nice to meet you, {answer}! 🎉")
}
