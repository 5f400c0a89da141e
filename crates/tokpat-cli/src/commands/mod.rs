pub mod generate;
pub mod grammar_loader;
pub mod scopes;

#[cfg(test)]
mod grammar_loader_tests;
