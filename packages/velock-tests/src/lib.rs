pub mod common;
pub mod extensions;

#[cfg(test)]
mod tests;
