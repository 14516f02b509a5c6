pub mod panels;
pub mod reward;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
