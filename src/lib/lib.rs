pub mod adapters;
pub mod core;
pub mod storage;

#[cfg(test)]
mod tests;
