pub mod versioned;

pub use versioned::Versioned;
