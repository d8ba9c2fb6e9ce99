//! Command implementations for the OxiLZ CLI.

pub mod compress;
pub mod decompress;
pub mod inspect;
pub mod test;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use inspect::cmd_inspect;
pub use test::cmd_test;
