//! Roadmap Algorithm Framework
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod traits;
pub mod random;
pub mod path_finding;

pub use self::traits::*;
pub use self::random::{RandomSource, RngSource};
pub use self::path_finding::*;
