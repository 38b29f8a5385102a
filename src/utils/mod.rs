//! This module contains helper functionality.

/// Alias to a scalar floating type.
pub type Float = f64;

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod noise;
pub use self::noise::*;

mod parallel;
pub use self::parallel::*;

mod random;
pub use self::random::*;

mod timing;
pub use self::timing::*;
