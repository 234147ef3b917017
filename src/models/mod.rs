pub mod advice;
pub mod crop;
pub mod field;
pub mod reading;
pub mod recommendation;

pub use advice::*;
pub use crop::*;
pub use field::*;
pub use reading::*;
pub use recommendation::*;
