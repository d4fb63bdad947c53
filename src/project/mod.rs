//! ProjectA/B/C chain: the same three roles under project naming
//!
//! ProjectA is the base, ProjectB the middleware, ProjectC the top level.

pub mod a;
pub mod b;
pub mod c;

pub use a::ComponentA;
pub use b::ComponentB;
pub use c::ComponentC;
