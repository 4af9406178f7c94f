pub mod forecast;
pub mod hospital;
pub mod resources;

pub use forecast::*;
pub use hospital::*;
pub use resources::*;
