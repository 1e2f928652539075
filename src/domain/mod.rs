pub mod price;
pub mod product;
pub mod sub_link;
pub mod website;

pub use price::*;
pub use product::*;
pub use sub_link::*;
pub use website::*;
