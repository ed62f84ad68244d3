pub mod condition;
pub mod conversation;
pub mod directory;
pub mod enums;
pub mod medical_info;

pub use condition::*;
pub use conversation::*;
pub use directory::*;
pub use enums::*;
pub use medical_info::*;
