pub mod banner;
pub mod gitignore;
pub mod prompts;
pub mod widgets;

pub use banner::*;
pub use gitignore::*;
pub use prompts::*;
pub use widgets::*;
