pub mod keys;
pub mod session;
pub mod surface;

pub use keys::Key;
pub use session::{Deadline, Session, WebDriverFactory};
pub use surface::{BrowserSurface, UiSurface};
