pub mod drag;
pub mod launch;
pub mod logging;
pub mod messages;
pub mod persistence;
pub mod settings;
pub mod state;
pub mod store;
pub mod toast;
pub mod validate;
pub mod window_controls;

pub use persistence::{StateGateway, STORAGE_KEY};
pub use state::{AppEntry, Group, LauncherState};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use validate::is_valid_state;
pub use window_controls::{NativeWindow, WindowControls, WindowOp};
