mod clock;
mod image_store;
mod notifier;

pub use clock::{Clock, SystemClock};
pub use image_store::{FsImageStore, ImageStore, image_extension, stored_icon_key, user_icon_key};
pub use notifier::{LogNotifier, Notification, NotificationKind, Notifier, notify_best_effort};
