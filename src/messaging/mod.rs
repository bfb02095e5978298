// Messaging - trigger surface and error notifications
//
// Button events flow from the operator side to the dispatcher over a
// lock-free SPSC ringbuffer; notifications about absorbed errors flow back
// the same way.

pub mod channels;
pub mod command;
pub mod dispatcher;
pub mod notification;

pub use channels::{create_event_channel, create_notification_channel};
pub use command::ButtonEvent;
pub use dispatcher::Dispatcher;
pub use notification::{Notification, NotificationCategory, NotificationLevel};
