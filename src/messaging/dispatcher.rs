// Dispatcher - drains button events into the remote control

use crate::messaging::channels::{EventConsumer, NotificationProducer};
use crate::messaging::command::ButtonEvent;
use crate::messaging::notification::{Notification, NotificationCategory};
use crate::remote::control::RemoteControl;
use ringbuf::traits::{Consumer, Producer};

/// Feeds queued button events into a RemoteControl
///
/// Invalid-slot presses are converted into Error notifications and absorbed;
/// the dispatcher keeps running and later valid presses behave normally.
pub struct Dispatcher {
    remote: RemoteControl,
    events: EventConsumer,
    notifications: NotificationProducer,
}

impl Dispatcher {
    pub fn new(
        remote: RemoteControl,
        events: EventConsumer,
        notifications: NotificationProducer,
    ) -> Self {
        Self {
            remote,
            events,
            notifications,
        }
    }

    /// Drain every queued event
    ///
    /// Returns false once a Quit event was seen; events queued after the Quit
    /// are left in the channel.
    pub fn drain(&mut self) -> bool {
        while let Some(event) = self.events.try_pop() {
            if !self.dispatch(event) {
                return false;
            }
        }
        true
    }

    fn dispatch(&mut self, event: ButtonEvent) -> bool {
        let result = match event {
            ButtonEvent::On(slot) => self.remote.press_on(slot),
            ButtonEvent::Off(slot) => self.remote.press_off(slot),
            ButtonEvent::Undo => {
                self.remote.press_undo();
                Ok(())
            }
            ButtonEvent::Quit => return false,
        };

        if let Err(e) = result {
            // Full notification buffer drops the report, never the dispatch
            let _ = self
                .notifications
                .try_push(Notification::error(NotificationCategory::Remote, e.to_string()));
        }
        true
    }

    pub fn remote(&self) -> &RemoteControl {
        &self.remote
    }

    pub fn remote_mut(&mut self) -> &mut RemoteControl {
        &mut self.remote
    }

    /// Hand the remote back, consuming the dispatcher
    pub fn into_remote(self) -> RemoteControl {
        self.remote
    }
}
