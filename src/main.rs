use myhome_remote::command::{
    GarageDoorDownCommand, GarageDoorUpCommand, LightOffCommand, LightOnCommand, MacroCommand,
    SetFanSpeedCommand, shared,
};
use myhome_remote::devices::{CeilingFan, GarageDoor, Light};
use myhome_remote::messaging::{
    ButtonEvent, Dispatcher, create_event_channel, create_notification_channel,
};
use myhome_remote::remote::RemoteControl;
use ringbuf::traits::{Consumer, Producer};
use std::sync::{Arc, Mutex};

// Ringbuffer capacity constants
// A human pressing buttons produces a handful of events per second at most;
// 64 covers the whole scripted demo queued up front with room to spare.
const EVENT_RINGBUFFER_CAPACITY: usize = 64;
const NOTIFICATION_RINGBUFFER_CAPACITY: usize = 64;

fn main() {
    println!("=== MyHome Remote ===\n");

    // Create the devices (receivers)
    let living_room_light = Arc::new(Mutex::new(Light::new("living room")));
    let kitchen_light = Arc::new(Mutex::new(Light::new("kitchen")));
    let garage_door = Arc::new(Mutex::new(GarageDoor::new()));
    let ceiling_fan = Arc::new(Mutex::new(CeilingFan::new("living room")));

    // Basic commands
    let light_on = shared(LightOnCommand::new(Arc::clone(&living_room_light)));
    let light_off = shared(LightOffCommand::new(Arc::clone(&living_room_light)));
    let kitchen_light_on = shared(LightOnCommand::new(Arc::clone(&kitchen_light)));
    let kitchen_light_off = shared(LightOffCommand::new(Arc::clone(&kitchen_light)));
    let garage_up = shared(GarageDoorUpCommand::new(Arc::clone(&garage_door)));
    let garage_down = shared(GarageDoorDownCommand::new(Arc::clone(&garage_door)));
    let fan_high = shared(SetFanSpeedCommand::high(Arc::clone(&ceiling_fan)));
    let fan_off = shared(SetFanSpeedCommand::off(Arc::clone(&ceiling_fan)));

    // "Party mode" macro pair, sharing the same command instances as the
    // per-device slots
    let party_on = shared(MacroCommand::new(
        "party mode on",
        vec![
            Arc::clone(&light_on),
            Arc::clone(&kitchen_light_on),
            Arc::clone(&fan_high),
        ],
    ));
    let party_off = shared(MacroCommand::new(
        "party mode off",
        vec![
            Arc::clone(&light_off),
            Arc::clone(&kitchen_light_off),
            Arc::clone(&fan_off),
        ],
    ));

    // Configure the remote (invoker)
    let mut remote = RemoteControl::new();
    println!("Initial remote state:\n{remote}\n");

    let bindings = [
        (0, light_on, light_off),
        (1, kitchen_light_on, kitchen_light_off),
        (2, fan_high, fan_off),
        (3, garage_up, garage_down),
        (6, party_on, party_off),
    ];
    for (slot, on, off) in bindings {
        if let Err(e) = remote.set_command(slot, on, off) {
            eprintln!("ERROR: {e}");
        }
    }
    println!("After configuration:\n{remote}\n");

    // Feed the demo script through the trigger surface
    let (mut event_tx, event_rx) = create_event_channel(EVENT_RINGBUFFER_CAPACITY);
    let (notification_tx, mut notification_rx) =
        create_notification_channel(NOTIFICATION_RINGBUFFER_CAPACITY);
    let mut dispatcher = Dispatcher::new(remote, event_rx, notification_tx);

    let script = [
        ButtonEvent::On(0),   // living room light on
        ButtonEvent::On(1),   // kitchen light on
        ButtonEvent::Undo,    // kitchen light back off
        ButtonEvent::On(2),   // fan to high
        ButtonEvent::Off(2),  // fan off
        ButtonEvent::Undo,    // back to high
        ButtonEvent::Undo,    // same snapshot: high again
        ButtonEvent::On(6),   // party mode on
        ButtonEvent::Undo,    // party mode unwound in reverse
        ButtonEvent::On(3),   // garage up
        ButtonEvent::Undo,    // garage back down
        ButtonEvent::On(5),   // empty slot: NoCommand
        ButtonEvent::Undo,    // undoes the NoCommand, no effect
        ButtonEvent::On(10),  // invalid slot, reported and absorbed
        ButtonEvent::Quit,
    ];
    for event in script {
        if event_tx.try_push(event).is_err() {
            eprintln!("ERROR: event ringbuffer full");
        }
    }

    println!("Replaying {} button events...\n", script.len());
    dispatcher.drain();

    while let Some(notification) = notification_rx.try_pop() {
        eprintln!("[{:?}/{:?}] {}", notification.level, notification.category, notification.message);
    }

    let remote = dispatcher.into_remote();
    println!("\nFinal remote state:\n{remote}\n");

    if let Ok(light) = living_room_light.lock() {
        println!("{} light on: {}", light.location(), light.is_on());
    }
    if let Ok(light) = kitchen_light.lock() {
        println!("{} light on: {}", light.location(), light.is_on());
    }
    if let Ok(door) = garage_door.lock() {
        println!("garage door open: {}", door.is_open());
    }
    if let Ok(fan) = ceiling_fan.lock() {
        println!("{} fan speed: {:?}", fan.location(), fan.speed());
    }

    println!("\n=== Demo complete ===");
}
