// Domain model - cameras, recorded events, seed data

pub mod device;
pub mod event;
pub mod seed;

pub use device::{Device, DeviceList, DeviceStatus};
pub use event::{EventCategory, EventFilter, RecordingEvent};
