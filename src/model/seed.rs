// Seed data: the cameras and events the app starts with
//
// Everything here is mock data. Thumbnail URLs point at a placeholder image
// service and are passed through untouched.

use super::device::{Device, DeviceStatus};
use super::event::{EventCategory, RecordingEvent};

/// Seed cameras, in dashboard order
pub fn devices() -> Vec<Device> {
    vec![
        Device {
            id: "cam-01".to_string(),
            name: "Front Door".to_string(),
            location: "Entrance".to_string(),
            status: DeviceStatus::Online,
            thumbnail_url: "https://picsum.photos/800/450?random=101".to_string(),
            last_active: "Now".to_string(),
            battery: Some(85),
            signal: Some(4),
        },
        Device {
            id: "cam-02".to_string(),
            name: "Baby Room".to_string(),
            location: "Bedroom".to_string(),
            status: DeviceStatus::Online,
            thumbnail_url: "https://picsum.photos/800/450?random=102".to_string(),
            last_active: "Now".to_string(),
            battery: Some(100),
            signal: Some(3),
        },
        Device {
            id: "cam-03".to_string(),
            name: "Garage".to_string(),
            location: "Exterior".to_string(),
            status: DeviceStatus::Offline,
            thumbnail_url: "https://picsum.photos/800/450?random=103".to_string(),
            last_active: "Yesterday".to_string(),
            battery: Some(12),
            signal: Some(1),
        },
    ]
}

/// Seed events, most recent first
pub fn events() -> Vec<RecordingEvent> {
    // (id, timestamp, duration, category, image seed, device, camera)
    let rows: [(&str, &str, &str, EventCategory, u32, &str, &str); 7] = [
        ("evt-1", "14:42", "0:45", EventCategory::Person, 201, "cam-01", "Front Door"),
        ("evt-2", "12:15", "1:20", EventCategory::Motion, 202, "cam-03", "Garage"),
        ("evt-3", "09:30", "0:30", EventCategory::Pet, 203, "cam-02", "Baby Room"),
        ("evt-4", "08:10", "2:10", EventCategory::Sound, 204, "cam-02", "Baby Room"),
        ("evt-5", "03:45", "0:15", EventCategory::Motion, 205, "cam-01", "Front Door"),
        ("evt-6", "Yesterday", "0:22", EventCategory::Person, 206, "cam-01", "Front Door"),
        ("evt-7", "Yesterday", "1:05", EventCategory::Motion, 207, "cam-03", "Garage"),
    ];

    rows.into_iter()
        .map(
            |(id, timestamp, duration, category, image, device_id, camera_name)| RecordingEvent {
                id: id.to_string(),
                timestamp: timestamp.to_string(),
                duration: duration.to_string(),
                category,
                thumbnail_url: format!("https://picsum.photos/200/150?random={}", image),
                device_id: device_id.to_string(),
                camera_name: camera_name.to_string(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_references_a_seed_device() {
        let devices = devices();
        for event in events() {
            assert!(
                devices.iter().any(|d| d.id == event.device_id),
                "{} points at unknown device {}",
                event.id,
                event.device_id
            );
        }
    }
}
