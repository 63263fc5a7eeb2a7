use floorkit_core::MachineId;
use floorkit_designer::{Marquee, Point};

fn centers() -> Vec<(MachineId, Point)> {
    vec![
        (MachineId(1), Point::new(100.0, 100.0)),
        (MachineId(2), Point::new(500.0, 500.0)),
        (MachineId(3), Point::new(900.0, 900.0)),
        (MachineId(4), Point::new(-50.0, 300.0)),
    ]
}

#[test]
fn test_marquee_selects_contained_centers() {
    let mut marquee = Marquee::begin(Point::new(50.0, 50.0));
    marquee.update(Point::new(500.0, 500.0));
    assert_eq!(marquee.select(centers()), vec![MachineId(1), MachineId(2)]);
}

#[test]
fn test_marquee_drawn_backwards() {
    let mut marquee = Marquee::begin(Point::new(950.0, 950.0));
    marquee.update(Point::new(500.0, 400.0));
    assert_eq!(marquee.select(centers()), vec![MachineId(2), MachineId(3)]);
}

#[test]
fn test_marquee_reaches_off_map_machines() {
    let mut marquee = Marquee::begin(Point::new(-100.0, 200.0));
    marquee.update(Point::new(0.0, 400.0));
    assert_eq!(marquee.select(centers()), vec![MachineId(4)]);
}
