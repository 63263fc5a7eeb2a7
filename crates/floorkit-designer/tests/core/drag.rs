use floorkit_core::{Floor, Machine, MachineId, PositionUpdate};
use floorkit_designer::{Canvas, DragSession, ExtentOptions, Percent, Point, Viewport};

fn canvas_with(machines: Vec<Machine>) -> Canvas {
    let mut canvas = Canvas::new(Floor::CyberStudio, 40.0, ExtentOptions::default());
    canvas.set_viewport(Viewport::new(1000.0, 1000.0).unwrap());
    canvas.set_machines(machines);
    canvas
}

#[test]
fn test_group_drag_keeps_relative_layout() {
    let mut canvas = canvas_with(vec![
        Machine::new(1, Floor::CyberStudio, 10.0, 10.0),
        Machine::new(2, Floor::CyberStudio, 20.0, 30.0),
    ]);
    let ids = [MachineId(1), MachineId(2)];
    let session = DragSession::begin(&canvas, MachineId(1), &ids, Point::new(100.0, 100.0)).unwrap();

    session.apply_move(&mut canvas, Point::new(181.0, 59.0));
    let updates = session.finish(&mut canvas);

    assert_eq!(
        updates,
        vec![
            PositionUpdate::new(1, 18.0, 6.0),
            PositionUpdate::new(2, 28.0, 26.0),
        ]
    );
}

#[test]
fn test_drag_past_edges_is_not_clamped() {
    let mut canvas = canvas_with(vec![Machine::new(1, Floor::CyberStudio, 2.0, 98.0)]);
    let session =
        DragSession::begin(&canvas, MachineId(1), &[MachineId(1)], Point::new(20.0, 980.0)).unwrap();

    let readout = session.apply_move(&mut canvas, Point::new(-105.0, 1100.0));
    assert_eq!(readout, Some(Percent::new(-10.0, 110.0)));

    let updates = session.finish(&mut canvas);
    assert_eq!(updates, vec![PositionUpdate::new(1, -10.0, 110.0)]);
}

#[test]
fn test_every_move_is_measured_from_gesture_start() {
    let mut canvas = canvas_with(vec![Machine::new(1, Floor::CyberStudio, 50.0, 50.0)]);
    let session =
        DragSession::begin(&canvas, MachineId(1), &[MachineId(1)], Point::new(500.0, 500.0)).unwrap();

    session.apply_move(&mut canvas, Point::new(700.0, 500.0));
    session.apply_move(&mut canvas, Point::new(540.0, 500.0));

    let m = canvas.machine(MachineId(1)).unwrap();
    assert_eq!((m.x, m.y), (54.0, 50.0));
}

#[test]
fn test_machine_removed_mid_drag_is_skipped() {
    let mut canvas = canvas_with(vec![
        Machine::new(1, Floor::CyberStudio, 10.0, 10.0),
        Machine::new(2, Floor::CyberStudio, 20.0, 20.0),
    ]);
    let ids = [MachineId(1), MachineId(2)];
    let session = DragSession::begin(&canvas, MachineId(1), &ids, Point::default()).unwrap();

    canvas.set_machines(vec![Machine::new(1, Floor::CyberStudio, 10.0, 10.0)]);
    let updates = session.finish(&mut canvas);

    assert_eq!(updates, vec![PositionUpdate::new(1, 10.0, 10.0)]);
}
