use floorkit_designer::{required_min_height, to_percent, to_pixel, ExtentOptions, Percent, Point, Viewport};

#[test]
fn test_to_pixel() {
    assert_eq!(to_pixel(50.0, 1000.0), 500.0);
    assert_eq!(to_pixel(-10.0, 800.0), -80.0);
    assert_eq!(to_pixel(125.0, 800.0), 1000.0);
}

#[test]
fn test_to_percent() {
    assert_eq!(to_percent(540.0, 1000.0), 54.0);
    assert_eq!(to_percent(-80.0, 800.0), -10.0);
    assert_eq!(to_percent(123.456, 1000.0), 12.35);
}

#[test]
fn test_viewport_round_trip_uneven_size() {
    let vp = Viewport::new(1366.0, 768.0).unwrap();
    let p = Percent::new(33.33, 66.67);
    let back = vp.pixel_to_percent(vp.percent_to_pixel(p));
    assert!((back.x - p.x).abs() <= 0.01);
    assert!((back.y - p.y).abs() <= 0.01);
}

#[test]
fn test_pan_does_not_move_machines() {
    let mut vp = Viewport::new(1000.0, 1000.0).unwrap();
    vp.set_pan(120.0, -40.0);
    assert_eq!(vp.percent_to_pixel(Percent::new(50.0, 50.0)), Point::new(500.0, 500.0));
}

#[test]
fn test_extent_with_machines_above_top() {
    let opts = ExtentOptions::default();
    // vh 900: top = 0.2*900 + 200 = 380, bottom = 200
    let h = required_min_height([-20.0, 50.0], 900.0, &opts);
    assert_eq!(h, 1480.0);
}
