use floorkit_core::PositionUpdate;
use floorkit_designer::{History, PositionSnapshot};

fn snapshot(x: f64) -> PositionSnapshot {
    PositionSnapshot::new(vec![PositionUpdate::new(1, x, 0.0)])
}

#[test]
fn test_new_history_is_empty() {
    let history = History::new(20);
    assert!(!history.can_undo());
    assert_eq!(history.len(), 0);
    assert!(history.peek().is_none());
}

#[test]
fn test_push_and_pop() {
    let mut history = History::new(20);
    history.push(snapshot(1.0));
    history.push(snapshot(2.0));

    assert_eq!(history.peek().unwrap().entries[0].x, 2.0);
    assert_eq!(history.pop().unwrap().entries[0].x, 2.0);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_capacity_evicts_first_in() {
    let mut history = History::new(3);
    for x in 0..5 {
        history.push(snapshot(x as f64));
    }
    assert_eq!(history.len(), 3);

    let remaining: Vec<f64> = std::iter::from_fn(|| history.pop())
        .map(|s| s.entries[0].x)
        .collect();
    assert_eq!(remaining, vec![4.0, 3.0, 2.0]);
}

#[test]
fn test_clear() {
    let mut history = History::default();
    history.push(snapshot(1.0));
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.capacity(), 20);
}
