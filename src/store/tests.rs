use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |v: &T| sink.borrow_mut().push(v.clone()))
}

#[test]
fn subscribe_delivers_current_value_then_every_change() {
    let cell = Writable::new(1);
    let (seen, cb) = recorder::<i32>();
    let _sub = cell.subscribe(cb);

    cell.set(2);
    cell.update(|v| v * 10);

    assert_eq!(*seen.borrow(), vec![1, 2, 20]);
    assert_eq!(cell.get(), 20);
}

#[test]
fn subscribers_are_notified_in_subscription_order() {
    let cell = Writable::new(0u8);
    let order = Rc::new(RefCell::new(Vec::new()));

    let o1 = order.clone();
    let _a = cell.subscribe(move |_| o1.borrow_mut().push("a"));
    let o2 = order.clone();
    let _b = cell.subscribe(move |_| o2.borrow_mut().push("b"));

    order.borrow_mut().clear();
    cell.set(1);
    assert_eq!(*order.borrow(), vec!["a", "b"]);
}

#[test]
fn dropping_subscription_stops_notifications() {
    let cell = Writable::new(String::from("x"));
    let (seen, cb) = recorder::<String>();
    let sub = cell.subscribe(cb);
    assert_eq!(cell.subscriber_count(), 1);

    sub.unsubscribe();
    assert_eq!(cell.subscriber_count(), 0);

    cell.set("y".into());
    assert_eq!(*seen.borrow(), vec!["x".to_string()]);
}

#[test]
fn forgotten_subscription_stays_registered() {
    let cell = Writable::new(0);
    let (seen, cb) = recorder::<i32>();
    cell.subscribe(cb).forget();

    cell.set(5);
    assert_eq!(*seen.borrow(), vec![0, 5]);
    assert_eq!(cell.subscriber_count(), 1);
}

#[test]
fn subscriber_can_read_the_cell_it_observes() {
    let cell = Writable::new(3);
    let reader = cell.clone();
    let (seen, mut cb) = recorder::<i32>();
    let _sub = cell.subscribe(move |v| {
        assert_eq!(*v, reader.get());
        cb(v);
    });

    cell.set(4);
    assert_eq!(*seen.borrow(), vec![3, 4]);
}

#[test]
fn readable_view_tracks_its_writable() {
    let cell = Writable::new(vec![1, 2]);
    let view = cell.readable();
    cell.update(|v| {
        let mut v = v.clone();
        v.push(3);
        v
    });
    assert_eq!(view.get(), vec![1, 2, 3]);
}

#[test]
fn derived_recomputes_from_either_source() {
    let a = Writable::new(2);
    let b = Writable::new(3);
    let sum = derived2(&a.readable(), &b.readable(), |x, y| x + y);
    assert_eq!(sum.get(), 5);

    let (seen, cb) = recorder::<i32>();
    let _sub = sum.subscribe(cb);

    a.set(10);
    b.set(1);
    assert_eq!(sum.get(), 11);
    assert_eq!(*seen.borrow(), vec![5, 13, 11]);
}

#[test]
fn dropping_derived_releases_upstream_subscriptions() {
    let a = Writable::new(1);
    let b = Writable::new(1);
    let d = derived2(&a.readable(), &b.readable(), |x, y| x * y);
    assert_eq!(a.subscriber_count(), 1);
    assert_eq!(b.subscriber_count(), 1);

    drop(d);
    assert_eq!(a.subscriber_count(), 0);
    assert_eq!(b.subscriber_count(), 0);
}

#[test]
fn write_from_a_subscriber_reaches_every_subscriber_in_order() {
    let cell = Writable::new(0);
    let writer = cell.clone();
    let (clamp_seen, mut clamp_record) = recorder::<i32>();
    let _clamp = cell.subscribe(move |v| {
        clamp_record(v);
        if *v > 10 {
            writer.set(10);
        }
    });
    let (seen, cb) = recorder::<i32>();
    let _after = cell.subscribe(cb);

    cell.set(15);

    assert_eq!(cell.get(), 10);
    assert_eq!(*seen.borrow(), vec![0, 15, 10]);
    assert_eq!(seen.borrow().last(), Some(&cell.get()));
    assert_eq!(*clamp_seen.borrow(), vec![0, 15, 10]);
}

#[test]
fn unsubscribed_callback_skips_queued_deliveries() {
    let cell = Writable::new(0);
    let writer = cell.clone();
    let (seen, cb) = recorder::<i32>();
    let later: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let slot = later.clone();
    let _first = cell.subscribe(move |v| {
        if *v == 1 {
            // Drop the second subscriber, then queue another value.
            slot.borrow_mut().take();
            writer.set(2);
        }
    });
    *later.borrow_mut() = Some(cell.subscribe(cb));

    cell.set(1);
    assert_eq!(cell.get(), 2);
    assert_eq!(*seen.borrow(), vec![0]);
}
