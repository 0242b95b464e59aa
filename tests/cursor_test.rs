use ringq::{Cursor, I32Queue, IllegalState, Queue, QueueError};

fn queue_of(cap: usize, items: &[i32]) -> I32Queue {
    let mut q = I32Queue::new(cap).unwrap();
    for &i in items {
        assert!(q.offer(i));
    }
    q
}

#[test]
fn read_cursor_yields_fifo() {
    let q = queue_of(3, &[1, 2, 3]);
    let mut c = q.cursor();

    let mut seen = Vec::new();
    while c.has_next() {
        seen.push(*c.next(&q).unwrap());
    }
    assert_eq!(seen, [1, 2, 3]);
    assert_eq!(c.next(&q), Err(QueueError::NoSuchElement));
    assert_eq!(q.len(), 3);
}

#[test]
fn read_cursor_detects_offer() {
    let mut q = queue_of(3, &[1]);
    let mut c = q.cursor();
    q.offer(2);
    assert_eq!(c.next(&q), Err(QueueError::ConcurrentModification));
}

#[test]
fn read_cursor_detects_poll() {
    let mut q = queue_of(3, &[1, 2]);
    let mut c = q.cursor();
    assert_eq!(c.next(&q), Ok(&1));
    q.poll();
    assert!(c.next(&q).unwrap_err().is_concurrent_modification());
    assert_eq!(q.len(), 1);
}

#[test]
fn read_cursor_ignores_non_structural_calls() {
    let mut q = queue_of(3, &[1, 2]);
    let mut c = q.cursor();
    assert_eq!(q.peek(), Some(&1));
    assert_eq!(q.poll_if(|v| *v > 10), None);
    assert_eq!(c.next(&q), Ok(&1));
    assert_eq!(c.next(&q), Ok(&2));
}

#[test]
fn read_cursor_cannot_remove() {
    let mut q = queue_of(2, &[1, 2]);
    let mut c = q.cursor();
    c.next(&q).unwrap();
    assert_eq!(c.remove(&mut q), Err(QueueError::UnsupportedOperation));
    assert_eq!(q.len(), 2);
    assert_eq!(c.next(&q), Ok(&2));
}

#[test]
fn read_cursor_on_empty_queue() {
    let q = queue_of(2, &[]);
    let mut c = q.cursor();
    assert!(!c.has_next());
    assert_eq!(c.next(&q), Err(QueueError::NoSuchElement));
}

#[test]
fn head_removing_cursor_drains_in_order() {
    let mut q = Queue::new(3).unwrap();
    for s in ["A", "B", "C"] {
        q.offer(s.to_string());
    }

    let mut c = q.head_removing_cursor();
    let mut drained = Vec::new();
    while c.has_next() {
        assert_eq!(c.next(&q).map(String::as_str), Ok(["A", "B", "C"][drained.len()]));
        drained.push(c.remove(&mut q).unwrap());
    }

    assert_eq!(drained, ["A", "B", "C"]);
    assert!(q.is_empty());
    assert_eq!(c.next(&q), Err(QueueError::NoSuchElement));
}

#[test]
fn head_removing_cursor_rejects_double_remove() {
    let mut q = queue_of(3, &[1, 2, 3]);
    let mut c = q.head_removing_cursor();
    c.next(&q).unwrap();
    assert_eq!(c.remove(&mut q), Ok(1));
    assert_eq!(
        c.remove(&mut q),
        Err(QueueError::IllegalState(IllegalState::AlreadyRemoved))
    );
    assert_eq!(q.len(), 2);
}

#[test]
fn head_removing_cursor_rejects_remove_before_next() {
    let mut q = queue_of(3, &[1]);
    let mut c = q.head_removing_cursor();
    let err = c.remove(&mut q).unwrap_err();
    assert!(err.is_illegal_state());
    assert_eq!(err, QueueError::IllegalState(IllegalState::NextNotCalled));
    assert_eq!(q.len(), 1);
}

#[test]
fn head_removing_cursor_only_removes_head() {
    let mut q = queue_of(3, &[1, 2, 3]);
    let mut c = q.head_removing_cursor();
    c.next(&q).unwrap();
    c.next(&q).unwrap();
    assert_eq!(
        c.remove(&mut q),
        Err(QueueError::IllegalState(IllegalState::NotHead))
    );
    assert_eq!(q.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    // still able to walk on, but the head stays out of reach
    assert_eq!(c.next(&q), Ok(&3));
    assert!(c.remove(&mut q).unwrap_err().is_illegal_state());
}

#[test]
fn head_removing_cursor_detects_outside_mutation() {
    let mut q = queue_of(4, &[1, 2]);
    let mut c = q.head_removing_cursor();
    c.next(&q).unwrap();
    q.offer(3);
    assert_eq!(c.remove(&mut q), Err(QueueError::ConcurrentModification));
    assert_eq!(c.next(&q), Err(QueueError::ConcurrentModification));
    assert_eq!(q.len(), 3);

    let mut c = q.head_removing_cursor();
    c.next(&q).unwrap();
    c.remove(&mut q).unwrap();
    q.poll();
    assert_eq!(c.next(&q), Err(QueueError::ConcurrentModification));
}

#[test]
fn head_removing_cursor_across_wraparound() {
    let mut q = queue_of(3, &[1, 2, 3]);
    q.poll();
    q.poll();
    q.offer(4);
    q.offer(5);

    let mut c = q.head_removing_cursor();
    let mut drained = Vec::new();
    while c.has_next() {
        c.next(&q).unwrap();
        drained.push(c.remove(&mut q).unwrap());
    }
    assert_eq!(drained, [3, 4, 5]);
    assert!(q.is_empty());
}

#[test]
fn drain_while_stops_at_first_mismatch() {
    let mut q = queue_of(6, &[2, 4, 5, 6, 8]);
    let drained: Vec<i32> = q.drain_while(|v| v % 2 == 0).collect();
    assert_eq!(drained, [2, 4]);
    assert_eq!(q.iter().copied().collect::<Vec<_>>(), [5, 6, 8]);

    assert_eq!(q.drain_while(|v| v % 2 == 0).count(), 0);
    assert_eq!(q.len(), 3);
}

#[test]
fn drain_while_everything() {
    let mut q = queue_of(3, &[1, 2, 3]);
    q.poll();
    q.offer(4);
    assert_eq!(q.drain_while(|_| true).collect::<Vec<_>>(), [2, 3, 4]);
    assert!(q.is_empty());
    assert_eq!(q.drain_while(|_| true).next(), None);
}

#[test]
fn drain_while_is_lazy() {
    let mut q = queue_of(4, &[1, 2, 3, 4]);
    let first_two: Vec<i32> = q.drain_while(|_| true).take(2).collect();
    assert_eq!(first_two, [1, 2]);
    assert_eq!(q.iter().copied().collect::<Vec<_>>(), [3, 4]);
}

// `a` and `b` reach the same generation by different paths
fn twin_queues() -> (Queue<String>, Queue<String>) {
    let mut a = Queue::new(3).unwrap();
    for s in ["a1", "a2", "a3"] {
        a.offer(s.to_string());
    }

    let mut b = Queue::new(3).unwrap();
    b.offer("b0".to_string());
    b.offer("b1".to_string());
    b.poll();

    (a, b)
}

#[test]
fn read_cursor_rejects_other_queue() {
    let (a, b) = twin_queues();
    let mut c = a.cursor();

    assert_eq!(c.next(&b), Err(QueueError::ConcurrentModification));
    assert_eq!(c.next(&b), Err(QueueError::ConcurrentModification));
    assert_eq!(c.next(&a).map(String::as_str), Ok("a1"));
    assert_eq!(b.len(), 1);
}

#[test]
fn primitive_read_cursor_rejects_other_queue() {
    let a = queue_of(3, &[1, 2, 3]);
    let mut b = queue_of(3, &[100, 200]);
    b.poll();

    let mut c = a.cursor();
    assert_eq!(c.next(&a), Ok(&1));
    assert_eq!(c.next(&b), Err(QueueError::ConcurrentModification));
}

#[test]
fn head_removing_cursor_rejects_other_queue() {
    let (mut a, mut b) = twin_queues();
    let mut c = a.head_removing_cursor();
    c.next(&a).unwrap();

    assert_eq!(c.remove(&mut b), Err(QueueError::ConcurrentModification));
    assert_eq!(b.len(), 1);
    assert_eq!(b.peek().map(String::as_str), Some("b1"));

    assert_eq!(c.remove(&mut a).as_deref(), Ok("a1"));
    assert_eq!(a.len(), 2);
}

#[test]
fn head_removing_cursor_rejects_empty_other_queue() {
    let mut a = queue_of(2, &[1]);
    let mut b = queue_of(2, &[7]);
    b.poll();
    b.offer(8);
    b.poll();
    let mut c = a.head_removing_cursor();
    c.next(&a).unwrap();
    assert!(b.is_empty());
    assert_eq!(c.remove(&mut b), Err(QueueError::ConcurrentModification));
    assert_eq!(c.remove(&mut a), Ok(1));
}
