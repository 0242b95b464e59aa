use ringq::{Cursor, Queue};
use std::cell::Cell;
use std::rc::Rc;

struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    fn new(drops: &Rc<Cell<usize>>) -> Self {
        Self {
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn queue_drop_test() {
    let drops = Rc::new(Cell::new(0));
    let mut q = Queue::new(4).unwrap();

    q.offer(DropCounter::new(&drops));
    q.offer(DropCounter::new(&drops));
    q.offer(DropCounter::new(&drops));

    std::mem::drop(q);
    assert_eq!(drops.get(), 3);
}

#[test]
fn wrapped_queue_drop_test() {
    let drops = Rc::new(Cell::new(0));
    let mut q = Queue::new(3).unwrap();

    for _ in 0..3 {
        q.offer(DropCounter::new(&drops));
    }
    let _ = q.poll();
    let _ = q.poll();
    q.offer(DropCounter::new(&drops));
    assert_eq!(drops.get(), 2);

    std::mem::drop(q);
    assert_eq!(drops.get(), 4);
}

#[test]
fn rejected_offer_drop_test() {
    let drops = Rc::new(Cell::new(0));
    let mut q = Queue::new(1).unwrap();

    assert!(q.offer(DropCounter::new(&drops)));
    assert!(!q.offer(DropCounter::new(&drops)));
    assert_eq!(drops.get(), 1);

    let rejected = q.try_offer(DropCounter::new(&drops)).unwrap_err();
    assert_eq!(drops.get(), 1);
    std::mem::drop(rejected.into_inner());
    assert_eq!(drops.get(), 2);
}

#[test]
fn cursor_remove_drop_test() {
    let drops = Rc::new(Cell::new(0));
    let mut q = Queue::new(4).unwrap();
    for _ in 0..4 {
        q.offer(DropCounter::new(&drops));
    }

    let mut c = q.head_removing_cursor();
    let _ = c.next(&q).unwrap();
    let _ = c.remove(&mut q).unwrap();
    assert_eq!(drops.get(), 1);

    let drained = q.drain_while(|_| true).take(2).count();
    assert_eq!(drained, 2);
    assert_eq!(drops.get(), 3);

    q.clear();
    assert_eq!(drops.get(), 4);
}
