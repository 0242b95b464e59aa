use crate::capacity::Capacity;
use crate::Storage;

/// Storage for arbitrary element types. Vacant slots hold `None`, so a
/// polled element is moved out rather than left behind as a stale copy.
pub struct SlotStorage<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Storage for SlotStorage<T> {
    type Item = T;

    fn with_capacity(cap: Capacity) -> Self {
        let slots = (0..cap.get()).map(|_| None).collect();
        Self { slots }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, idx: usize) -> &T {
        match &self.slots[idx] {
            Some(item) => item,
            None => unreachable!("read of vacant slot {}", idx),
        }
    }

    fn set(&mut self, idx: usize, value: T) {
        self.slots[idx] = Some(value);
    }

    fn take(&mut self, idx: usize) -> T {
        match self.slots[idx].take() {
            Some(item) => item,
            None => unreachable!("take of vacant slot {}", idx),
        }
    }
}

/// Unboxed storage for primitive element types. Every slot always holds a
/// value: `T::default()` until first written, then whatever was last
/// offered there.
pub struct ArrayStorage<T> {
    buf: Box<[T]>,
}

impl<T: Copy + Default> Storage for ArrayStorage<T> {
    type Item = T;

    fn with_capacity(cap: Capacity) -> Self {
        let buf = vec![T::default(); cap.get()].into_boxed_slice();
        Self { buf }
    }

    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn get(&self, idx: usize) -> &T {
        &self.buf[idx]
    }

    fn set(&mut self, idx: usize, value: T) {
        self.buf[idx] = value;
    }

    fn take(&mut self, idx: usize) -> T {
        self.buf[idx]
    }
}
