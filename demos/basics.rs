use ringq::{Cursor, I32Queue};

fn main() {
    let mut q = I32Queue::new(4).unwrap();

    for i in [11, 20, 22, 31, 40] {
        if !q.offer(i) {
            println!("queue full, dropped {}", i);
        }
    }

    match q.poll_if(|v| v % 2 == 0) {
        Some(v) => println!("polled even head {}", v),
        None => println!("head {:?} is odd, left in place", q.peek()),
    }

    let mut cursor = q.head_removing_cursor();
    while cursor.has_next() {
        let head = *cursor.next(&q).unwrap();
        if head > 25 {
            break;
        }
        println!("consumed {}", cursor.remove(&mut q).unwrap());
    }

    println!("left = {:?}", q);
}
