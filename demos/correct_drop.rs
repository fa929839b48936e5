use movable_vec::MovableVec;

/// A dummy type which prints its character when dropped.
struct EchoDrop(pub char);

impl Drop for EchoDrop {
    fn drop(&mut self) {
        println!("I was dropped: {}", self.0);
    }
}

fn main() {
    let mut a = MovableVec::new();
    a.push(EchoDrop('a'));
    a.push(EchoDrop('b'));

    let mut b = MovableVec::new();
    b.push(EchoDrop('x'));

    // Moving does not drop anything in `a`, but `b` releases its old store.
    println!("--- moving 'a' and 'b' into the other vector ('x' should be dropped!) ...");
    a.move_to(&mut b);

    // Swapping never drops anything.
    println!("--- swapping back (nothing should be dropped!) ...");
    a.swap_with(&mut b);

    println!("--- Letting everything go out of scope (it should drop 'a' and 'b'!) ...");
}
