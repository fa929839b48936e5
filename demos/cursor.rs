use movable_vec::{movable_vec, Error};


fn main() -> Result<(), Error> {
    let mut mv = movable_vec![1, 2, 3, 4, 5, 6];

    // Replace every even number by two copies of its half.
    let mut cursor = mv.cursor();
    while cursor.has_next() {
        let x = *cursor.next()?;
        if x % 2 == 0 {
            cursor.set(x / 2)?;
            cursor.insert(x / 2)?;
        }
    }
    println!("{:?}", mv);

    // Walk back to the front.
    let mut cursor = mv.cursor_at(mv.len())?;
    while cursor.has_previous() {
        let idx = cursor.previous_index();
        println!("{:?} -> {}", idx, *cursor.previous()?);
    }

    Ok(())
}
