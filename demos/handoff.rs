use movable_vec::{movable_vec, MovableVec};


fn main() {
    let mut incoming = movable_vec!["alpha", "beta", "gamma"];
    let mut owned = MovableVec::new();

    let snapshot = incoming.read_only_store();

    println!("--- before move_to():");
    println!("incoming: {:?}", incoming);
    println!("owned:    {:?}", owned);

    incoming.move_to(&mut owned);
    println!("--- after move_to():");
    println!("incoming: {:?}", incoming);
    println!("owned:    {:?}", owned);
    println!("snapshot: {:?}", snapshot);

    incoming.push("delta");
    incoming.swap_with(&mut owned);
    println!("--- after swap_with():");
    println!("incoming: {:?}", incoming);
    println!("owned:    {:?}", owned);
    println!("snapshot: {:?}", snapshot);
}
