//! This is just a dummy library to check the assembly output of some
//! functions. Moving and swapping should compile down to a few pointer
//! writes without any loop.

use movable_vec::MovableVec;

pub fn relocate_u32(source: &mut MovableVec<u32>, destination: &mut MovableVec<u32>) {
    MovableVec::relocate(source, destination);
}

pub fn swap_u32(a: &mut MovableVec<u32>, b: &mut MovableVec<u32>) {
    MovableVec::swap(a, b);
}

pub fn take_from_u32(source: &mut MovableVec<u32>) -> MovableVec<u32> {
    MovableVec::take_from(source)
}

pub fn get_u32(mv: &MovableVec<u32>, index: usize) -> Option<u32> {
    mv.get(index).ok().map(|e| *e)
}

pub fn push_u32(mv: &mut MovableVec<u32>, val: u32) {
    mv.push(val)
}
