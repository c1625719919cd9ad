//! Benchmark fixtures for the shelf list.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use shelf::ArrayList;

/// Build a list holding `0..n` by tail appends.
pub fn filled_list(n: usize) -> ArrayList<usize> {
    let mut list = ArrayList::new();
    for i in 0..n {
        list.add(i, i).expect("append index is always valid");
    }
    list
}
