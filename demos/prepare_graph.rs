//! Converts the built-in sample graph and prints its `xadj` and `adjncy` arrays.

use adjacency_csr::{convert_parts, sample};

fn main() {
    let adjacency = sample::adjacency();

    match convert_parts(Some(&adjacency[..]), None, None) {
        Ok(graph) => {
            println!("{:?}", graph.offsets());
            println!("{:?}", graph.neighbors());
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
