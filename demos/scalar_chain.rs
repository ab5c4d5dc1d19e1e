extern crate hermite_chain;

use hermite_chain::{InterpolationChain, InterpolationNode};

fn main() {
    env_logger::init();

    // value, slope and second order term at every node
    let nodes = vec![
        vec![1.0, 0.0, 0.0],
        vec![-1.0, 0.5, 2.0],
        vec![0.0, 1.0, 0.0],
        vec![3.0, -1.0, -4.0],
        vec![1.0, 0.0, 0.0],
    ];
    let segment_size = 20;

    let mut chain = InterpolationChain::new(3, segment_size).unwrap();
    for values in nodes {
        chain.add_node(InterpolationNode::from_values(values)).unwrap();
    }

    let step = 1.0 / segment_size as f64;

    println!("t;y");
    for (i, y) in chain.calc_values().unwrap().iter().enumerate() {
        println!("{:.2};{:.3}", step * i as f64, y);
    }
}
