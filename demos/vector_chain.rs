extern crate hermite_chain;

use hermite_chain::{ChainConfig, InterpolationChain, Vector};

fn main() {
    env_logger::init();

    // closed loop through the corners of a square with tangents along its sides
    let corners = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];
    let tangents = [[1.0, -1.0], [1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0], [1.0, -1.0]];

    let config = ChainConfig::default();
    let mut chain: InterpolationChain<Vector<f64>> = InterpolationChain::from_config(config).unwrap();
    for _ in 0..corners.len() {
        chain.add_blank_node();
    }

    let positions = corners
        .iter()
        .map(|p| Vector::from_vec(p.to_vec()).unwrap())
        .collect::<Vec<_>>();
    let velocities = tangents
        .iter()
        .map(|v| Vector::from_vec(v.to_vec()).unwrap())
        .collect::<Vec<_>>();
    chain.add_values_layer(&positions).unwrap();
    chain.add_values_layer(&velocities).unwrap();

    println!("x;y");
    for point in chain.calc_values().unwrap() {
        println!("{:.3};{:.3}", point[0], point[1]);
    }
}
