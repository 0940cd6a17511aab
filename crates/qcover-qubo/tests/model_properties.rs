use std::collections::BTreeSet;

use proptest::prelude::*;
use qcover_core::rng::RngHandle;
use qcover_core::Graph;
use qcover_graph::gnp;
use qcover_qubo::{EnergyModel, IsingModel, QuadraticModel, VariableKey};

proptest! {
    #[test]
    fn keys_are_unique_and_diagonal_is_minus_a(
        seed in any::<u64>(),
        nodes in 1usize..12,
        p in 0.0f64..=1.0,
        k in 1usize..5,
        a in 0.5f64..4.0,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp(nodes, p, &mut rng).unwrap();
        let model = EnergyModel::build(&graph, k, a).unwrap();

        let keys: Vec<(usize, usize)> = model.iter().map(|(key, _)| key).collect();
        let unique: BTreeSet<_> = keys.iter().copied().collect();
        prop_assert_eq!(unique.len(), keys.len());
        prop_assert!(keys.iter().all(|&(i, j)| i <= j));

        prop_assert_eq!(model.num_variables(), nodes * k);
        for index in 0..model.num_variables() {
            prop_assert_eq!(model.linear(index), -a);
        }
    }

    #[test]
    fn quadratic_terms_follow_the_encoding(
        seed in any::<u64>(),
        nodes in 2usize..10,
        p in 0.0f64..=1.0,
        k in 1usize..4,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp(nodes, p, &mut rng).unwrap();
        let model = EnergyModel::build(&graph, k, 2.0).unwrap();
        let weights = model.weights();
        let vertices: Vec<_> = graph.nodes().collect();

        for &u in &vertices {
            for c1 in 0..k {
                for c2 in (c1 + 1)..k {
                    let value = model.coefficient_by_key(VariableKey::new(u, c1), VariableKey::new(u, c2));
                    prop_assert_eq!(value, 2.0 * weights.a);
                }
            }
            for &v in vertices.iter().filter(|&&v| v > u) {
                for c in 0..k {
                    let value = model.coefficient_by_key(VariableKey::new(u, c), VariableKey::new(v, c));
                    let expected = if graph.has_edge(u, v) { 0.0 } else { weights.b };
                    prop_assert_eq!(value, expected);
                }
                if k > 1 {
                    let cross = model.coefficient_by_key(VariableKey::new(u, 0), VariableKey::new(v, 1));
                    prop_assert_eq!(cross, 0.0);
                }
            }
        }
    }

    #[test]
    fn ising_view_preserves_energy(
        seed in any::<u64>(),
        nodes in 1usize..8,
        k in 1usize..4,
        bits_seed in any::<u64>(),
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gnp(nodes, 0.5, &mut rng).unwrap();
        let model = EnergyModel::build(&graph, k, 2.0).unwrap();
        let ising = model.to_ising();

        let mut bits_rng = RngHandle::from_seed(bits_seed);
        let bits: Vec<bool> = (0..model.num_variables()).map(|_| bits_rng.next_unit() < 0.5).collect();
        let spins = IsingModel::spins_from_bits(&bits);
        prop_assert!((model.energy(&bits) - ising.energy(&spins)).abs() < 1e-9);
    }
}
