use std::collections::BTreeMap;

/// Spin-glass form of a QUBO: `E(s) = offset + sum h_i s_i + sum J_ij s_i s_j`
/// with `s_i` in `{-1, +1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct IsingModel {
    /// Local fields.
    pub h: Vec<f64>,
    /// Couplings keyed by `(i, j)` with `i < j`.
    pub j: BTreeMap<(usize, usize), f64>,
    /// Constant energy shift.
    pub offset: f64,
}

impl IsingModel {
    /// Converts upper-triangular QUBO coefficients using `x = (1 + s) / 2`.
    ///
    /// Entries with an index outside `0..num_variables` are ignored.
    pub fn from_qubo(
        num_variables: usize,
        coefficients: impl IntoIterator<Item = ((usize, usize), f64)>,
    ) -> Self {
        let mut h = vec![0.0; num_variables];
        let mut j = BTreeMap::new();
        let mut offset = 0.0;
        for ((a, b), value) in coefficients {
            if a >= num_variables || b >= num_variables {
                continue;
            }
            if a == b {
                h[a] += value / 2.0;
                offset += value / 2.0;
            } else {
                *j.entry((a.min(b), a.max(b))).or_insert(0.0) += value / 4.0;
                h[a] += value / 4.0;
                h[b] += value / 4.0;
                offset += value / 4.0;
            }
        }
        Self { h, j, offset }
    }

    /// Energy of a spin configuration. Entries other than `+1` read as `-1`.
    pub fn energy(&self, spins: &[i8]) -> f64 {
        let spin = |index: usize| {
            if spins.get(index).copied() == Some(1) {
                1.0
            } else {
                -1.0
            }
        };
        let field: f64 = self
            .h
            .iter()
            .enumerate()
            .map(|(index, h)| h * spin(index))
            .sum();
        let coupling: f64 = self
            .j
            .iter()
            .map(|(&(a, b), value)| value * spin(a) * spin(b))
            .sum();
        self.offset + field + coupling
    }

    /// Spin configuration for a binary state.
    pub fn spins_from_bits(bits: &[bool]) -> Vec<i8> {
        bits.iter().map(|&bit| if bit { 1 } else { -1 }).collect()
    }
}
