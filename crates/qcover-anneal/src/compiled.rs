use qcover_qubo::QuadraticModel;

/// Adjacency-list form of a [`QuadraticModel`] used by the inner loop.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledModel {
    linear: Vec<f64>,
    neighbours: Vec<Vec<(usize, f64)>>,
}

impl CompiledModel {
    /// Compiles the coefficients of `model`. Interactions outside
    /// `0..num_variables()` are ignored.
    pub fn new(model: &dyn QuadraticModel) -> Self {
        let n = model.num_variables();
        let linear = (0..n).map(|index| model.linear(index)).collect();
        let mut neighbours = vec![Vec::new(); n];
        for (i, j, value) in model.interactions() {
            if i >= n || j >= n || i == j || value == 0.0 {
                continue;
            }
            neighbours[i].push((j, value));
            neighbours[j].push((i, value));
        }
        Self { linear, neighbours }
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.linear.len()
    }

    /// Linear coefficient of `index`.
    pub fn linear(&self, index: usize) -> f64 {
        self.linear[index]
    }

    /// Weighted neighbours of `index`.
    pub fn neighbours(&self, index: usize) -> &[(usize, f64)] {
        &self.neighbours[index]
    }

    /// Local fields `h_i + sum_j Q_ij x_j` for a state.
    pub fn local_fields(&self, state: &[bool]) -> Vec<f64> {
        (0..self.num_variables())
            .map(|index| {
                self.linear[index]
                    + self.neighbours[index]
                        .iter()
                        .filter(|(other, _)| state[*other])
                        .map(|(_, value)| value)
                        .sum::<f64>()
            })
            .collect()
    }

    /// Upper bound on the energy change of any single flip.
    pub fn max_flip_delta(&self) -> f64 {
        (0..self.num_variables())
            .map(|index| {
                self.linear[index].abs()
                    + self.neighbours[index]
                        .iter()
                        .map(|(_, value)| value.abs())
                        .sum::<f64>()
            })
            .fold(0.0, f64::max)
    }

    /// Smallest non-zero absolute coefficient, or zero if every coefficient
    /// vanishes.
    pub fn min_coefficient(&self) -> f64 {
        self.linear
            .iter()
            .chain(self.neighbours.iter().flatten().map(|(_, value)| value))
            .map(|value| value.abs())
            .filter(|value| *value > 0.0)
            .fold(None, |best: Option<f64>, value| {
                Some(best.map_or(value, |current| current.min(value)))
            })
            .unwrap_or(0.0)
    }
}
