use qcover_core::RngHandle;

use crate::cancel::CancelToken;
use crate::compiled::CompiledModel;

/// Result of a single annealing read before energy ranking.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ReadOutcome {
    pub state: Vec<bool>,
    pub accepted_flips: usize,
    pub proposed_flips: usize,
    pub interrupted: bool,
}

/// Metropolis acceptance probability for an energy change at `temperature`.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        return 1.0;
    }
    (-delta / temperature.max(1e-12)).exp().min(1.0)
}

/// Runs one independent read: random start, one Metropolis sweep per
/// temperature, then optional zero-temperature descent.
pub(crate) fn anneal_read(
    model: &CompiledModel,
    temperatures: &[f64],
    max_quench_sweeps: usize,
    rng: &mut RngHandle,
    cancel: &CancelToken,
) -> ReadOutcome {
    let n = model.num_variables();
    let mut state: Vec<bool> = (0..n).map(|_| rng.next_unit() < 0.5).collect();
    let mut fields = model.local_fields(&state);
    let mut accepted_flips = 0usize;
    let mut proposed_flips = 0usize;

    for &temperature in temperatures {
        if cancel.is_cancelled() {
            return ReadOutcome {
                state,
                accepted_flips,
                proposed_flips,
                interrupted: true,
            };
        }
        for index in 0..n {
            proposed_flips += 1;
            let delta = flip_delta(&state, &fields, index);
            let accepted =
                delta <= 0.0 || rng.next_unit() < acceptance_probability(delta, temperature);
            if accepted {
                apply_flip(model, &mut state, &mut fields, index);
                accepted_flips += 1;
            }
        }
    }

    for _ in 0..max_quench_sweeps {
        if cancel.is_cancelled() {
            return ReadOutcome {
                state,
                accepted_flips,
                proposed_flips,
                interrupted: true,
            };
        }
        let mut improved = false;
        for index in 0..n {
            proposed_flips += 1;
            if flip_delta(&state, &fields, index) < 0.0 {
                apply_flip(model, &mut state, &mut fields, index);
                accepted_flips += 1;
                improved = true;
            }
        }
        if !improved {
            break;
        }
    }

    ReadOutcome {
        state,
        accepted_flips,
        proposed_flips,
        interrupted: false,
    }
}

// Setting x_i adds its local field; clearing it removes it.
fn flip_delta(state: &[bool], fields: &[f64], index: usize) -> f64 {
    if state[index] {
        -fields[index]
    } else {
        fields[index]
    }
}

fn apply_flip(model: &CompiledModel, state: &mut [bool], fields: &mut [f64], index: usize) {
    state[index] = !state[index];
    let sign = if state[index] { 1.0 } else { -1.0 };
    for &(other, value) in model.neighbours(index) {
        fields[other] += sign * value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downhill_moves_are_always_accepted() {
        assert_eq!(acceptance_probability(-3.0, 0.1), 1.0);
        assert_eq!(acceptance_probability(0.0, 0.1), 1.0);
    }

    #[test]
    fn uphill_moves_follow_boltzmann_factor() {
        let p = acceptance_probability(2.0, 1.0);
        assert!((p - (-2.0f64).exp()).abs() < 1e-12);
        assert!(acceptance_probability(2.0, 0.0) < 1e-100);
    }
}
