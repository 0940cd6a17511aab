use crate::compiled::CompiledModel;
use crate::config::Schedule;

const HOT_ACCEPTANCE: f64 = 0.5;
const COLD_ACCEPTANCE: f64 = 0.01;

/// Builds the per-sweep temperature sequence for `model`.
///
/// The sequence has exactly `sweeps` entries and never increases.
pub fn build_temperatures(schedule: &Schedule, model: &CompiledModel, sweeps: usize) -> Vec<f64> {
    let (initial, last) = match schedule {
        Schedule::Auto => auto_range(model),
        Schedule::Geometric {
            initial_temperature,
            final_temperature,
        } => (*initial_temperature, *final_temperature),
    };
    geometric(initial, last, sweeps)
}

/// Temperatures at which the largest possible uphill flip is accepted with
/// probability 1/2 and the smallest with probability 1/100.
pub fn auto_range(model: &CompiledModel) -> (f64, f64) {
    let max_delta = model.max_flip_delta();
    let min_delta = model.min_coefficient();
    if max_delta <= 0.0 || min_delta <= 0.0 {
        return (1.0, 1.0);
    }
    let hot = max_delta / (1.0 / HOT_ACCEPTANCE).ln();
    let cold = min_delta / (1.0 / COLD_ACCEPTANCE).ln();
    (hot.max(cold), cold)
}

fn geometric(initial: f64, last: f64, sweeps: usize) -> Vec<f64> {
    match sweeps {
        0 => Vec::new(),
        1 => vec![last],
        _ => {
            let ratio = (last / initial).powf(1.0 / (sweeps - 1) as f64);
            let mut temperatures = Vec::with_capacity(sweeps);
            let mut temperature = initial;
            for _ in 0..sweeps - 1 {
                temperatures.push(temperature);
                temperature *= ratio;
            }
            temperatures.push(last);
            temperatures
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometric_hits_both_ends() {
        let temps = geometric(10.0, 0.1, 5);
        assert_eq!(temps.len(), 5);
        assert_eq!(temps[0], 10.0);
        assert_eq!(temps[4], 0.1);
        assert!((temps[2] - 1.0).abs() < 1e-9);
        assert!(temps.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn single_sweep_uses_final_temperature() {
        assert_eq!(geometric(4.0, 0.5, 1), vec![0.5]);
    }
}
