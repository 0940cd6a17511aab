use qcover_core::derive_substream_seed;

/// Seed of the annealing batch run for clique count `k` under `master_seed`.
pub fn attempt_seed(master_seed: u64, k: usize) -> u64 {
    derive_substream_seed(master_seed, k as u64)
}

/// Seed of read `read` within a batch.
///
/// Depends only on the batch seed and the read index, so a batch of `n`
/// reads is a prefix of any larger batch with the same seed.
pub fn read_seed(batch_seed: u64, read: usize) -> u64 {
    derive_substream_seed(batch_seed, read as u64)
}
