/// Calculates the epoch index for a wall-clock timestamp. Time should be
/// formatted as seconds, `epoch_duration` must be non-zero (validated at
/// contract instantiation).
pub fn get_epoch(seconds: u64, epoch_duration: u64) -> u64 {
  seconds / epoch_duration
}

/// Converts an epoch index back to the start time of the epoch.
pub fn get_epoch_start(epoch: u64, epoch_duration: u64) -> u64 {
  epoch * epoch_duration
}
