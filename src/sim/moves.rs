use crate::error::SimError;
use crate::rng::UniformSource;

/// Draw `n` signed random displacements with magnitude in `[1, max_amplitude]`.
///
/// Each value consumes two draws from the stream: magnitude first
/// (`next_int(max_amplitude - 1) + 1`), then a binary draw that flips the
/// sign. Values are never zero. Batch order matches the order the
/// redistributor assigns moves to particles, so the mapping from draw to
/// particle is reproducible under a fixed seed.
pub fn sample_moves(
    n: u64,
    max_amplitude: u32,
    source: &mut dyn UniformSource,
) -> Result<Vec<i64>, SimError> {
    if max_amplitude < 1 {
        return Err(SimError::InvalidAmplitude(max_amplitude));
    }
    let mut moves = Vec::with_capacity(n as usize);
    for _ in 0..n {
        let magnitude = source.next_int(u64::from(max_amplitude) - 1) as i64 + 1;
        if source.next_int(1) == 1 {
            moves.push(-magnitude);
        } else {
            moves.push(magnitude);
        }
    }
    Ok(moves)
}
