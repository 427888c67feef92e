//! Explicit finite-difference diffusion step.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use super::Field;

/// Advance the field by one forward-Euler diffusion step.
///
/// For every interior cell the 4-neighbor discrete Laplacian is applied:
///
/// ```text
/// lap  = left + right + up + down - 4 * center
/// next = (center + alpha * lap) * damping
/// ```
///
/// The pass reads only the current buffer and writes only the scratch
/// buffer; the two are swapped exactly once after the full interior has been
/// processed, so a read can never observe a partially written time-step. The
/// border ring is left untouched (Dirichlet boundary). Stability requires
/// `alpha <= 0.25` — see [`crate::schema::ALPHA_STABILITY_LIMIT`].
pub fn diffuse(field: &mut Field, alpha: f32, damping: f32) {
    let n = field.resolution();
    let (src, dst) = field.split_buffers();

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Interior rows are independent: each worker writes one scratch row
        // while all share the read-only source. The swap happens after the
        // parallel sweep has fully completed.
        dst.par_chunks_mut(n)
            .enumerate()
            .skip(1)
            .take(n - 2)
            .for_each(|(row, out)| diffuse_row(src, out, row, n, alpha, damping));
    }

    #[cfg(target_arch = "wasm32")]
    {
        for (row, out) in dst.chunks_mut(n).enumerate().skip(1).take(n - 2) {
            diffuse_row(src, out, row, n, alpha, damping);
        }
    }

    field.swap_buffers();
    field.advance_iteration();
}

#[inline]
fn diffuse_row(src: &[f32], out: &mut [f32], row: usize, n: usize, alpha: f32, damping: f32) {
    let offset = row * n;
    for col in 1..n - 1 {
        let i = offset + col;
        let center = src[i];
        let lap = src[i - 1] + src[i + 1] + src[i - n] + src[i + n] - 4.0 * center;
        out[col] = (center + alpha * lap) * damping;
    }
}
