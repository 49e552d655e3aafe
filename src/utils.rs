// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;

/// XORs two 16-byte blocks into `output`. CBC chaining step for both directions.
///
/// # Panics (by contract)
///
/// Panics if any argument is shorter than 16 bytes. Callers pass whole AES
/// blocks from `chunks_exact(16)` or fixed `[u8; 16]` buffers.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}
