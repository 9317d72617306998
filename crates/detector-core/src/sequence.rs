//! Fixed-length model input from a token sequence.
//!
//! Matches `pad_sequences(padding="post", truncating="pre")`: short sequences
//! are zero-filled on the right, long ones keep their tail.

use ndarray::Array2;

pub const PAD_VALUE: u32 = 0;

/// Padded token ids as model input, shape `(1, max_len)`.
pub type ModelInput = Array2<f32>;

pub fn pad_sequence(seq: &[u32], max_len: usize) -> Vec<u32> {
    let start = seq.len().saturating_sub(max_len);
    let mut out = seq[start..].to_vec();
    out.resize(max_len, PAD_VALUE);
    out
}

pub fn to_model_input(seq: &[u32], max_len: usize) -> ModelInput {
    let padded = pad_sequence(seq, max_len);
    Array2::from_shape_fn((1, max_len), |(_, j)| padded[j] as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_on_the_right() {
        assert_eq!(pad_sequence(&[5, 6], 5), vec![5, 6, 0, 0, 0]);
    }

    #[test]
    fn truncates_from_the_front() {
        assert_eq!(pad_sequence(&[1, 2, 3, 4, 5, 6], 4), vec![3, 4, 5, 6]);
    }

    #[test]
    fn exact_and_empty() {
        assert_eq!(pad_sequence(&[1, 2, 3], 3), vec![1, 2, 3]);
        assert_eq!(pad_sequence(&[], 3), vec![0, 0, 0]);
    }

    #[test]
    fn model_input_shape() {
        let input = to_model_input(&[7, 8], 4);
        assert_eq!(input.shape(), &[1, 4]);
        assert_eq!(input.row(0).to_vec(), vec![7.0, 8.0, 0.0, 0.0]);
    }
}
