pub mod activations;

pub use activations::{relu, relu_inplace, relu_inplace_with, relu_with};
