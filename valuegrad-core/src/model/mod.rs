pub mod mlp;

pub use mlp::Mlp;
