pub mod alignment_info;
pub mod msa_builder;
