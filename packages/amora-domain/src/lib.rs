pub mod profile;
pub mod ranking;
pub mod reciprocity;
pub mod similarity;
pub mod vector;
