pub mod broadcast_test;
pub mod matrix_ops_test;
pub mod nested_test;
