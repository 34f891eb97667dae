// Element-wise math functions (exp, ln)
pub mod exp;
pub mod ln;

// Re-export the public functions
pub use exp::exp_op;
pub use ln::ln_op;
