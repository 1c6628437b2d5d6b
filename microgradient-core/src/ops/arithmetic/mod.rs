// Foundational arithmetic operations
pub mod add;
pub mod mul;
pub mod pow;

// Composite operations, built from the ones above
pub mod div;
pub mod neg;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

pub(crate) use add::add_nodes;
pub(crate) use mul::mul_nodes;
pub(crate) use pow::pow_node;
pub(crate) use div::rdiv_constant;
pub(crate) use sub::rsub_constant;
