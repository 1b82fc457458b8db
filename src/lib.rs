//! Plane and modified Givens rotation kernels in the BLAS Level-1 calling
//! convention, plus the strided vector companions they are used with.

pub mod linalg;
