//! Vector behavior: layout, arithmetic, aliasing, dot products
