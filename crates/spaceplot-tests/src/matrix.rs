//! Matrix behavior: construction, addressing, in-place addition
