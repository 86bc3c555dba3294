//! Test suites driven by vector files under `src/vectors`
