/// Wiring of the knot grid for each pattern family
pub mod builder;
/// The closed set of structural pattern families
pub mod family;
/// The ribbon pattern aggregate and its mutation operations
pub mod pattern;
/// Thread color propagation through the link graph
pub mod propagation;
/// Thread entry points and their default colors
pub mod threads;
