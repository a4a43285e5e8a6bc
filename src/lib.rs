// Root finding and domain colouring for complex polynomials
//
// The binary in main.rs drives these from a json description, anything else
// embedding the engine only needs a coefficient list and a viewport.

pub mod animation;
pub mod complex;
pub mod domain_colouring;
pub mod error;
pub mod overlay;
pub mod polynomial;
pub mod roots;
pub mod viewport;
