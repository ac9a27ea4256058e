pub mod vector;
pub mod states;
pub mod params;
pub mod field;
pub mod engine;
pub mod forces;
pub mod system;
pub mod scenario;
